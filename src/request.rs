use serde::{Deserialize, Serialize};

/// A single payment authorization request.
///
/// `amount` is an integer in minor currency units. Requests are built by
/// the caller and consumed once by the processor; nothing here is mutated.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentRequest {
    pub amount: i64,
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub customer_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
    Rejected,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Success => write!(f, "SUCCESS"),
            PaymentStatus::Failed => write!(f, "FAILED"),
            PaymentStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Outcome of one authorization attempt. Exactly one result exists per
/// accepted request; it has no identity beyond its values.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentResult {
    pub status: PaymentStatus,
    pub message: String,
}

impl PaymentResult {
    /// A completed payment. The message is a fixed literal.
    pub fn success() -> Self {
        Self {
            status: PaymentStatus::Success,
            message: "Payment completed".to_string(),
        }
    }

    /// Structural or fraud rejection, before the gateway is consulted.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Rejected,
            message: message.into(),
        }
    }

    /// Gateway decline of a well-formed, non-suspicious request.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::Failed,
            message: message.into(),
        }
    }
}
