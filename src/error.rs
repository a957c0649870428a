use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Failures surfaced by this crate.
///
/// The first six variants are hard input errors: caller misuse with a
/// fixed, caller-facing message. Fraud rejections and gateway declines
/// are not errors; they come back as ordinary `PaymentResult` values.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Invalid card number format")]
    InvalidCardFormat,
    #[error("Invalid expiry date")]
    InvalidExpiryDate,
    #[error("Currency cannot be empty")]
    EmptyCurrency,
    #[error("Customer ID cannot be blank")]
    BlankCustomerId,
    #[error("Base amount must be positive")]
    NonPositiveBaseAmount,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
