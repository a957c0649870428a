use std::fmt;

/// Hard ceiling on a single charge, in minor units.
pub const TRANSACTION_LIMIT: i64 = 100_000;

/// The fixed set of decline reasons the simulated network produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    LimitExceeded,
    CardBlocked,
    InsufficientFunds,
    GatewayTimeout,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclineReason::LimitExceeded => write!(f, "Transaction limit exceeded"),
            DeclineReason::CardBlocked => write!(f, "Card blocked"),
            DeclineReason::InsufficientFunds => write!(f, "Insufficient funds"),
            DeclineReason::GatewayTimeout => write!(f, "Gateway timeout"),
        }
    }
}

/// Response from the simulated payment network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayOutcome {
    pub approved: bool,
    pub decline_reason: Option<DeclineReason>,
}

/// Deterministic stand-in for a real payment network, first match wins.
///
/// The limit check is independent of card identity and outranks every
/// card-specific rule; the modulo rule stands in for gateway flakiness
/// and only fires once the deterministic checks have all passed.
pub fn try_charge(card_number: &str, amount: i64) -> GatewayOutcome {
    let decline_reason = if amount > TRANSACTION_LIMIT {
        Some(DeclineReason::LimitExceeded)
    } else if card_number.starts_with("4444") {
        Some(DeclineReason::CardBlocked)
    } else if card_number.starts_with("5500") {
        Some(DeclineReason::InsufficientFunds)
    } else if amount % 17 == 0 {
        Some(DeclineReason::GatewayTimeout)
    } else {
        None
    };

    GatewayOutcome {
        approved: decline_reason.is_none(),
        decline_reason,
    }
}
