use crate::card::is_luhn_invalid;

/// Card prefixes flagged as fraud-suspicious regardless of checksum
/// validity. `5500` is not on this list: those cards pass screening and
/// are declined later, at the gateway, as insufficient funds.
pub const FRAUD_PREFIXES: [&str; 4] = ["4444", "5555", "1111", "9999"];

/// Suspicion verdict: a failing Luhn checksum or a denylisted prefix.
pub fn is_suspicious_card(card_number: &str) -> bool {
    is_luhn_invalid(card_number)
        || FRAUD_PREFIXES
            .iter()
            .any(|prefix| card_number.starts_with(prefix))
}
