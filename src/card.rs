/// Structural check: ASCII digits only, 13 to 19 characters inclusive.
/// Separators, whitespace, and empty strings all fail.
pub fn is_valid_card_format(card_number: &str) -> bool {
    (13..=19).contains(&card_number.len())
        && card_number.bytes().all(|b| b.is_ascii_digit())
}

/// Luhn checksum verdict, inverted: true means the number is NOT a valid
/// Luhn string, either because it contains a non-digit or because the
/// mod-10 sum fails. Tolerant of length; format checks run separately.
pub fn is_luhn_invalid(card_number: &str) -> bool {
    if !card_number.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let sum: u32 = card_number
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 != 0
}
