use crate::error::{PaymentError, Result};

/// One loyalty bracket. A bracket applies from `min_points` upward,
/// until the next bracket's threshold takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyTier {
    pub min_points: i64,
    pub rate_percent: i64,
    pub cap: i64,
}

/// Discount brackets, ordered by `min_points` ascending. Lower bounds
/// are inclusive: points exactly at a threshold select that bracket.
pub const LOYALTY_TIERS: [LoyaltyTier; 5] = [
    LoyaltyTier { min_points: 0, rate_percent: 0, cap: 0 },
    LoyaltyTier { min_points: 500, rate_percent: 5, cap: 500 },
    LoyaltyTier { min_points: 2_000, rate_percent: 10, cap: 1_500 },
    LoyaltyTier { min_points: 5_000, rate_percent: 15, cap: 3_000 },
    LoyaltyTier { min_points: 10_000, rate_percent: 20, cap: 5_000 },
];

/// Discount for `points` applied to `base_amount`, in minor units.
/// Integer floor arithmetic, clamped at the bracket cap. A non-positive
/// base amount is a contract violation, not a business outcome.
pub fn calculate_loyalty_discount(points: i64, base_amount: i64) -> Result<i64> {
    if base_amount <= 0 {
        return Err(PaymentError::NonPositiveBaseAmount);
    }
    let tier = LOYALTY_TIERS
        .iter()
        .rev()
        .find(|tier| points >= tier.min_points)
        .unwrap_or(&LOYALTY_TIERS[0]);
    Ok((base_amount * tier.rate_percent / 100).min(tier.cap))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ascending() {
        for pair in LOYALTY_TIERS.windows(2) {
            assert!(pair[0].min_points < pair[1].min_points);
            assert!(pair[0].cap <= pair[1].cap);
        }
    }

    #[test]
    fn test_non_positive_base_amount_is_an_error() {
        assert!(matches!(
            calculate_loyalty_discount(1_000, 0),
            Err(PaymentError::NonPositiveBaseAmount)
        ));
        assert!(matches!(
            calculate_loyalty_discount(1_000, -100),
            Err(PaymentError::NonPositiveBaseAmount)
        ));
    }

    #[test]
    fn test_bottom_bracket_grants_nothing() {
        assert_eq!(calculate_loyalty_discount(0, 10_000).unwrap(), 0);
        assert_eq!(calculate_loyalty_discount(499, 10_000).unwrap(), 0);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(calculate_loyalty_discount(500, 10_000).unwrap(), 500);
        assert_eq!(calculate_loyalty_discount(2_000, 2_000).unwrap(), 200);
        assert_eq!(calculate_loyalty_discount(5_000, 5_000).unwrap(), 750);
        assert_eq!(calculate_loyalty_discount(10_000, 10_000).unwrap(), 2_000);
    }

    #[test]
    fn test_discount_is_capped() {
        assert_eq!(calculate_loyalty_discount(500, 20_000).unwrap(), 500);
        assert_eq!(calculate_loyalty_discount(2_000, 20_000).unwrap(), 1_500);
        assert_eq!(calculate_loyalty_discount(5_000, 25_000).unwrap(), 3_000);
        assert_eq!(calculate_loyalty_discount(10_000, 30_000).unwrap(), 5_000);
    }

    #[test]
    fn test_rate_multiplication_floors() {
        // 4990 * 10% = 499, no rounding up
        assert_eq!(calculate_loyalty_discount(4_999, 4_990).unwrap(), 499);
        // 103 * 20% = 20.6, floored
        assert_eq!(calculate_loyalty_discount(10_000, 103).unwrap(), 20);
        assert_eq!(calculate_loyalty_discount(10_000, 100).unwrap(), 20);
    }
}
