//! Domain Services
//!
//! Pure domain logic for money amounts. All amounts are integer minor
//! units (e.g. kobo); no floating point anywhere near balances.

use crate::domain::value_objects::CommissionRate;

/// Result of splitting an order amount between platform and seller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionSplit {
    pub commission: i64,
    pub seller_amount: i64,
}

/// Split an order amount by the commission rate.
///
/// The commission is truncated toward zero, so the remainder of the
/// division always stays with the seller. Invariant:
/// `commission + seller_amount == amount`.
pub fn split_commission(amount: i64, rate: CommissionRate) -> CommissionSplit {
    let commission = amount * i64::from(rate.percent()) / 100;
    CommissionSplit {
        commission,
        seller_amount: amount - commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_example_from_docs() {
        // price 1000, commission 10% -> commission 100, seller 900
        let split = split_commission(1000, CommissionRate::new(10).unwrap());
        assert_eq!(split.commission, 100);
        assert_eq!(split.seller_amount, 900);
    }

    #[test]
    fn test_split_sums_to_amount() {
        for amount in [0, 1, 99, 999, 12_345, 500_000] {
            for percent in [0u8, 1, 10, 33, 99, 100] {
                let rate = CommissionRate::new(percent).unwrap();
                let split = split_commission(amount, rate);
                assert_eq!(
                    split.commission + split.seller_amount,
                    amount,
                    "amount {} at {}%",
                    amount,
                    percent
                );
            }
        }
    }

    #[test]
    fn test_remainder_goes_to_seller() {
        // 999 * 10 / 100 = 99 (truncated); seller keeps 900
        let split = split_commission(999, CommissionRate::new(10).unwrap());
        assert_eq!(split.commission, 99);
        assert_eq!(split.seller_amount, 900);
    }

    #[test]
    fn test_extreme_rates() {
        let zero = split_commission(1000, CommissionRate::new(0).unwrap());
        assert_eq!(zero.commission, 0);
        assert_eq!(zero.seller_amount, 1000);

        let all = split_commission(1000, CommissionRate::new(100).unwrap());
        assert_eq!(all.commission, 1000);
        assert_eq!(all.seller_amount, 0);
    }
}
