//! Party balance recalculation formula.
//!
//! A party's stored `current_balance` is a materialized view, never a source
//! of truth: it is always recomputed from the full history via this formula,
//! and never adjusted incrementally.

use rust_decimal::Decimal;

/// The inputs of a full-history balance recalculation for one party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceInputs {
    /// Balance carried over from before the ledger started.
    pub opening_balance: Decimal,
    /// Sum of `net_amount` over every trade referencing the party.
    pub trade_net_sum: Decimal,
    /// Sum of `amount` over every payment/receipt settled with the party.
    pub settled_sum: Decimal,
}

/// Computes a party's current balance from its full history.
///
/// `opening + trade net sum - settled sum`, for both sides of the book:
/// - Farmer: positive means the firm still owes the farmer.
/// - Purchaser: positive means the purchaser still owes the firm.
///
/// Overpayment is not rejected anywhere in the engine, so the result may be
/// negative on either side.
#[must_use]
pub fn current_balance(inputs: BalanceInputs) -> Decimal {
    inputs.opening_balance + inputs.trade_net_sum - inputs.settled_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_worked_example_farmer() {
        // opening 1000, one trade net 5000, one payment 2000 -> 4000
        let balance = current_balance(BalanceInputs {
            opening_balance: dec!(1000),
            trade_net_sum: dec!(5000),
            settled_sum: dec!(2000),
        });
        assert_eq!(balance, dec!(4000));
    }

    #[test]
    fn test_overpayment_goes_negative() {
        // purchaser balance 500, receipt 800 -> -300, permitted
        let balance = current_balance(BalanceInputs {
            opening_balance: Decimal::ZERO,
            trade_net_sum: dec!(500),
            settled_sum: dec!(800),
        });
        assert_eq!(balance, dec!(-300));
    }

    #[test]
    fn test_no_history_equals_opening() {
        let balance = current_balance(BalanceInputs {
            opening_balance: dec!(-750.25),
            trade_net_sum: Decimal::ZERO,
            settled_sum: Decimal::ZERO,
        });
        assert_eq!(balance, dec!(-750.25));
    }

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..=1_000_000).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Recomputing from the same history is idempotent.
        #[test]
        fn prop_recalculation_idempotent(
            opening in amount_strategy(),
            trades in amount_strategy(),
            settled in amount_strategy(),
        ) {
            let inputs = BalanceInputs {
                opening_balance: opening,
                trade_net_sum: trades,
                settled_sum: settled,
            };
            prop_assert_eq!(current_balance(inputs), current_balance(inputs));
        }

        /// The balance responds linearly to an extra settlement: paying `x`
        /// more lowers the balance by exactly `x`.
        #[test]
        fn prop_extra_settlement_lowers_balance(
            opening in amount_strategy(),
            trades in amount_strategy(),
            settled in amount_strategy(),
            extra in amount_strategy(),
        ) {
            let before = current_balance(BalanceInputs {
                opening_balance: opening,
                trade_net_sum: trades,
                settled_sum: settled,
            });
            let after = current_balance(BalanceInputs {
                opening_balance: opening,
                trade_net_sum: trades,
                settled_sum: settled + extra,
            });
            prop_assert_eq!(before - after, extra);
        }

        /// Removing a trade's net amount from the sum removes exactly its
        /// contribution from the balance.
        #[test]
        fn prop_trade_removal_removes_contribution(
            opening in amount_strategy(),
            other_trades in amount_strategy(),
            removed_net in amount_strategy(),
            settled in amount_strategy(),
        ) {
            let with_trade = current_balance(BalanceInputs {
                opening_balance: opening,
                trade_net_sum: other_trades + removed_net,
                settled_sum: settled,
            });
            let without_trade = current_balance(BalanceInputs {
                opening_balance: opening,
                trade_net_sum: other_trades,
                settled_sum: settled,
            });
            prop_assert_eq!(with_trade - without_trade, removed_net);
        }
    }
}
