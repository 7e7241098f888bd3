//! Property-based tests for funds conservation

use marketplace_core::{EscrowLedger, Payment};
use proptest::prelude::*;

proptest! {
    /// Property: splitting an instrument either takes exactly the requested
    /// amount or nothing at all.
    #[test]
    fn split_exact_conserves_value(
        worth in 0u64..1_000_000,
        request in 0u64..1_000_000,
    ) {
        let mut payment = Payment::new(worth);

        match payment.split_exact(request) {
            Some(funds) => {
                prop_assert_eq!(funds.amount(), request);
                prop_assert_eq!(payment.amount(), worth - request);
            }
            None => {
                prop_assert!(request > worth);
                prop_assert_eq!(payment.amount(), worth);
            }
        }
    }

    /// Property: an escrow ledger never goes negative and always equals
    /// deposits minus successful withdrawals.
    #[test]
    fn escrow_balance_equals_deposits_minus_withdrawals(
        steps in proptest::collection::vec((0u64..1000, any::<bool>()), 1..50),
    ) {
        let mut ledger = EscrowLedger::new();
        let mut deposited = 0u64;
        let mut withdrawn = 0u64;

        for (amount, is_deposit) in steps {
            if is_deposit {
                let mut payment = Payment::new(amount);
                if let Some(funds) = payment.split_exact(amount) {
                    ledger.deposit(funds);
                    deposited += amount;
                }
            } else if let Some(funds) = ledger.withdraw(amount) {
                prop_assert_eq!(funds.amount(), amount);
                withdrawn += amount;
            }

            prop_assert_eq!(ledger.balance(), deposited - withdrawn);
        }
    }
}
