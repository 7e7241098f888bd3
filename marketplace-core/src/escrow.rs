//! Escrow ledger primitive
//!
//! A mutable, non-negative balance that accepts deposits and permits
//! withdrawal only up to the current balance.
//!
//! # Invariants
//!
//! - Balance never goes negative: withdrawals exceeding the balance are
//!   refused without mutation
//! - Conservation: balance == Σ(deposits) − Σ(withdrawals) at all times

use crate::funds::Funds;
use serde::{Deserialize, Serialize};

/// Non-negative escrow balance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EscrowLedger {
    balance: u64,
}

impl EscrowLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self { balance: 0 }
    }

    /// Current balance
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Credit the ledger, consuming the debited funds
    pub fn deposit(&mut self, funds: Funds) {
        self.balance = self.balance.saturating_add(funds.into_amount());
    }

    /// Debit `amount` from the ledger
    ///
    /// Returns `None` when `amount` is zero or exceeds the balance; the
    /// balance is untouched in that case. A withdrawal of exactly the full
    /// balance succeeds and leaves the balance at 0.
    pub fn withdraw(&mut self, amount: u64) -> Option<Funds> {
        if amount == 0 || amount > self.balance {
            return None;
        }
        self.balance -= amount;
        Some(Funds::from_amount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::Payment;

    fn funds(amount: u64) -> Funds {
        Payment::new(amount).split_exact(amount).unwrap()
    }

    #[test]
    fn test_deposit_and_balance() {
        let mut ledger = EscrowLedger::new();
        assert_eq!(ledger.balance(), 0);

        ledger.deposit(funds(100));
        ledger.deposit(funds(50));
        assert_eq!(ledger.balance(), 150);
    }

    #[test]
    fn test_withdraw_bounded_by_balance() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(funds(100));

        assert!(ledger.withdraw(101).is_none());
        assert_eq!(ledger.balance(), 100); // Untouched on refusal

        let out = ledger.withdraw(60).unwrap();
        assert_eq!(out.amount(), 60);
        assert_eq!(ledger.balance(), 40);
    }

    #[test]
    fn test_withdraw_zero_refused() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(funds(100));
        assert!(ledger.withdraw(0).is_none());
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut ledger = EscrowLedger::new();
        ledger.deposit(funds(100));

        let out = ledger.withdraw(100).unwrap();
        assert_eq!(out.amount(), 100);
        assert_eq!(ledger.balance(), 0);

        // Nothing left to withdraw
        assert!(ledger.withdraw(1).is_none());
    }
}
