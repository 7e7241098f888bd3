//! Payment instruments and move-only funds
//!
//! A `Payment` is the opaque funds source a caller presents to an operation.
//! Debiting splits off an exact amount as a [`Funds`] value; the remainder
//! stays with the payer. `Funds` has no `Clone` and no serde: once split
//! off, the value can only be consumed exactly once (deposited into an
//! escrow ledger or handed to a recipient).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment instrument presented by a caller
#[derive(Debug, Serialize, Deserialize)]
pub struct Payment {
    /// Remaining value held by the payer
    amount: u64,
}

impl Payment {
    /// Create an instrument worth `amount` units
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }

    /// Value currently held by the payer
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Split off exactly `amount`, leaving the remainder with the payer
    ///
    /// Returns `None` when the instrument is worth less than `amount`;
    /// the instrument is untouched in that case.
    pub fn split_exact(&mut self, amount: u64) -> Option<Funds> {
        if self.amount < amount {
            return None;
        }
        self.amount -= amount;
        Some(Funds { amount })
    }
}

/// Debited funds in flight
///
/// Move-only: consuming the value (via [`crate::EscrowLedger::deposit`] or
/// by delivering it to a recipient) is the only way to dispose of it.
#[derive(Debug, PartialEq, Eq)]
pub struct Funds {
    amount: u64,
}

impl Funds {
    pub(crate) fn from_amount(amount: u64) -> Self {
        Self { amount }
    }

    /// Amount carried by this value
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Consume the value, yielding its amount
    pub fn into_amount(self) -> u64 {
        self.amount
    }
}

impl fmt::Display for Funds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}
