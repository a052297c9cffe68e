//! Session balance bookkeeping.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Money amount in tenths of a credit.
///
/// Payout multipliers in the standard table are half-integral (4.5×, 2.5×),
/// so tenths keep every win exactly representable in integer arithmetic.
/// Deposits and stakes are always whole credits; use [`Credits::from_whole`]
/// to scale them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(u64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    /// From a whole number of credits. Saturates on overflow, like the
    /// arithmetic ops below.
    pub const fn from_whole(credits: u64) -> Self {
        Credits(credits.saturating_mul(10))
    }

    /// From tenths of a credit.
    pub const fn from_tenths(tenths: u64) -> Self {
        Credits(tenths)
    }

    /// Raw amount in tenths of a credit.
    pub const fn tenths(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Credits {
    type Output = Credits;

    fn add(self, rhs: Credits) -> Credits {
        Credits(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Credits {
    fn add_assign(&mut self, rhs: Credits) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Credits {
    type Output = Credits;

    fn sub(self, rhs: Credits) -> Credits {
        Credits(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Credits {
    fn sub_assign(&mut self, rhs: Credits) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// A single player's balance for the lifetime of one session.
///
/// The balance only moves three ways: a deposit adds funds, a reservation
/// debits a bet before the spin resolves, and settlement credits winnings.
/// No path can drive it negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionAccount {
    balance: Credits,
}

impl SessionAccount {
    /// Fresh account with a zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Credits {
        self.balance
    }

    /// Add a deposit of whole credits. Zero is rejected.
    pub fn deposit(&mut self, amount: u64) -> Result<Credits, EngineError> {
        if amount == 0 {
            return Err(EngineError::InvalidDeposit { amount });
        }
        self.balance += Credits::from_whole(amount);
        Ok(self.balance)
    }

    /// Commit a bet before the spin outcome is known.
    ///
    /// Fails without touching the balance when funds are short, so a retry
    /// with a smaller bet is always possible.
    pub fn reserve(&mut self, total: Credits) -> Result<(), EngineError> {
        if total > self.balance {
            return Err(EngineError::InsufficientBalance {
                needed: total,
                available: self.balance,
            });
        }
        self.balance -= total;
        Ok(())
    }

    /// Credit winnings after settlement.
    pub fn credit(&mut self, winnings: Credits) {
        self.balance += winnings;
    }
}
