//! Engine error types

use thiserror::Error;

use crate::account::Credits;
use crate::symbols::Symbol;

/// Recoverable errors reported back to the presentation layer.
///
/// Every variant leaves engine state and balance exactly as they were
/// before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Deposit amount failed validation
    #[error("deposit must be greater than zero (got {amount})")]
    InvalidDeposit { amount: u64 },

    /// Bet submitted with no paylines
    #[error("no paylines selected")]
    NoLinesSelected,

    /// Payline number outside the configured range
    #[error("payline {line} is out of range 1..={max}")]
    LineOutOfRange { line: u8, max: u8 },

    /// Same payline selected twice in one bet
    #[error("payline {line} was selected more than once")]
    DuplicateLine { line: u8 },

    /// Selected lines and bet amounts differ in length
    #[error("{lines} paylines selected but {amounts} bet amounts supplied")]
    BetMismatch { lines: usize, amounts: usize },

    /// Per-line stake outside the configured bounds
    #[error("bet of {amount} is outside {min}..={max}")]
    BetOutOfRange { amount: u64, min: u64, max: u64 },

    /// Total stake exceeds the session balance
    #[error("bet of {needed} exceeds balance of {available}")]
    InsufficientBalance { needed: Credits, available: Credits },

    /// Operation invoked in the wrong lifecycle state
    #[error("{operation} is not valid while the engine is {state}")]
    WrongState {
        operation: &'static str,
        state: &'static str,
    },

    /// Broken internal invariant
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Broken configuration invariants.
///
/// Unreachable with the standard table; hitting one of these means a
/// programming defect, not bad player input, and is not recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Symbol has no table entry
    #[error("symbol {symbol} has no table entry")]
    UnknownSymbol { symbol: Symbol },

    /// More rows requested than the pool can supply
    #[error("grid needs {rows} rows per column but the pool holds only {pool} symbols")]
    PoolExhausted { rows: usize, pool: usize },

    /// Symbol configured with a zero pool count
    #[error("symbol {symbol} has an empty pool")]
    EmptyPool { symbol: Symbol },

    /// Symbol configured with a zero payout
    #[error("symbol {symbol} pays nothing")]
    ZeroPayout { symbol: Symbol },

    /// More paylines than grid rows
    #[error("{max_lines} paylines cannot fit a grid of {rows} rows")]
    LinesExceedRows { max_lines: u8, rows: u8 },
}
