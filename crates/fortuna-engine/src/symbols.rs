//! Symbol set and the weighted pool it is sampled from.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One of the five reel symbols, highest-paying first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
}

impl Symbol {
    /// All symbols in paytable order.
    pub const ALL: [Symbol; 5] = [Symbol::A, Symbol::B, Symbol::C, Symbol::D, Symbol::E];

    /// Single-letter name shown by the presentation layer.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::E => "E",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pool weight and payout for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    /// How many copies of the symbol the sampling pool holds.
    pub pool_count: u32,
    /// Payout per credit bet, in tenths of a credit.
    pub payout_tenths: u64,
}

/// Mapping from symbol to pool weight and payout multiplier.
///
/// Rarer symbols pay more: the standard table holds 3 copies of `A`
/// (paying 5×) down to 12 copies of `E` (paying 2×).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    entries: BTreeMap<Symbol, SymbolEntry>,
}

impl SymbolTable {
    /// Build a table from explicit entries.
    pub fn new(entries: BTreeMap<Symbol, SymbolEntry>) -> Self {
        Self { entries }
    }

    /// The standard table: counts 3/4/6/8/12, payouts 5/4.5/3/2.5/2.
    pub fn standard() -> Self {
        let entries = [
            (Symbol::A, 3, 50),
            (Symbol::B, 4, 45),
            (Symbol::C, 6, 30),
            (Symbol::D, 8, 25),
            (Symbol::E, 12, 20),
        ]
        .into_iter()
        .map(|(symbol, pool_count, payout_tenths)| {
            (
                symbol,
                SymbolEntry {
                    pool_count,
                    payout_tenths,
                },
            )
        })
        .collect();

        Self { entries }
    }

    fn entry(&self, symbol: Symbol) -> Result<&SymbolEntry, ConfigError> {
        self.entries
            .get(&symbol)
            .ok_or(ConfigError::UnknownSymbol { symbol })
    }

    /// Number of copies of `symbol` in the sampling pool.
    pub fn pool_count(&self, symbol: Symbol) -> Result<u32, ConfigError> {
        Ok(self.entry(symbol)?.pool_count)
    }

    /// Payout per credit bet, in tenths of a credit.
    pub fn payout_tenths(&self, symbol: Symbol) -> Result<u64, ConfigError> {
        Ok(self.entry(symbol)?.payout_tenths)
    }

    /// Total pool size (33 for the standard table).
    pub fn pool_size(&self) -> usize {
        self.entries
            .values()
            .map(|e| e.pool_count as usize)
            .sum()
    }

    /// The full sampling multiset: each symbol repeated `pool_count` times.
    pub fn build_pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for (&symbol, entry) in &self.entries {
            pool.extend(std::iter::repeat_n(symbol, entry.pool_count as usize));
        }
        pool
    }

    /// Check that every symbol has a usable entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for symbol in Symbol::ALL {
            let entry = self.entry(symbol)?;
            if entry.pool_count == 0 {
                return Err(ConfigError::EmptyPool { symbol });
            }
            if entry.payout_tenths == 0 {
                return Err(ConfigError::ZeroPayout { symbol });
            }
        }
        Ok(())
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
