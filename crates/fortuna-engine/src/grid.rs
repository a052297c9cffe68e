//! Grid sampling from the weighted symbol pool.

use std::fmt;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::error::ConfigError;
use crate::symbols::{Symbol, SymbolTable};

/// One spin outcome: columns of symbols, row 0 at the top.
///
/// Created fresh per spin and handed to the round result; nothing in the
/// engine mutates a grid after sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Build from column vectors. Callers keep every column the same height.
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> Self {
        Self { columns }
    }

    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Symbol at (column, row), if in range.
    pub fn symbol_at(&self, col: usize, row: usize) -> Option<Symbol> {
        self.columns.get(col)?.get(row).copied()
    }

    /// Symbols across one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.columns
            .iter()
            .filter_map(move |column| column.get(row).copied())
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }
}

impl fmt::Display for Grid {
    /// Row-per-line rendering: `A | B | C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for (col, symbol) in self.row(row).enumerate() {
                if col > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Source of spin grids.
///
/// The engine takes this as a seam so tests can pin outcomes; production
/// play uses [`PoolGridGenerator`].
pub trait GridGenerator {
    /// Produce one grid of `spec.rows` symbols per column.
    fn generate(&mut self, spec: GridSpec, table: &SymbolTable) -> Result<Grid, ConfigError>;
}

/// Samples each column independently from a fresh copy of the weighted pool,
/// without replacement within the column.
///
/// Columns never share depletion state, so a symbol can appear in every
/// column but never more than its pool count of times in any one column.
#[derive(Debug)]
pub struct PoolGridGenerator<R: Rng = StdRng> {
    rng: R,
}

impl PoolGridGenerator<StdRng> {
    /// Entropy-seeded generator for production play.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PoolGridGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PoolGridGenerator<R> {
    /// Wrap an arbitrary random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GridGenerator for PoolGridGenerator<R> {
    fn generate(&mut self, spec: GridSpec, table: &SymbolTable) -> Result<Grid, ConfigError> {
        let pool = table.build_pool();
        let rows = spec.rows as usize;
        if rows > pool.len() {
            return Err(ConfigError::PoolExhausted {
                rows,
                pool: pool.len(),
            });
        }

        let mut columns = Vec::with_capacity(spec.cols as usize);
        for _ in 0..spec.cols {
            let mut remaining = pool.clone();
            let mut column = Vec::with_capacity(rows);
            for _ in 0..rows {
                let slot = self.rng.random_range(0..remaining.len());
                column.push(remaining.swap_remove(slot));
            }
            columns.push(column);
        }
        Ok(Grid::from_columns(columns))
    }
}
