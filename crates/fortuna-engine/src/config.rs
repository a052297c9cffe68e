//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::symbols::SymbolTable;

/// Grid dimensions (columns × rows per column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns (reels).
    pub cols: u8,
    /// Number of visible rows per column.
    pub rows: u8,
}

impl GridSpec {
    /// The classic 3-column, 5-row layout.
    pub fn standard_3x5() -> Self {
        Self { cols: 3, rows: 5 }
    }

    /// Total grid positions.
    pub fn total_positions(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::standard_3x5()
    }
}

/// Full engine configuration: grid shape, bet limits, symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid shape.
    pub grid: GridSpec,
    /// Highest selectable payline (1-based).
    pub max_lines: u8,
    /// Lowest stake per payline, in whole credits.
    pub min_bet: u64,
    /// Highest stake per payline, in whole credits.
    pub max_bet: u64,
    /// Symbol pool weights and payouts.
    pub table: SymbolTable,
}

impl GameConfig {
    /// Standard configuration: 3×5 grid, 5 paylines, stakes 1..=100.
    pub fn standard() -> Self {
        Self {
            grid: GridSpec::standard_3x5(),
            max_lines: 5,
            min_bet: 1,
            max_bet: 100,
            table: SymbolTable::standard(),
        }
    }

    /// Check the cross-field invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()?;
        let rows = self.grid.rows as usize;
        let pool = self.table.pool_size();
        if rows > pool {
            return Err(ConfigError::PoolExhausted { rows, pool });
        }
        if self.max_lines > self.grid.rows {
            return Err(ConfigError::LinesExceedRows {
                max_lines: self.max_lines,
                rows: self.grid.rows,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Symbol, SymbolEntry};
    use std::collections::BTreeMap;

    fn tiny_table(count: u32) -> SymbolTable {
        let entries: BTreeMap<_, _> = Symbol::ALL
            .into_iter()
            .map(|symbol| {
                (
                    symbol,
                    SymbolEntry {
                        pool_count: count,
                        payout_tenths: 20,
                    },
                )
            })
            .collect();
        SymbolTable::new(entries)
    }

    #[test]
    fn test_standard_constants() {
        let config = GameConfig::standard();
        assert_eq!(config.grid.cols, 3);
        assert_eq!(config.grid.rows, 5);
        assert_eq!(config.grid.total_positions(), 15);
        assert_eq!(config.max_lines, 5);
        assert_eq!(config.min_bet, 1);
        assert_eq!(config.max_bet, 100);
        config.validate().unwrap();
    }

    #[test]
    fn test_pool_must_cover_rows() {
        let config = GameConfig {
            table: tiny_table(0),
            ..GameConfig::standard()
        };
        assert!(config.validate().is_err());

        // 5 symbols × 1 copy = pool of 5, exactly enough for 5 rows
        let config = GameConfig {
            table: tiny_table(1),
            ..GameConfig::standard()
        };
        config.validate().unwrap();

        let config = GameConfig {
            grid: GridSpec { cols: 3, rows: 6 },
            max_lines: 5,
            table: tiny_table(1),
            ..GameConfig::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PoolExhausted { rows: 6, pool: 5 })
        );
    }

    #[test]
    fn test_lines_must_fit_rows() {
        let config = GameConfig {
            max_lines: 6,
            ..GameConfig::standard()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LinesExceedRows {
                max_lines: 6,
                rows: 5
            })
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "grid": { "cols": 3, "rows": 5 },
            "max_lines": 5,
            "min_bet": 1,
            "max_bet": 100,
            "table": {
                "entries": {
                    "A": { "pool_count": 3, "payout_tenths": 50 },
                    "B": { "pool_count": 4, "payout_tenths": 45 },
                    "C": { "pool_count": 6, "payout_tenths": 30 },
                    "D": { "pool_count": 8, "payout_tenths": 25 },
                    "E": { "pool_count": 12, "payout_tenths": 20 }
                }
            }
        }"#;

        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, GameConfig::standard());
    }

    #[test]
    fn test_json_missing_symbol_fails_validation() {
        let json = r#"{
            "grid": { "cols": 3, "rows": 5 },
            "max_lines": 5,
            "min_bet": 1,
            "max_bet": 100,
            "table": {
                "entries": {
                    "A": { "pool_count": 30, "payout_tenths": 50 }
                }
            }
        }"#;

        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownSymbol { symbol: Symbol::B })
        );
    }
}
