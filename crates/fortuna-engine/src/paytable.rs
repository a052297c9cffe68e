//! Payline evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::Credits;
use crate::error::{ConfigError, EngineError};
use crate::grid::Grid;
use crate::symbols::{Symbol, SymbolTable};

/// A 1-based horizontal payline.
///
/// Line `L` reads the symbol at row `L − 1` across every column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Line(u8);

impl Line {
    /// Validate a raw line number against the configured maximum.
    pub fn new(line: u8, max_lines: u8) -> Result<Self, EngineError> {
        if line == 0 || line > max_lines {
            return Err(EngineError::LineOutOfRange {
                line,
                max: max_lines,
            });
        }
        Ok(Line(line))
    }

    /// The 1-based line number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The grid row this line reads.
    pub fn row_index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selected payline with its stake.
///
/// Stakes pair with lines by selection position, never by line number, so a
/// selection of `[3, 1]` with amounts `[5, 7]` stakes 5 on line 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBet {
    pub line: Line,
    /// Stake in whole credits.
    pub amount: u64,
}

/// A win on a single payline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    pub line: Line,
    /// The symbol shown by every column at this line's row.
    pub symbol: Symbol,
    /// Stake × symbol payout.
    pub amount: Credits,
}

/// Outcome of scoring one grid against the selected paylines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of all line wins.
    pub total_win: Credits,
    /// Winning lines in selection order.
    pub line_wins: Vec<LineWin>,
}

impl Evaluation {
    /// Winning line numbers, in selection order.
    pub fn winning_lines(&self) -> Vec<Line> {
        self.line_wins.iter().map(|win| win.line).collect()
    }

    pub fn is_win(&self) -> bool {
        !self.line_wins.is_empty()
    }
}

/// Score `grid` against the selected bets.
///
/// A line pays only when every column shows the identical symbol at its row;
/// two out of three matching pays nothing. The win for a paying line is its
/// stake times the symbol's table payout, accumulated exactly in tenths.
pub fn evaluate(
    grid: &Grid,
    bets: &[LineBet],
    table: &SymbolTable,
) -> Result<Evaluation, ConfigError> {
    let mut evaluation = Evaluation::default();

    for bet in bets {
        let mut row = grid.row(bet.line.row_index());
        let Some(first) = row.next() else {
            continue;
        };
        if row.all(|symbol| symbol == first) {
            let win = Credits::from_tenths(bet.amount * table.payout_tenths(first)?);
            evaluation.total_win += win;
            evaluation.line_wins.push(LineWin {
                line: bet.line,
                symbol: first,
                amount: win,
            });
        }
    }

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: u8) -> Line {
        Line::new(n, 5).unwrap()
    }

    /// 3 columns × 5 rows; row 0 unanimous A, row 1 mixed, row 2 unanimous E.
    fn fixture_grid() -> Grid {
        Grid::from_columns(vec![
            vec![Symbol::A, Symbol::B, Symbol::E, Symbol::C, Symbol::D],
            vec![Symbol::A, Symbol::C, Symbol::E, Symbol::D, Symbol::D],
            vec![Symbol::A, Symbol::B, Symbol::E, Symbol::E, Symbol::C],
        ])
    }

    #[test]
    fn test_unanimous_row_pays_exactly() {
        let bets = [LineBet {
            line: line(1),
            amount: 10,
        }];
        let eval = evaluate(&fixture_grid(), &bets, &SymbolTable::standard()).unwrap();

        // 10 × 5.0 on symbol A
        assert_eq!(eval.total_win, Credits::from_whole(50));
        assert_eq!(eval.line_wins.len(), 1);
        assert_eq!(eval.line_wins[0].symbol, Symbol::A);
        assert_eq!(eval.winning_lines(), vec![line(1)]);
    }

    #[test]
    fn test_mixed_row_pays_nothing() {
        let bets = [LineBet {
            line: line(2),
            amount: 10,
        }];
        let eval = evaluate(&fixture_grid(), &bets, &SymbolTable::standard()).unwrap();

        assert!(!eval.is_win());
        assert_eq!(eval.total_win, Credits::ZERO);
        assert!(eval.winning_lines().is_empty());
    }

    #[test]
    fn test_partial_match_never_pays() {
        // Row 3 is C, D, E; row 4 is D, D, C (two of three)
        let bets = [
            LineBet {
                line: line(4),
                amount: 20,
            },
            LineBet {
                line: line(5),
                amount: 20,
            },
        ];
        let eval = evaluate(&fixture_grid(), &bets, &SymbolTable::standard()).unwrap();
        assert_eq!(eval.total_win, Credits::ZERO);
    }

    #[test]
    fn test_stakes_follow_selection_order() {
        // Line 3 selected first with stake 4, line 1 second with stake 10.
        let bets = [
            LineBet {
                line: line(3),
                amount: 4,
            },
            LineBet {
                line: line(1),
                amount: 10,
            },
        ];
        let eval = evaluate(&fixture_grid(), &bets, &SymbolTable::standard()).unwrap();

        // Line 3 is unanimous E (4 × 2.0 = 8), line 1 unanimous A (10 × 5.0 = 50)
        assert_eq!(eval.line_wins.len(), 2);
        assert_eq!(eval.line_wins[0].line, line(3));
        assert_eq!(eval.line_wins[0].amount, Credits::from_whole(8));
        assert_eq!(eval.line_wins[1].line, line(1));
        assert_eq!(eval.line_wins[1].amount, Credits::from_whole(50));
        assert_eq!(eval.total_win, Credits::from_whole(58));
        assert_eq!(eval.winning_lines(), vec![line(3), line(1)]);
    }

    #[test]
    fn test_half_credit_win_is_exact() {
        // 3 credits on unanimous E at 2.0 stays whole; use B at 4.5 instead.
        let grid = Grid::from_columns(vec![
            vec![Symbol::B],
            vec![Symbol::B],
            vec![Symbol::B],
        ]);
        let bets = [LineBet {
            line: line(1),
            amount: 3,
        }];
        let eval = evaluate(&grid, &bets, &SymbolTable::standard()).unwrap();

        // 3 × 4.5 = 13.5
        assert_eq!(eval.total_win, Credits::from_tenths(135));
        assert_eq!(eval.total_win.to_string(), "13.5");
    }

    #[test]
    fn test_line_bounds() {
        assert!(Line::new(1, 5).is_ok());
        assert!(Line::new(5, 5).is_ok());
        assert_eq!(
            Line::new(0, 5).unwrap_err(),
            EngineError::LineOutOfRange { line: 0, max: 5 }
        );
        assert_eq!(
            Line::new(6, 5).unwrap_err(),
            EngineError::LineOutOfRange { line: 6, max: 5 }
        );
    }
}
