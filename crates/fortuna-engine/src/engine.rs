//! Round lifecycle: deposits, bet validation, spins, settlement.

use serde::{Deserialize, Serialize};

use crate::account::{Credits, SessionAccount};
use crate::config::GameConfig;
use crate::error::{ConfigError, EngineError};
use crate::grid::{Grid, GridGenerator, PoolGridGenerator};
use crate::paytable::{evaluate, Line, LineBet, LineWin};

/// Where the engine is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Fresh session, no funds yet.
    AwaitingDeposit,
    /// Funded and ready for a bet.
    AwaitingBet,
    /// A bet is reserved; the next call must be `spin`.
    Spinning,
    /// A round result was produced and not yet acknowledged.
    RoundComplete,
}

impl EngineState {
    fn name(self) -> &'static str {
        match self {
            EngineState::AwaitingDeposit => "awaiting a deposit",
            EngineState::AwaitingBet => "awaiting a bet",
            EngineState::Spinning => "spinning",
            EngineState::RoundComplete => "reporting a round",
        }
    }
}

/// Everything the presentation layer needs to render one settled round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    /// The exact grid that was scored.
    pub grid: Grid,
    /// Total winnings across all paying lines.
    pub winnings: Credits,
    /// Per-line wins, in selection order.
    pub line_wins: Vec<LineWin>,
    /// Balance after the bet was debited and winnings credited.
    pub new_balance: Credits,
}

impl RoundResult {
    /// Winning line numbers, in selection order.
    pub fn winning_lines(&self) -> Vec<Line> {
        self.line_wins.iter().map(|win| win.line).collect()
    }

    pub fn is_win(&self) -> bool {
        !self.line_wins.is_empty()
    }
}

/// Running per-session statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RoundStats {
    pub rounds: u64,
    pub total_bet: Credits,
    pub total_won: Credits,
    pub wins: u64,
    pub losses: u64,
}

impl RoundStats {
    /// Return-to-player percentage so far.
    pub fn rtp(&self) -> f64 {
        if self.total_bet.is_zero() {
            0.0
        } else {
            self.total_won.tenths() as f64 / self.total_bet.tenths() as f64 * 100.0
        }
    }

    fn record(&mut self, bet: Credits, won: Credits) {
        self.rounds += 1;
        self.total_bet += bet;
        self.total_won += won;
        if won.is_zero() {
            self.losses += 1;
        } else {
            self.wins += 1;
        }
    }
}

/// The game engine: a synchronous state machine driven by the presentation
/// layer.
///
/// One instance per session. A round is `deposit` (once funded the engine
/// loops) → `place_bet` → `spin` → result; every validation failure leaves
/// balance and state untouched, and the bet total is reserved from the
/// balance before the grid is sampled.
#[derive(Debug)]
pub struct GameEngine<G: GridGenerator = PoolGridGenerator> {
    config: GameConfig,
    account: SessionAccount,
    generator: G,
    state: EngineState,
    /// The reserved bet for the round in flight, in selection order.
    pending_bet: Vec<LineBet>,
    stats: RoundStats,
}

impl GameEngine<PoolGridGenerator> {
    /// Engine with an entropy-seeded sampler.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_generator(config, PoolGridGenerator::new())
    }

    /// Deterministic engine for reproducible sessions.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_generator(config, PoolGridGenerator::seeded(seed))
    }
}

impl<G: GridGenerator> GameEngine<G> {
    /// Engine with a caller-supplied grid source.
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            account: SessionAccount::new(),
            generator,
            state: EngineState::AwaitingDeposit,
            pending_bet: Vec::new(),
            stats: RoundStats::default(),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current balance, readable in any state.
    pub fn balance(&self) -> Credits {
        self.account.balance()
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Add funds in whole credits.
    ///
    /// Accepted whenever no spin is in flight; the first successful deposit
    /// moves the engine from `AwaitingDeposit` to `AwaitingBet`.
    pub fn deposit(&mut self, amount: u64) -> Result<Credits, EngineError> {
        if self.state == EngineState::Spinning {
            return Err(EngineError::WrongState {
                operation: "deposit",
                state: self.state.name(),
            });
        }
        let balance = self.account.deposit(amount)?;
        if self.state == EngineState::AwaitingDeposit {
            self.state = EngineState::AwaitingBet;
        }
        log::info!("deposit of {amount} accepted, balance {balance}");
        Ok(balance)
    }

    /// Validate a bet and reserve its total from the balance.
    ///
    /// `lines` and `amounts` correlate by position: the amount at index `i`
    /// stakes the line at index `i`. Checks run in order (selection
    /// non-empty, lines distinct and in range, counts matching, amounts in
    /// range, balance sufficient) and nothing is reserved until all pass.
    pub fn place_bet(&mut self, lines: &[u8], amounts: &[u64]) -> Result<(), EngineError> {
        match self.state {
            EngineState::AwaitingBet | EngineState::RoundComplete => {}
            _ => {
                return Err(EngineError::WrongState {
                    operation: "place_bet",
                    state: self.state.name(),
                })
            }
        }

        let bets = self.validate_bet(lines, amounts)?;
        let total: u64 = amounts.iter().sum();
        self.account.reserve(Credits::from_whole(total))?;

        self.pending_bet = bets;
        self.state = EngineState::Spinning;
        log::debug!("bet of {total} reserved across {} lines", lines.len());
        Ok(())
    }

    fn validate_bet(&self, lines: &[u8], amounts: &[u64]) -> Result<Vec<LineBet>, EngineError> {
        if lines.is_empty() {
            return Err(EngineError::NoLinesSelected);
        }

        let mut selected = Vec::with_capacity(lines.len());
        for &raw in lines {
            let line = Line::new(raw, self.config.max_lines)?;
            if selected.contains(&line) {
                return Err(EngineError::DuplicateLine { line: raw });
            }
            selected.push(line);
        }

        if amounts.len() != lines.len() {
            return Err(EngineError::BetMismatch {
                lines: lines.len(),
                amounts: amounts.len(),
            });
        }
        for &amount in amounts {
            if amount < self.config.min_bet || amount > self.config.max_bet {
                return Err(EngineError::BetOutOfRange {
                    amount,
                    min: self.config.min_bet,
                    max: self.config.max_bet,
                });
            }
        }

        Ok(selected
            .into_iter()
            .zip(amounts)
            .map(|(line, &amount)| LineBet { line, amount })
            .collect())
    }

    /// Resolve the reserved bet: sample a grid, score it, settle the account.
    pub fn spin(&mut self) -> Result<RoundResult, EngineError> {
        if self.state != EngineState::Spinning {
            return Err(EngineError::WrongState {
                operation: "spin",
                state: self.state.name(),
            });
        }

        let grid = self
            .generator
            .generate(self.config.grid, &self.config.table)?;
        let eval = evaluate(&grid, &self.pending_bet, &self.config.table)?;

        self.account.credit(eval.total_win);
        let total_bet: u64 = self.pending_bet.iter().map(|bet| bet.amount).sum();
        self.stats
            .record(Credits::from_whole(total_bet), eval.total_win);

        let result = RoundResult {
            grid,
            winnings: eval.total_win,
            line_wins: eval.line_wins,
            new_balance: self.account.balance(),
        };

        self.pending_bet.clear();
        self.state = EngineState::RoundComplete;
        log::info!(
            "round settled: won {} on {} lines, balance {}",
            result.winnings,
            result.line_wins.len(),
            result.new_balance
        );
        Ok(result)
    }

    /// Explicit acknowledgment of the last round result.
    ///
    /// Optional: `place_bet` is accepted directly from `RoundComplete`, so a
    /// presentation layer that never acknowledges still loops fine.
    pub fn acknowledge_round(&mut self) {
        if self.state == EngineState::RoundComplete {
            self.state = EngineState::AwaitingBet;
        }
    }
}
