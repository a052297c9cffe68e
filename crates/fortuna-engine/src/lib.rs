//! # fortuna-engine: payline slot game engine
//!
//! A synchronous slot-machine core: deposit/balance bookkeeping, bet
//! validation, weighted-random grid sampling, and payline payout evaluation.
//! The engine is a pure state machine driven by explicit calls from a
//! presentation layer; it performs no I/O and owns no event loop.
//!
//! ## Architecture
//!
//! ```text
//! GameEngine
//!     │
//!     ├── GameConfig (grid shape, bet limits, symbol table)
//!     ├── SessionAccount (balance: deposit / reserve / credit)
//!     ├── GridGenerator (weighted pool sampling, injectable)
//!     └── payline evaluation (unanimous-row scoring)
//!           │
//!           v
//!     RoundResult → presentation layer
//! ```
//!
//! One engine instance serves one session; concurrent sessions each own an
//! independent engine. The only external dependency is the random source,
//! which is seedable for reproducible play.

pub mod account;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod symbols;

pub use account::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use paytable::*;
pub use symbols::*;
