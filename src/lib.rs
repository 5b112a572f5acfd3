//! # coin-strip
//!
//! A two-player subtraction game: players alternately remove 1 or 2 coins
//! from a shared pile, and whoever takes the last coin wins.
//!
//! ## Design Principles
//!
//! 1. **One transition**: `GameState::apply_move` is the only way state
//!    changes. The terminal move never toggles the side to move.
//!
//! 2. **Engines behind a trait**: the computer's move comes from any
//!    `MoveEngine`. Two are provided and always agree.
//!
//! 3. **No drawing in the core**: the controller reports `Snapshot`s to a
//!    `Presentation` and takes requests from it.
//!
//! ## Modules
//!
//! - `core`: Sides, moves, state, configuration, errors
//! - `rules`: Subtraction set, legal moves, position outcomes
//! - `engines`: Heuristic (Grundy) and exhaustive search engines
//! - `controller`: Turn sequencing, deferred automated turns, presentation

pub mod core;
pub mod rules;
pub mod engines;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineKind, GameConfig, GameMode, GameState, Move, MoveError, MoveRecord, Side,
    MAX_PILE,
};

pub use crate::rules::{legal_moves, Outcome, SUBTRACTION_SET};

pub use crate::engines::{evaluate, HeuristicEngine, MoveEngine, SearchEngine, SearchStats};

pub use crate::controller::{GameController, PendingTurn, Presentation, Snapshot, SnapshotLog};
