//! Core game types: sides, moves, state, configuration, errors.
//!
//! This module contains the game-state machine. It knows nothing about
//! engines or presentation.

pub mod player;
pub mod action;
pub mod error;
pub mod config;
pub mod state;

pub use player::Side;
pub use action::{Move, MoveRecord};
pub use error::{ConfigError, MoveError};
pub use config::{EngineKind, GameConfig, GameMode};
pub use state::{GameState, MAX_PILE};
