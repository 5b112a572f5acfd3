//! Error types for state transitions and configuration parsing.

use thiserror::Error;

/// Errors raised by `GameState::apply_move`.
///
/// These signal a broken caller contract. The controller filters requests
/// with `GameState::is_legal` first, so none of these reach a presentation
/// layer during normal play.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: cannot take {amount} coin(s) from a pile of {pile}")]
    Illegal { amount: u32, pile: u32 },
}

/// Errors parsing configuration values from text (CLI flags, console commands).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown game mode '{0}' (expected pvp, pvai or aivp)")]
    UnknownMode(String),
    #[error("unknown engine '{0}' (expected heuristic or search)")]
    UnknownEngine(String),
    #[error("unrecognized command '{0}' (type 'h' for help)")]
    UnknownCommand(String),
}
