//! Rules of the coin strip game.
//!
//! Players alternately remove 1 or 2 coins; whoever takes the last coin
//! wins. This module defines:
//! - The subtraction set and legal moves for a pile
//! - Win/loss classification of positions
//!
//! The state machine in `core` and both engines in `engines` build on
//! these definitions.

pub mod subtraction;

pub use subtraction::{legal_moves, Outcome, SUBTRACTION_SET};
