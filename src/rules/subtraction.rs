//! Subtraction rules for the {1, 2} game.
//!
//! - Which moves are legal from a pile
//! - Win/loss classification of a position

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::Move;

/// Every move size the game allows, in increasing order.
pub const SUBTRACTION_SET: [Move; 2] = [Move::ONE, Move::TWO];

/// Legal moves from a pile of `pile` coins, smallest first.
///
/// ```
/// use coin_strip::core::Move;
/// use coin_strip::rules::legal_moves;
///
/// assert!(legal_moves(0).is_empty());
/// assert_eq!(legal_moves(1).as_slice(), &[Move::ONE]);
/// assert_eq!(legal_moves(5).as_slice(), &[Move::ONE, Move::TWO]);
/// ```
#[must_use]
pub fn legal_moves(pile: u32) -> SmallVec<[Move; 2]> {
    SUBTRACTION_SET
        .iter()
        .copied()
        .filter(|mv| mv.fits(pile))
        .collect()
}

/// Classification of a position from the point of view of the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Some move leaves the opponent in a losing position.
    Win,
    /// Every move leaves the opponent in a winning position
    /// (or no move exists: the previous player took the last coin).
    Loss,
}
