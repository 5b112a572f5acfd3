//! Move representation: how many coins to take.
//!
//! A `Move` is always 1 or 2. Whether it is *legal* also depends on the
//! pile it is applied to (a move may not take more coins than remain),
//! which is checked by `GameState::is_legal`.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A number of coins to remove: 1 or 2.
///
/// ## Example
///
/// ```
/// use coin_strip::core::Move;
///
/// let take_two = Move::new(2).unwrap();
/// assert_eq!(take_two.amount(), 2);
///
/// assert!(Move::new(0).is_none());
/// assert!(Move::new(3).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Move(u8);

impl Move {
    /// Take one coin.
    pub const ONE: Move = Move(1);

    /// Take two coins.
    pub const TWO: Move = Move(2);

    /// Create a move, returning `None` if `amount` is not 1 or 2.
    #[must_use]
    pub const fn new(amount: u32) -> Option<Self> {
        match amount {
            1 => Some(Move::ONE),
            2 => Some(Move::TWO),
            _ => None,
        }
    }

    /// Number of coins this move removes.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0 as u32
    }

    /// Check whether this move fits in a pile of `pile` coins.
    #[must_use]
    pub const fn fits(self, pile: u32) -> bool {
        self.amount() <= pile
    }
}

impl TryFrom<u32> for Move {
    type Error = String;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        Move::new(amount).ok_or_else(|| format!("move must take 1 or 2 coins, got {}", amount))
    }
}

impl From<Move> for u32 {
    fn from(mv: Move) -> u32 {
        mv.amount()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {}", self.0)
    }
}

/// A recorded move with metadata for history tracking.
///
/// Used for replay/debugging and for checking turn order in tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move taken.
    pub mv: Move,

    /// Coins remaining after the move.
    pub pile_after: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, mv: Move, pile_after: u32) -> Self {
        Self { side, mv, pile_after }
    }
}
