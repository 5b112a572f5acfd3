//! Player identification.
//!
//! ## Side
//!
//! The game is strictly two-player. `Side::A` always moves first after a
//! start or restart; `Side::B` moves second. Which side (if any) is played
//! by the computer is configured separately via `GameMode`.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First player to move.
    A,
    /// Second player to move.
    B,
}

impl Side {
    /// Get the opposing side.
    ///
    /// ```
    /// use coin_strip::core::Side;
    ///
    /// assert_eq!(Side::A.other(), Side::B);
    /// assert_eq!(Side::B.other(), Side::A);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Player A"),
            Side::B => write!(f, "Player B"),
        }
    }
}
