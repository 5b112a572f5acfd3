//! Game state: the pile and turn ownership.
//!
//! ## GameState
//!
//! - Coins remaining on the strip
//! - Whose turn it is next
//! - Who made the most recent move
//! - Move history
//!
//! The only transition is `apply_move`. A terminal move (one that empties
//! the pile) records the mover but leaves `current_player` untouched, so
//! after the game ends `current_player` still names the side that took
//! the last coin.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::action::{Move, MoveRecord};
use super::error::MoveError;
use super::player::Side;
use crate::rules;

/// Largest pile a game may start with. Larger requests clamp to this.
///
/// Bounds the per-call memo of the search engine, which grows linearly
/// with the pile.
pub const MAX_PILE: u32 = 1_000_000;

/// Clamp a requested pile size into `0..=MAX_PILE`.
fn clamp_pile(pile: i64) -> u32 {
    pile.clamp(0, i64::from(MAX_PILE)) as u32
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pile: u32,
    current_player: Side,
    last_mover: Option<Side>,
    history: Vec<MoveRecord>,
}

impl GameState {
    /// Create a new game with `pile` coins. Side A moves first.
    ///
    /// Negative piles clamp to 0, producing a game that is already over.
    /// Piles above `MAX_PILE` clamp to `MAX_PILE`.
    ///
    /// ```
    /// use coin_strip::core::{GameState, Side};
    ///
    /// let state = GameState::new(-4);
    /// assert_eq!(state.pile(), 0);
    /// assert!(state.is_over());
    /// assert_eq!(state.winner(), None);
    /// assert_eq!(state.current_player(), Side::A);
    /// ```
    #[must_use]
    pub fn new(pile: i64) -> Self {
        Self {
            pile: clamp_pile(pile),
            current_player: Side::A,
            last_mover: None,
            history: Vec::new(),
        }
    }

    /// Reinitialize in place for a new game.
    pub fn reset(&mut self, pile: i64) {
        self.pile = clamp_pile(pile);
        self.current_player = Side::A;
        self.last_mover = None;
        self.history.clear();
    }

    /// Coins remaining.
    #[must_use]
    pub fn pile(&self) -> u32 {
        self.pile
    }

    /// Side to move next. Frozen once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Side that made the most recent move, if any.
    #[must_use]
    pub fn last_mover(&self) -> Option<Side> {
        self.last_mover
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Check whether taking `amount` coins is legal right now.
    #[must_use]
    pub fn is_legal(&self, amount: u32) -> bool {
        self.legal_moves().iter().any(|mv| mv.amount() == amount)
    }

    /// Legal moves from the current pile, smallest first.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 2]> {
        rules::legal_moves(self.pile)
    }

    /// Take `amount` coins for the current player.
    ///
    /// Fails without touching the state if the move is not legal.
    pub fn apply_move(&mut self, amount: u32) -> Result<(), MoveError> {
        let mv = match Move::new(amount) {
            Some(mv) if self.is_legal(amount) => mv,
            _ => {
                warn!(amount, pile = self.pile, "rejected illegal move");
                return Err(MoveError::Illegal {
                    amount,
                    pile: self.pile,
                });
            }
        };

        let mover = self.current_player;
        self.last_mover = Some(mover);
        self.pile -= mv.amount();
        self.history.push(MoveRecord::new(mover, mv, self.pile));
        debug!(side = %mover, amount, pile = self.pile, "applied move");

        if self.pile == 0 {
            info!(winner = %mover, moves = self.history.len(), "game over");
        } else {
            self.current_player = mover.other();
        }

        Ok(())
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.pile == 0
    }

    /// Side that took the last coin, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if self.is_over() {
            self.last_mover
        } else {
            None
        }
    }
}
