//! Closed-form engine based on Grundy values.
//!
//! Under the {1, 2} subtraction rule the losing positions for the player
//! to move are exactly the multiples of 3. From any other pile one move
//! reaches a multiple of 3, so the engine never needs to search.

use tracing::{debug, instrument};

use crate::core::Move;
use crate::rules::{legal_moves, Outcome};

use super::traits::MoveEngine;

/// Period of the Grundy sequence for subtraction set {1, 2}.
pub const GRUNDY_PERIOD: u32 = 3;

/// Classify a pile by the closed-form rule.
#[must_use]
pub fn classify(pile: u32) -> Outcome {
    if pile % GRUNDY_PERIOD == 0 {
        Outcome::Loss
    } else {
        Outcome::Win
    }
}

/// O(1) engine: leave the opponent a multiple of 3 when possible.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicEngine;

impl HeuristicEngine {
    /// Create a new heuristic engine.
    pub fn new() -> Self {
        Self
    }
}

impl MoveEngine for HeuristicEngine {
    #[instrument(level = "debug", skip(self))]
    fn best_move(&self, pile: u32) -> Option<Move> {
        if pile == 0 {
            return None;
        }

        let mv = legal_moves(pile)
            .into_iter()
            .find(|mv| classify(pile - mv.amount()) == Outcome::Loss)
            // Already at a multiple of 3: every move loses, take one.
            .unwrap_or(Move::ONE);

        debug!(%mv, "heuristic move");
        Some(mv)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
