//! Move engines for the automated opponent.
//!
//! ## Overview
//!
//! Both engines implement `MoveEngine` and always agree on the outcome of
//! the position they leave behind:
//!
//! - **`HeuristicEngine`**: O(1). Uses the fact that the losing piles for
//!   subtraction set {1, 2} are exactly the multiples of 3.
//! - **`SearchEngine`**: O(pile). Memoized win/loss search over every
//!   reachable pile. Does not rely on the closed form.
//!
//! ## Usage
//!
//! ```rust
//! use coin_strip::core::{EngineKind, Move};
//!
//! let engine = EngineKind::Search.build();
//! assert_eq!(engine.best_move(7), Some(Move::ONE)); // leaves 6
//! assert_eq!(engine.best_move(0), None);
//! ```

pub mod heuristic;
pub mod search;
pub mod stats;
pub mod traits;

pub use heuristic::{classify, HeuristicEngine, GRUNDY_PERIOD};
pub use search::{evaluate, SearchEngine};
pub use stats::SearchStats;
pub use traits::MoveEngine;

use crate::core::EngineKind;

impl EngineKind {
    /// Construct the engine this kind names.
    #[must_use]
    pub fn build(self) -> Box<dyn MoveEngine> {
        match self {
            EngineKind::Heuristic => Box::new(HeuristicEngine::new()),
            EngineKind::Search => Box::new(SearchEngine::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_engine_kinds() {
        assert_eq!(EngineKind::Heuristic.build().name(), "heuristic");
        assert_eq!(EngineKind::Search.build().name(), "search");
    }

    #[test]
    fn test_engines_agree_on_small_piles() {
        let heuristic = EngineKind::Heuristic.build();
        let search = EngineKind::Search.build();

        for pile in 0..100u32 {
            assert_eq!(heuristic.best_move(pile), search.best_move(pile), "pile {}", pile);
            assert_eq!(classify(pile), evaluate(pile), "pile {}", pile);
        }
    }
}
