//! Exhaustive memoized win/loss search.
//!
//! A position with `n` coins is a win for the player to move if some legal
//! move leads to a loss for the opponent; the empty pile is a loss (the
//! previous player took the last coin). Every sub-pile is resolved once,
//! so a call is O(pile) in time and space.
//!
//! The memo table is owned by a single call and dropped when it returns.
//! A pile's children are always `n - 1` and `n - 2`, so the table is filled
//! bottom-up from 0 and every lookup hits an entry that already exists.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::Move;
use crate::rules::{legal_moves, Outcome};

use super::stats::SearchStats;
use super::traits::MoveEngine;

/// Per-call memo table over piles `0..=limit`.
struct Evaluator {
    memo: Vec<Outcome>,
    stats: SearchStats,
}

impl Evaluator {
    /// Resolve every pile from 0 up to `limit`.
    fn solve(limit: u32) -> Self {
        let mut memo: Vec<Outcome> = Vec::with_capacity(limit as usize + 1);

        for n in 0..=limit {
            let wins = legal_moves(n)
                .into_iter()
                .any(|mv| memo[(n - mv.amount()) as usize] == Outcome::Loss);
            memo.push(if wins { Outcome::Win } else { Outcome::Loss });
        }

        let stats = SearchStats {
            positions_evaluated: memo.len() as u32,
            ..SearchStats::default()
        };
        Self { memo, stats }
    }

    /// Look up a resolved pile, `n <= limit`.
    fn outcome(&mut self, n: u32) -> Outcome {
        self.stats.memo_hits += 1;
        self.memo[n as usize]
    }
}

/// Classify a pile by exhaustive search.
///
/// ```
/// use coin_strip::engines::evaluate;
/// use coin_strip::rules::Outcome;
///
/// assert_eq!(evaluate(0), Outcome::Loss);
/// assert_eq!(evaluate(4), Outcome::Win);
/// assert_eq!(evaluate(9), Outcome::Loss);
/// ```
#[must_use]
pub fn evaluate(pile: u32) -> Outcome {
    Evaluator::solve(pile).outcome(pile)
}

/// Engine that searches every reachable pile.
///
/// Memory grows linearly with the pile; game states never exceed
/// `core::MAX_PILE`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchEngine;

impl SearchEngine {
    /// Create a new search engine.
    pub fn new() -> Self {
        Self
    }

    /// Pick a move and report statistics for the search.
    ///
    /// Chooses the smallest legal move that leaves the opponent in a losing
    /// position, or one coin if every move loses.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, pile: u32) -> (Option<Move>, SearchStats) {
        if pile == 0 {
            return (None, SearchStats::default());
        }

        let start = Instant::now();
        // The root itself is never looked up, only its children.
        let mut evaluator = Evaluator::solve(pile - 1);

        let mut choice = Move::ONE;
        for mv in legal_moves(pile) {
            if evaluator.outcome(pile - mv.amount()) == Outcome::Loss {
                choice = mv;
                break;
            }
        }

        let mut stats = evaluator.stats;
        stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            mv = %choice,
            positions = stats.positions_evaluated,
            memo_hits = stats.memo_hits,
            "search move"
        );
        (Some(choice), stats)
    }
}

impl MoveEngine for SearchEngine {
    fn best_move(&self, pile: u32) -> Option<Move> {
        self.search(pile).0
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
