//! Move engine trait.

/// Chooses a move for an automated player.
///
/// Implementations are stateless between calls: the same pile always
/// yields the same move.
pub trait MoveEngine: Send + Sync {
    /// Pick a move for the player facing `pile` coins.
    ///
    /// Returns `None` only when `pile == 0` (no move is possible). Callers
    /// must treat that as "cannot act", never as a move of size 0.
    fn best_move(&self, pile: u32) -> Option<crate::core::Move>;

    /// Short name for logs and display.
    fn name(&self) -> &'static str;
}
