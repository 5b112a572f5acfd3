//! Presentation boundary.
//!
//! The controller never draws anything. After every applied move and every
//! (re)start it hands a `Snapshot` to a `Presentation`, which may print it,
//! draw it, or record it.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Everything a front end needs to draw the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Coins remaining.
    pub pile: u32,
    /// Side to move (frozen once the game is over).
    pub current_player: Side,
    /// Whether the pile is empty.
    pub is_over: bool,
    /// Side that took the last coin, once the game is over.
    pub winner: Option<Side>,
    /// Whether `current_player` is human-controlled.
    pub is_human_turn_next: bool,
}

/// Receives state snapshots from the controller.
pub trait Presentation {
    /// Show the given state.
    fn render(&mut self, snapshot: &Snapshot);
}

impl<P: Presentation + ?Sized> Presentation for &mut P {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

/// Presentation that keeps every snapshot it receives.
///
/// Used by headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct SnapshotLog {
    snapshots: Vec<Snapshot>,
}

impl SnapshotLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots received, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Number of snapshots received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if nothing was rendered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Presentation for SnapshotLog {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(*snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pile: u32) -> Snapshot {
        Snapshot {
            pile,
            current_player: Side::A,
            is_over: pile == 0,
            winner: None,
            is_human_turn_next: true,
        }
    }

    #[test]
    fn test_snapshot_log_records_in_order() {
        let mut log = SnapshotLog::new();
        assert!(log.is_empty());

        log.render(&snapshot(5));
        log.render(&snapshot(3));

        assert_eq!(log.len(), 2);
        assert_eq!(log.snapshots()[0].pile, 5);
        assert_eq!(log.last().map(|s| s.pile), Some(3));
    }

    #[test]
    fn test_render_through_mut_ref() {
        fn render_into<P: Presentation>(mut presentation: P, snap: &Snapshot) {
            presentation.render(snap);
        }

        let mut log = SnapshotLog::new();
        render_into(&mut log, &snapshot(1));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snap = Snapshot {
            pile: 0,
            current_player: Side::B,
            is_over: true,
            winner: Some(Side::B),
            is_human_turn_next: false,
        };
        let json = serde_json::to_string(&snap).unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, deserialized);
    }
}
