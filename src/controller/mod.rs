//! Game controller and presentation boundary.
//!
//! ## Overview
//!
//! - `GameController` sequences turns, decides whether the side to move is
//!   human or automated, and applies moves to the `GameState`.
//! - `Presentation` receives a `Snapshot` after every applied move and
//!   every restart.
//! - Automated turns are deferred by the configured delay. While one is
//!   pending the controller is busy and ignores human requests. Restarts
//!   bump a generation counter so a stale callback is a no-op.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use coin_strip::controller::{GameController, SnapshotLog};
//! use coin_strip::core::{GameConfig, Side};
//!
//! let config = GameConfig::default()
//!     .with_starting_pile(4)
//!     .with_ai_delay(Duration::ZERO);
//! let mut controller = GameController::new(config, SnapshotLog::new());
//!
//! // Human (A) takes one, leaving 3: a losing pile for the computer.
//! assert!(controller.request_move(1));
//! assert!(controller.is_busy());
//!
//! // The driver fires the deferred computer turn.
//! controller.flush();
//! assert_eq!(controller.state().pile(), 2);
//! assert_eq!(controller.state().current_player(), Side::A);
//! ```

pub mod game_controller;
pub mod presentation;
pub mod schedule;

pub use game_controller::GameController;
pub use presentation::{Presentation, Snapshot, SnapshotLog};
pub use schedule::PendingTurn;
