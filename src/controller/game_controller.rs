//! Turn sequencing between humans, engines and the presentation layer.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::core::{EngineKind, GameConfig, GameMode, GameState, Move};
use crate::engines::MoveEngine;

use super::presentation::{Presentation, Snapshot};
use super::schedule::PendingTurn;

/// Orchestrates a game: applies human requests, schedules and plays the
/// computer's turns, and reports every change to a `Presentation`.
///
/// Requests that cannot be honoured (game over, not a human turn, an
/// automated turn pending, illegal amount) are ignored without error.
pub struct GameController<P: Presentation> {
    /// Current configuration.
    config: GameConfig,

    /// The game being played.
    state: GameState,

    /// Engine for the computer side. Unused in human-vs-human games.
    engine: Box<dyn MoveEngine>,

    /// Incremented on every (re)start.
    generation: u64,

    /// Automated turn waiting to be played.
    pending: Option<PendingTurn>,

    /// Where snapshots go.
    presentation: P,
}

impl<P: Presentation> GameController<P> {
    /// Create a controller and start the first game.
    ///
    /// The engine is built from `config.engine`.
    pub fn new(config: GameConfig, presentation: P) -> Self {
        let engine = config.engine.build();
        Self::with_engine(config, engine, presentation)
    }

    /// Create a controller that plays the computer side with `engine`
    /// instead of the one named by `config.engine`.
    ///
    /// The engine is kept across restarts and mode changes, and replaced
    /// by `request_engine_change` or `reconfigure`.
    pub fn with_engine(config: GameConfig, engine: Box<dyn MoveEngine>, presentation: P) -> Self {
        let mut controller = Self {
            state: GameState::new(config.starting_pile),
            config,
            engine,
            generation: 0,
            pending: None,
            presentation,
        };
        controller.start_game();
        controller
    }

    // === Accessors ===

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generation of the current game.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Automated turn waiting to be played, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingTurn> {
        self.pending.as_ref()
    }

    /// Check if an automated turn is pending. Human requests are ignored
    /// while busy.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Name of the active engine, if the computer plays.
    #[must_use]
    pub fn engine_name(&self) -> Option<&'static str> {
        self.config.mode.computer_side().map(|_| self.engine.name())
    }

    /// Borrow the presentation.
    #[must_use]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Check if the side to move is human-controlled.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.config.mode.is_human(self.state.current_player())
    }

    /// Build a snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pile: self.state.pile(),
            current_player: self.state.current_player(),
            is_over: self.state.is_over(),
            winner: self.state.winner(),
            is_human_turn_next: self.is_human_turn(),
        }
    }

    // === Inbound requests ===

    /// A human asks to take `amount` coins.
    ///
    /// Returns whether the move was applied.
    pub fn request_move(&mut self, amount: u32) -> bool {
        if self.state.is_over() || self.is_busy() || !self.is_human_turn() {
            debug!(amount, "ignored move request outside a human turn");
            return false;
        }
        if !self.state.is_legal(amount) {
            debug!(amount, pile = self.state.pile(), "ignored illegal move request");
            return false;
        }
        if self.state.apply_move(amount).is_err() {
            return false;
        }

        self.render();
        self.schedule_automated_turn();
        true
    }

    /// Start a new game with the current configuration.
    pub fn request_restart(&mut self) {
        self.start_game();
    }

    /// Change which side the computer plays and restart.
    pub fn request_mode_change(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.start_game();
    }

    /// Change the computer's engine and restart.
    pub fn request_engine_change(&mut self, engine: EngineKind) {
        self.config.engine = engine;
        self.engine = engine.build();
        self.start_game();
    }

    /// Replace the whole configuration and restart.
    pub fn reconfigure(&mut self, config: GameConfig) {
        self.engine = config.engine.build();
        self.config = config;
        self.start_game();
    }

    // === Deferred automated turns ===

    /// Play the pending automated turn if it is due at `now`.
    ///
    /// Returns whether a move was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(turn) if turn.is_due(now) => self.fire_pending(turn.generation),
            _ => false,
        }
    }

    /// Timer callback for a turn scheduled in `generation`.
    ///
    /// A no-op unless a turn from exactly that generation is still pending,
    /// so callbacks that outlive a restart do nothing.
    pub fn fire_pending(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(turn) if turn.generation == generation && generation == self.generation => {
                self.pending = None;
                self.play_automated_turn()
            }
            _ => {
                debug!(generation, current = self.generation, "dropped stale automated turn");
                false
            }
        }
    }

    /// Play any pending automated turn now, ignoring its delay.
    pub fn flush(&mut self) -> bool {
        match self.pending {
            Some(turn) => self.fire_pending(turn.generation),
            None => false,
        }
    }

    // === Internals ===

    fn start_game(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.state.reset(self.config.starting_pile);

        info!(
            generation = self.generation,
            pile = self.state.pile(),
            mode = %self.config.mode,
            engine = self.engine.name(),
            "started game"
        );

        self.render();
        self.schedule_automated_turn();
    }

    fn schedule_automated_turn(&mut self) {
        if self.state.is_over() || self.is_human_turn() {
            return;
        }

        let turn = PendingTurn::new(self.generation, Instant::now(), self.config.ai_delay);
        debug!(generation = turn.generation, side = %self.state.current_player(), "scheduled automated turn");
        self.pending = Some(turn);
    }

    fn play_automated_turn(&mut self) -> bool {
        let pile = self.state.pile();

        // A missing or illegal engine answer falls back to one coin.
        let chosen = self.engine.best_move(pile).map(Move::amount).unwrap_or(0);
        let amount = if chosen > 0 && self.state.is_legal(chosen) {
            chosen
        } else if pile >= 1 {
            if chosen > 0 {
                warn!(engine = self.engine.name(), pile, chosen, "engine chose an illegal move");
            }
            1
        } else {
            return false;
        };

        debug!(engine = self.engine.name(), pile, amount, "automated move");
        if self.state.apply_move(amount).is_err() {
            return false;
        }

        self.render();
        self.schedule_automated_turn();
        true
    }

    fn render(&mut self) {
        let snapshot = self.snapshot();
        self.presentation.render(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::controller::SnapshotLog;
    use crate::core::{Side, MAX_PILE};

    fn controller(config: GameConfig) -> GameController<SnapshotLog> {
        GameController::new(config, SnapshotLog::new())
    }

    /// Engine that passes at pile 5 and overreaches at pile 1.
    struct MisbehavingEngine;

    impl MoveEngine for MisbehavingEngine {
        fn best_move(&self, pile: u32) -> Option<Move> {
            match pile {
                5 => None,
                1 => Some(Move::TWO),
                _ => Some(Move::ONE),
            }
        }

        fn name(&self) -> &'static str {
            "misbehaving"
        }
    }

    #[test]
    fn test_new_game_renders_initial_state() {
        let c = controller(GameConfig::default());

        assert_eq!(c.generation(), 1);
        assert_eq!(c.presentation().len(), 1);
        let snap = c.presentation().last().copied().unwrap();
        assert_eq!(snap.pile, 10);
        assert_eq!(snap.current_player, Side::A);
        assert!(!snap.is_over);
        assert!(snap.is_human_turn_next);
        assert!(!c.is_busy());
    }

    #[test]
    fn test_human_move_schedules_computer() {
        let mut c = controller(GameConfig::default());

        assert!(c.request_move(1));
        assert_eq!(c.state().pile(), 9);
        assert!(c.is_busy());

        let snap = c.presentation().last().copied().unwrap();
        assert_eq!(snap.current_player, Side::B);
        assert!(!snap.is_human_turn_next);
    }

    #[test]
    fn test_requests_ignored_while_busy() {
        let mut c = controller(GameConfig::default());
        c.request_move(1);
        let rendered = c.presentation().len();

        assert!(!c.request_move(1));
        assert_eq!(c.state().pile(), 9);
        assert_eq!(c.presentation().len(), rendered);
    }

    #[test]
    fn test_poll_respects_delay() {
        let mut c = controller(GameConfig::default().with_ai_delay(Duration::from_millis(500)));
        c.request_move(2);

        let now = Instant::now();
        assert!(!c.poll(now));
        assert!(c.is_busy());

        assert!(c.poll(now + Duration::from_secs(1)));
        assert!(!c.is_busy());
        // Heuristic leaves a multiple of three.
        assert_eq!(c.state().pile(), 6);
        assert_eq!(c.state().current_player(), Side::A);
    }

    #[test]
    fn test_illegal_request_ignored() {
        let mut c = controller(GameConfig::default().with_starting_pile(1));

        assert!(!c.request_move(2));
        assert!(!c.request_move(0));
        assert!(!c.request_move(3));
        assert_eq!(c.state().pile(), 1);
        assert_eq!(c.presentation().len(), 1);
    }

    #[test]
    fn test_computer_turn_request_ignored() {
        let mut c = controller(
            GameConfig::default().with_mode(GameMode::VsComputer(Side::A)),
        );

        // Computer moves first.
        assert!(c.is_busy());
        assert!(!c.request_move(1));
        assert_eq!(c.state().pile(), 10);

        assert!(c.flush());
        assert_eq!(c.state().pile(), 9);
        assert!(c.is_human_turn());
    }

    #[test]
    fn test_stale_callback_after_restart() {
        let mut c = controller(GameConfig::default());
        c.request_move(2);
        let stale = c.pending().map(|t| t.generation).unwrap();

        c.request_restart();

        assert_eq!(c.generation(), stale + 1);
        assert!(!c.is_busy());
        assert!(!c.fire_pending(stale));
        assert_eq!(c.state().pile(), 10);
        assert_eq!(c.state().current_player(), Side::A);
    }

    #[test]
    fn test_stale_callback_cannot_hit_new_pending_turn() {
        let mut c = controller(GameConfig::default());
        c.request_move(2);
        let stale = c.generation();

        // New game where the computer moves first gets its own pending turn.
        c.request_mode_change(GameMode::VsComputer(Side::A));
        assert!(c.is_busy());

        assert!(!c.fire_pending(stale));
        assert_eq!(c.state().pile(), 10);
        assert!(c.is_busy());
    }

    #[test]
    fn test_human_vs_human_has_no_engine() {
        let mut c = controller(GameConfig::default().with_mode(GameMode::HumanVsHuman));

        assert_eq!(c.engine_name(), None);
        assert!(c.request_move(2));
        assert!(!c.is_busy());
        assert!(c.request_move(2));
        assert_eq!(c.state().pile(), 6);
        assert_eq!(c.state().current_player(), Side::A);
        assert!(!c.flush());
    }

    #[test]
    fn test_engine_change_restarts() {
        let mut c = controller(GameConfig::default());
        c.request_move(1);
        c.flush();
        let generation = c.generation();

        c.request_engine_change(EngineKind::Search);

        assert_eq!(c.generation(), generation + 1);
        assert_eq!(c.engine_name(), Some("search"));
        assert_eq!(c.state().pile(), 10);
        assert!(c.state().history().is_empty());
    }

    #[test]
    fn test_negative_pile_is_over_and_ignores_moves() {
        let mut c = controller(GameConfig::default().with_starting_pile(-3));

        let snap = c.presentation().last().copied().unwrap();
        assert!(snap.is_over);
        assert_eq!(snap.winner, None);
        assert!(!c.is_busy());

        assert!(!c.request_move(1));
        assert!(!c.request_move(2));
        assert_eq!(c.presentation().len(), 1);
    }

    #[test]
    fn test_computer_wins_from_losing_start() {
        let mut c = controller(GameConfig::default().with_starting_pile(3));

        c.request_move(1);
        c.flush();

        assert!(c.state().is_over());
        assert_eq!(c.state().winner(), Some(Side::B));
        let snap = c.presentation().last().copied().unwrap();
        assert_eq!(snap.winner, Some(Side::B));
        assert_eq!(snap.current_player, Side::B);
    }

    #[test]
    fn test_bad_engine_answers_fall_back_to_one() {
        let config = GameConfig::default()
            .with_starting_pile(5)
            .with_mode(GameMode::VsComputer(Side::A))
            .with_ai_delay(Duration::ZERO);
        let mut c = GameController::with_engine(config, Box::new(MisbehavingEngine), SnapshotLog::new());

        assert_eq!(c.engine_name(), Some("misbehaving"));

        // No move at pile 5.
        assert!(c.flush());
        assert_eq!(c.state().pile(), 4);

        assert!(c.request_move(1));
        assert!(c.flush());
        assert_eq!(c.state().pile(), 2);

        // Two coins from a pile of one.
        assert!(c.request_move(1));
        assert!(c.flush());
        assert_eq!(c.state().pile(), 0);
        assert_eq!(c.state().winner(), Some(Side::A));

        assert!(c.state().history().iter().all(|r| r.mv == Move::ONE));
        assert_eq!(c.state().history().len(), 5);
    }

    #[test]
    fn test_custom_engine_survives_restart() {
        let config = GameConfig::default()
            .with_starting_pile(5)
            .with_mode(GameMode::VsComputer(Side::A))
            .with_ai_delay(Duration::ZERO);
        let mut c = GameController::with_engine(config, Box::new(MisbehavingEngine), SnapshotLog::new());

        c.request_mode_change(GameMode::HumanVsHuman);
        assert_eq!(c.engine_name(), None);

        c.request_restart();
        c.request_mode_change(GameMode::VsComputer(Side::B));
        assert_eq!(c.engine_name(), Some("misbehaving"));

        c.request_engine_change(EngineKind::Heuristic);
        assert_eq!(c.engine_name(), Some("heuristic"));
    }

    #[test]
    fn test_max_pile_search_turn() {
        let config = GameConfig::default()
            .with_starting_pile(i64::MAX)
            .with_mode(GameMode::VsComputer(Side::A))
            .with_engine(EngineKind::Search)
            .with_ai_delay(Duration::ZERO);
        let mut c = controller(config);

        assert_eq!(c.state().pile(), MAX_PILE);
        assert!(c.flush());
        // MAX_PILE is one above a multiple of three.
        assert_eq!(c.state().pile(), MAX_PILE - 1);
        assert!(c.is_human_turn());
    }
}
