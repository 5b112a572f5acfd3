//! Game configuration types.
//!
//! The controller is configured at startup by providing:
//! - `GameMode`: which side (if any) the computer plays
//! - `EngineKind`: which move engine the computer uses
//! - `GameConfig`: combines the above with the starting pile and AI delay
//!
//! Configuration only changes between games. The controller restarts the
//! game whenever any of it is reconfigured.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Side;

/// Which side, if any, is controlled by the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Both sides are human.
    HumanVsHuman,
    /// The given side is played by the computer, the other by a human.
    VsComputer(Side),
}

impl GameMode {
    /// Get the computer-controlled side, if any.
    #[must_use]
    pub const fn computer_side(self) -> Option<Side> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::VsComputer(side) => Some(side),
        }
    }

    /// Check if `side` is played by a human.
    #[must_use]
    pub fn is_human(self, side: Side) -> bool {
        self.computer_side() != Some(side)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsComputer(Side::B)
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::HumanVsHuman),
            "pvai" => Ok(GameMode::VsComputer(Side::B)),
            "aivp" => Ok(GameMode::VsComputer(Side::A)),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "pvp"),
            GameMode::VsComputer(Side::B) => write!(f, "pvai"),
            GameMode::VsComputer(Side::A) => write!(f, "aivp"),
        }
    }
}

/// Move engine variant used for automated turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    /// Closed-form Grundy rule (`pile % 3`).
    #[default]
    Heuristic,
    /// Exhaustive memoized win/loss search.
    Search,
}

impl FromStr for EngineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "grundy" => Ok(EngineKind::Heuristic),
            "search" | "minimax" => Ok(EngineKind::Search),
            _ => Err(ConfigError::UnknownEngine(s.to_string())),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Heuristic => write!(f, "heuristic"),
            EngineKind::Search => write!(f, "search"),
        }
    }
}

/// Complete controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Coins on the strip at the start of each game.
    ///
    /// Negative values are accepted and clamp to an empty pile.
    pub starting_pile: i64,

    /// Which side the computer plays.
    pub mode: GameMode,

    /// Engine used for the computer's moves.
    pub engine: EngineKind,

    /// Delay before a scheduled automated turn is played.
    #[serde(with = "duration_ms", rename = "ai_delay_ms")]
    pub ai_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_pile: 10,
            mode: GameMode::default(),
            engine: EngineKind::default(),
            ai_delay: Duration::from_millis(500),
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting pile.
    #[must_use]
    pub fn with_starting_pile(mut self, pile: i64) -> Self {
        self.starting_pile = pile;
        self
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the engine.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Set the automated-turn delay.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
