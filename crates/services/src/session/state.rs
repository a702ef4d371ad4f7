use blaster_core::model::{Difficulty, SessionMode};
use serde::Serialize;

/// Screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    End,
}

/// Identifies one play-through; timers carry it so a stale timer can never
/// touch a later session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct SessionId(u64);

impl SessionId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Everything the presentation layer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub phase: GamePhase,
    pub mode: SessionMode,
    pub difficulty: Difficulty,
    pub score: u32,
    /// Seconds left; only meaningful for timed challenges.
    pub time_left: u32,
    pub is_new_high_score: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(time_left: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            mode: SessionMode::default(),
            difficulty: Difficulty::default(),
            score: 0,
            time_left,
            is_new_high_score: false,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Whether the countdown belongs on screen.
    #[must_use]
    pub fn shows_timer(&self) -> bool {
        self.mode.is_timed()
    }
}
