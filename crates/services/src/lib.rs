#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod game_services;
pub mod high_score_service;
pub mod session;
pub mod timer;

pub use blaster_core::Clock;

pub use config::GameConfig;
pub use error::{ConfigError, GameServicesError, HighScoreError, SessionError};
pub use game_services::GameServices;
pub use high_score_service::HighScoreService;
pub use session::{GamePhase, SessionController, SessionId, SessionState};
pub use timer::{TimerHandle, TimerQueue};
