use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use storage::repository::Storage;

use crate::Clock;
use crate::config::GameConfig;
use crate::error::GameServicesError;
use crate::high_score_service::HighScoreService;
use crate::session::SessionController;

/// Assembles configuration, clock and storage into ready-to-play controllers.
#[derive(Clone)]
pub struct GameServices {
    config: GameConfig,
    clock: Clock,
    high_scores: HighScoreService,
}

impl GameServices {
    /// Build services from `BLASTER_*` environment overrides, backed by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `GameServicesError` if the configuration is invalid or storage
    /// initialization fails.
    pub async fn from_env() -> Result<Self, GameServicesError> {
        let config = GameConfig::from_env()?;
        Self::new_sqlite(config, Clock::default_clock()).await
    }

    /// Build services backed by `SQLite` at `config.database_url`.
    ///
    /// # Errors
    ///
    /// Returns `GameServicesError` if storage initialization fails.
    pub async fn new_sqlite(config: GameConfig, clock: Clock) -> Result<Self, GameServicesError> {
        let storage = Storage::sqlite(&config.database_url).await?;
        Ok(Self::from_storage(config, clock, &storage))
    }

    #[must_use]
    pub fn in_memory(config: GameConfig, clock: Clock) -> Self {
        Self::from_storage(config, clock, &Storage::in_memory())
    }

    #[must_use]
    pub fn from_storage(config: GameConfig, clock: Clock, storage: &Storage) -> Self {
        let high_scores = HighScoreService::new(storage.kv.clone(), config.high_scores_key.clone());
        Self {
            config,
            clock,
            high_scores,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreService {
        &self.high_scores
    }

    /// A controller seeded from OS entropy, with the persisted ledger loaded.
    pub async fn controller(&self) -> SessionController<StdRng> {
        self.controller_with_rng(StdRng::from_os_rng()).await
    }

    /// A controller using the given RNG, with the persisted ledger loaded.
    pub async fn controller_with_rng<R: Rng>(&self, rng: R) -> SessionController<R> {
        SessionController::load(
            self.config.clone(),
            self.clock,
            rng,
            self.high_scores.clone(),
        )
        .await
    }
}
