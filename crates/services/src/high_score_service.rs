use std::sync::Arc;

use blaster_core::model::HighScoreLedger;
use storage::high_scores::{decode_ledger, encode_ledger};
use storage::repository::KeyValueStore;
use tracing::warn;

use crate::error::HighScoreError;

/// Loads and stores the ledger under a fixed key.
#[derive(Clone)]
pub struct HighScoreService {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl HighScoreService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted ledger; a missing key is an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::Read` if the store fails or the value does not decode.
    pub async fn try_load(&self) -> Result<HighScoreLedger, HighScoreError> {
        let raw = self.store.get(&self.key).await.map_err(HighScoreError::Read)?;
        match raw {
            Some(raw) => decode_ledger(&raw).map_err(HighScoreError::Read),
            None => Ok(HighScoreLedger::new()),
        }
    }

    /// Read the persisted ledger, falling back to an empty one on any failure.
    pub async fn load(&self) -> HighScoreLedger {
        match self.try_load().await {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!(key = %self.key, error = %err, "high scores unreadable, starting empty");
                HighScoreLedger::new()
            }
        }
    }

    /// Persist the full ledger, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Returns `HighScoreError::Write` if encoding or storing fails.
    pub async fn save(&self, ledger: &HighScoreLedger) -> Result<(), HighScoreError> {
        let raw = encode_ledger(ledger).map_err(HighScoreError::Write)?;
        self.store
            .put(&self.key, &raw)
            .await
            .map_err(HighScoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaster_core::model::HighScoreEntry;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn missing_key_loads_empty() {
        let service = HighScoreService::new(Arc::new(InMemoryRepository::new()), "scores");
        assert!(service.try_load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let service = HighScoreService::new(Arc::new(repo.clone()), "scores");
        let ledger = HighScoreLedger::from_entries(vec![HighScoreEntry::new(7, "5/6/2025")]);

        service.save(&ledger).await.unwrap();
        assert_eq!(service.load().await, ledger);
        assert_eq!(
            repo.get("scores").await.unwrap().as_deref(),
            Some(r#"[{"score":7,"date":"5/6/2025"}]"#)
        );
    }

    #[tokio::test]
    async fn malformed_value_falls_back_to_empty() {
        let repo = InMemoryRepository::new();
        repo.put("scores", "{not json").await.unwrap();
        let service = HighScoreService::new(Arc::new(repo), "scores");

        assert!(matches!(service.try_load().await, Err(HighScoreError::Read(_))));
        assert!(service.load().await.is_empty());
    }
}
