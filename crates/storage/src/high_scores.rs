//! Wire encoding of the high-score ledger.
//!
//! The ledger is stored as a JSON array of `{"score": <int>, "date": <string>}`
//! objects, best first.

use blaster_core::model::{HighScoreEntry, HighScoreLedger};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Persisted shape of one ledger entry.
///
/// Mirrors the domain `HighScoreEntry` so the storage format can evolve
/// without touching the domain type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub score: u32,
    pub date: String,
}

impl HighScoreRecord {
    #[must_use]
    pub fn from_entry(entry: &HighScoreEntry) -> Self {
        Self {
            score: entry.score,
            date: entry.date.clone(),
        }
    }

    #[must_use]
    pub fn into_entry(self) -> HighScoreEntry {
        HighScoreEntry::new(self.score, self.date)
    }
}

/// Serialize the full ledger.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_ledger(ledger: &HighScoreLedger) -> Result<String, StorageError> {
    let records: Vec<HighScoreRecord> = ledger
        .entries()
        .iter()
        .map(HighScoreRecord::from_entry)
        .collect();
    serde_json::to_string(&records).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse a stored ledger.
///
/// Stored data is not trusted to be ordered or capped; it is re-sorted and
/// truncated on the way in.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for anything that is not an array of
/// records with a non-negative integer score and a string date.
pub fn decode_ledger(raw: &str) -> Result<HighScoreLedger, StorageError> {
    let records: Vec<HighScoreRecord> =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(HighScoreLedger::from_entries(
        records.into_iter().map(HighScoreRecord::into_entry).collect(),
    ))
}
