use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the ledger.
pub const LEDGER_CAPACITY: usize = 3;

/// One recorded result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Calendar date the score was set, as displayed.
    pub date: String,
}

impl HighScoreEntry {
    #[must_use]
    pub fn new(score: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
        }
    }
}

/// Top scores, best first, never longer than [`LEDGER_CAPACITY`].
///
/// Entries are never edited in place; recording a score produces a new ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreLedger {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from entries in arbitrary order.
    ///
    /// Entries are stably sorted descending by score and truncated to capacity,
    /// so equal scores keep their given order.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEDGER_CAPACITY);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= LEDGER_CAPACITY
    }

    /// Score of the last-ranked entry, if any.
    #[must_use]
    pub fn lowest_score(&self) -> Option<u32> {
        self.entries.last().map(|entry| entry.score)
    }

    /// Whether `score` earns a place.
    ///
    /// Zero never qualifies. Otherwise any score qualifies while the ledger has
    /// room, and once full it must strictly beat the lowest entry.
    #[must_use]
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        match self.lowest_score() {
            Some(lowest) if self.is_full() => score > lowest,
            _ => true,
        }
    }

    /// Returns the ledger with `score` recorded, or `None` if it does not qualify.
    ///
    /// The new entry ranks below existing entries with an equal score.
    #[must_use]
    pub fn with_score(&self, score: u32, date: impl Into<String>) -> Option<Self> {
        if !self.qualifies(score) {
            return None;
        }
        let mut entries = self.entries.clone();
        entries.push(HighScoreEntry::new(score, date));
        Some(Self::from_entries(entries))
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<HighScoreEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_ledger() -> HighScoreLedger {
        HighScoreLedger::from_entries(vec![
            HighScoreEntry::new(90, "d1"),
            HighScoreEntry::new(80, "d2"),
            HighScoreEntry::new(70, "d3"),
        ])
    }

    #[test]
    fn higher_score_displaces_lowest() {
        let updated = full_ledger().with_score(85, "today").unwrap();
        assert_eq!(
            updated.entries(),
            &[
                HighScoreEntry::new(90, "d1"),
                HighScoreEntry::new(85, "today"),
                HighScoreEntry::new(80, "d2"),
            ]
        );
    }

    #[test]
    fn full_ledger_rejects_scores_not_beating_lowest() {
        let ledger = full_ledger();
        assert!(ledger.with_score(70, "today").is_none());
        assert!(ledger.with_score(12, "today").is_none());
        assert!(ledger.qualifies(71));
    }

    #[test]
    fn zero_never_qualifies() {
        assert!(!HighScoreLedger::new().qualifies(0));
        assert!(HighScoreLedger::new().with_score(0, "today").is_none());
    }

    #[test]
    fn ledger_with_room_accepts_any_positive_score() {
        let ledger = HighScoreLedger::from_entries(vec![
            HighScoreEntry::new(50, "d1"),
            HighScoreEntry::new(40, "d2"),
        ]);
        let updated = ledger.with_score(1, "today").unwrap();
        assert_eq!(updated.len(), 3);
        assert_eq!(updated.lowest_score(), Some(1));
        assert!(updated.is_full());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let ledger = HighScoreLedger::from_entries(vec![HighScoreEntry::new(10, "first")]);
        let updated = ledger.with_score(10, "second").unwrap();
        assert_eq!(updated.entries()[0].date, "first");
        assert_eq!(updated.entries()[1].date, "second");
    }

    #[test]
    fn from_entries_sorts_and_caps() {
        let ledger = HighScoreLedger::from_entries(vec![
            HighScoreEntry::new(1, "a"),
            HighScoreEntry::new(9, "b"),
            HighScoreEntry::new(5, "c"),
            HighScoreEntry::new(7, "d"),
        ]);
        let scores: Vec<u32> = ledger.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 7, 5]);
    }
}
