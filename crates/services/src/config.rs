use std::time::Duration;

use crate::error::ConfigError;

/// Storage key the ledger lives under.
pub const DEFAULT_HIGH_SCORES_KEY: &str = "binaryBlasterHighScores";

/// Tunables for a game; defaults match the classroom rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown start for timed challenges, in seconds.
    pub timed_seconds: u32,
    /// How long answer feedback stays up before the next question.
    pub feedback_delay: Duration,
    /// Countdown period.
    pub tick_interval: Duration,
    pub high_scores_key: String,
    pub database_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timed_seconds: 60,
            feedback_delay: Duration::from_millis(1500),
            tick_interval: Duration::from_millis(1000),
            high_scores_key: DEFAULT_HIGH_SCORES_KEY.to_owned(),
            database_url: "sqlite://binary_blaster.sqlite3?mode=rwc".to_owned(),
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `BLASTER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("BLASTER_TIMED_SECONDS") {
            config.timed_seconds = parse_positive("BLASTER_TIMED_SECONDS", &raw)?;
        }
        if let Some(raw) = lookup("BLASTER_FEEDBACK_DELAY_MS") {
            let ms = parse_positive("BLASTER_FEEDBACK_DELAY_MS", &raw)?;
            config.feedback_delay = Duration::from_millis(u64::from(ms));
        }
        if let Some(raw) = lookup("BLASTER_TICK_MS") {
            let ms = parse_positive("BLASTER_TICK_MS", &raw)?;
            config.tick_interval = Duration::from_millis(u64::from(ms));
        }
        if let Some(raw) = lookup("BLASTER_HIGH_SCORES_KEY") {
            config.high_scores_key = non_empty("BLASTER_HIGH_SCORES_KEY", raw)?;
        }
        if let Some(raw) = lookup("BLASTER_DB_URL") {
            config.database_url = non_empty("BLASTER_DB_URL", raw)?;
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let value: u32 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        raw: raw.to_owned(),
    })?;
    if value == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(value)
}

fn non_empty(var: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn no_overrides_yields_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.timed_seconds, 60);
        assert_eq!(config.feedback_delay, Duration::from_millis(1500));
        assert_eq!(config.high_scores_key, "binaryBlasterHighScores");
    }

    #[test]
    fn overrides_apply() {
        let config = GameConfig::from_lookup(lookup(&[
            ("BLASTER_TIMED_SECONDS", "30"),
            ("BLASTER_FEEDBACK_DELAY_MS", " 500 "),
            ("BLASTER_TICK_MS", "250"),
            ("BLASTER_HIGH_SCORES_KEY", "scores"),
            ("BLASTER_DB_URL", "sqlite::memory:"),
        ]))
        .unwrap();
        assert_eq!(config.timed_seconds, 30);
        assert_eq!(config.feedback_delay, Duration::from_millis(500));
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.high_scores_key, "scores");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err =
            GameConfig::from_lookup(lookup(&[("BLASTER_TIMED_SECONDS", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "BLASTER_TIMED_SECONDS",
                raw: "soon".into()
            }
        );

        let err = GameConfig::from_lookup(lookup(&[("BLASTER_TICK_MS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Zero { var: "BLASTER_TICK_MS" });

        let err =
            GameConfig::from_lookup(lookup(&[("BLASTER_HIGH_SCORES_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: "BLASTER_HIGH_SCORES_KEY" });
    }
}
