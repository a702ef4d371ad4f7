mod difficulty;
mod high_score;
mod mode;
mod question;

use thiserror::Error;

pub use difficulty::{BitWidth, Difficulty};
pub use high_score::{HighScoreEntry, HighScoreLedger, LEDGER_CAPACITY};
pub use mode::{ConversionDirection, SessionMode};
pub use question::{AnswerAttempt, ExpectedAnswer, Question, RoundOutcome};

/// Errors raised when constructing model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("unsupported bit width: {0}")]
    UnsupportedBitWidth(u8),

    #[error("value {value} does not fit in {bits} bits")]
    ValueOutOfRange { value: u32, bits: u8 },
}
