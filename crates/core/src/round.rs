//! Lifecycle of a single question: armed, then resolved by one submission.

use thiserror::Error;

use crate::model::{AnswerAttempt, ConversionDirection, Question, RoundOutcome};
use crate::numeral::{NumeralError, parse_decimal_prefix, parse_fixed_width};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round already resolved")]
    AlreadyResolved,
}

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the one accepted submission.
    Armed,
    /// Feedback is showing; further submissions are rejected.
    Resolved(RoundOutcome),
}

/// One question-answer-feedback cycle. Rounds are replaced, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    question: Question,
    phase: RoundPhase,
}

impl Round {
    #[must_use]
    pub fn new(question: Question) -> Self {
        Self {
            question,
            phase: RoundPhase::Armed,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, RoundPhase::Armed)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match &self.phase {
            RoundPhase::Armed => None,
            RoundPhase::Resolved(outcome) => Some(outcome),
        }
    }

    /// Judges `attempt` and resolves the round, correct or not.
    ///
    /// A malformed bit string, or an answer in the wrong representation, counts
    /// as incorrect; the format problem is reported in `RoundOutcome::input_error`.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::AlreadyResolved` if a submission was already accepted.
    pub fn submit(&mut self, attempt: &AnswerAttempt) -> Result<RoundOutcome, RoundError> {
        if !self.is_armed() {
            return Err(RoundError::AlreadyResolved);
        }
        let (correct, input_error) = judge(&self.question, attempt);
        Ok(self.resolve(correct, input_error))
    }

    /// Judges raw text typed by the player.
    ///
    /// Decimal answers are read up to the first non-digit, so `"5.0"` counts
    /// as 5. Text with no leading digits resolves the round as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::AlreadyResolved` if a submission was already accepted.
    pub fn submit_text(&mut self, raw: &str) -> Result<RoundOutcome, RoundError> {
        let raw = raw.trim();
        match self.question.direction() {
            ConversionDirection::DecimalToBinary => self.submit(&AnswerAttempt::bits(raw)),
            ConversionDirection::BinaryToDecimal => match parse_decimal_prefix(raw) {
                Some(value) => self.submit(&AnswerAttempt::Decimal(value)),
                None if self.is_armed() => Ok(self.resolve(false, None)),
                None => Err(RoundError::AlreadyResolved),
            },
        }
    }

    fn resolve(&mut self, correct: bool, input_error: Option<NumeralError>) -> RoundOutcome {
        let outcome = RoundOutcome {
            correct,
            expected: self.question.expected_answer(),
            input_error,
        };
        self.phase = RoundPhase::Resolved(outcome.clone());
        outcome
    }
}

fn judge(question: &Question, attempt: &AnswerAttempt) -> (bool, Option<NumeralError>) {
    match (question.direction(), attempt) {
        (ConversionDirection::DecimalToBinary, AnswerAttempt::Bits(bits)) => {
            match parse_fixed_width(bits, question.width().bits()) {
                Ok(value) => (value == question.value(), None),
                Err(err) => (false, Some(err)),
            }
        }
        (ConversionDirection::BinaryToDecimal, AnswerAttempt::Decimal(value)) => {
            (*value == question.value(), None)
        }
        (ConversionDirection::DecimalToBinary, AnswerAttempt::Decimal(_))
        | (ConversionDirection::BinaryToDecimal, AnswerAttempt::Bits(_)) => (false, None),
    }
}
