use std::fmt;

use crate::model::{BitWidth, ConversionDirection, ModelError};
use crate::numeral::{NumeralError, decimal_to_binary};

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single conversion prompt. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    direction: ConversionDirection,
    value: u32,
    width: BitWidth,
}

impl Question {
    /// Builds a question for `value` rendered in `width` bits.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ValueOutOfRange` if `value` does not fit in `width`.
    pub fn new(
        direction: ConversionDirection,
        value: u32,
        width: BitWidth,
    ) -> Result<Self, ModelError> {
        if !width.contains(value) {
            return Err(ModelError::ValueOutOfRange {
                value,
                bits: width.bits(),
            });
        }
        Ok(Self {
            direction,
            value,
            width,
        })
    }

    /// Skips the range check for values drawn from `width` itself.
    pub(crate) fn generated(direction: ConversionDirection, value: u32, width: BitWidth) -> Self {
        debug_assert!(width.contains(value));
        Self {
            direction,
            value,
            width,
        }
    }

    #[must_use]
    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// The value in the representation shown to the player.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self.direction {
            ConversionDirection::DecimalToBinary => self.value.to_string(),
            ConversionDirection::BinaryToDecimal => {
                decimal_to_binary(self.value, self.width.bits())
            }
        }
    }

    #[must_use]
    pub fn instruction(&self) -> &'static str {
        self.direction.instruction()
    }

    /// The value in the representation the player must answer with.
    #[must_use]
    pub fn expected_answer(&self) -> ExpectedAnswer {
        match self.direction {
            ConversionDirection::DecimalToBinary => {
                ExpectedAnswer::Bits(decimal_to_binary(self.value, self.width.bits()))
            }
            ConversionDirection::BinaryToDecimal => ExpectedAnswer::Decimal(self.value),
        }
    }
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// A submitted answer, in the representation opposite to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerAttempt {
    /// Fixed-width bit string, one character per bit.
    Bits(String),
    Decimal(u32),
}

impl AnswerAttempt {
    #[must_use]
    pub fn bits(bits: impl Into<String>) -> Self {
        Self::Bits(bits.into())
    }

    #[must_use]
    pub fn decimal(value: u32) -> Self {
        Self::Decimal(value)
    }
}

/// Correct answer attached to feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedAnswer {
    Bits(String),
    Decimal(u32),
}

impl fmt::Display for ExpectedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedAnswer::Bits(bits) => f.write_str(bits),
            ExpectedAnswer::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// Result of judging one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub correct: bool,
    pub expected: ExpectedAnswer,
    /// Set when the answer was rejected as malformed before comparison.
    pub input_error: Option<NumeralError>,
}

impl RoundOutcome {
    /// Points earned by this submission: 1 when correct, otherwise 0.
    #[must_use]
    pub fn score_delta(&self) -> u32 {
        u32::from(self.correct)
    }

    #[must_use]
    pub fn feedback_message(&self) -> String {
        if self.correct {
            "Correct!".to_owned()
        } else {
            format!("Incorrect! Answer: {}", self.expected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_follows_direction() {
        let q = Question::new(ConversionDirection::DecimalToBinary, 5, BitWidth::FOUR).unwrap();
        assert_eq!(q.prompt(), "5");
        assert_eq!(q.instruction(), "Convert to Binary:");
        assert_eq!(q.expected_answer(), ExpectedAnswer::Bits("0101".into()));

        let q = Question::new(ConversionDirection::BinaryToDecimal, 5, BitWidth::SIX).unwrap();
        assert_eq!(q.prompt(), "000101");
        assert_eq!(q.expected_answer(), ExpectedAnswer::Decimal(5));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let err =
            Question::new(ConversionDirection::DecimalToBinary, 16, BitWidth::FOUR).unwrap_err();
        assert_eq!(err, ModelError::ValueOutOfRange { value: 16, bits: 4 });
    }

    #[test]
    fn feedback_message_names_expected_answer() {
        let outcome = RoundOutcome {
            correct: false,
            expected: ExpectedAnswer::Bits("1010".into()),
            input_error: None,
        };
        assert_eq!(outcome.feedback_message(), "Incorrect! Answer: 1010");
        assert_eq!(outcome.score_delta(), 0);

        let outcome = RoundOutcome {
            correct: true,
            expected: ExpectedAnswer::Decimal(10),
            input_error: None,
        };
        assert_eq!(outcome.feedback_message(), "Correct!");
        assert_eq!(outcome.score_delta(), 1);
    }
}
