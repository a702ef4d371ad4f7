use serde::{Deserialize, Serialize};

/// Which representation is shown and which is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionDirection {
    /// Prompt in decimal, answer as a fixed-width bit string.
    #[serde(rename = "decToBin")]
    DecimalToBinary,
    /// Prompt as a fixed-width bit string, answer in decimal.
    #[serde(rename = "binToDec")]
    BinaryToDecimal,
}

impl ConversionDirection {
    pub const BOTH: [ConversionDirection; 2] = [
        ConversionDirection::DecimalToBinary,
        ConversionDirection::BinaryToDecimal,
    ];

    /// Instruction line displayed above the prompt.
    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            ConversionDirection::DecimalToBinary => "Convert to Binary:",
            ConversionDirection::BinaryToDecimal => "Convert to Decimal:",
        }
    }
}

/// Game mode picked for a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionMode {
    #[default]
    #[serde(rename = "decToBin")]
    DecimalToBinary,
    #[serde(rename = "binToDec")]
    BinaryToDecimal,
    /// Countdown mode; every question picks its own direction at random.
    #[serde(rename = "timed")]
    TimedChallenge,
}

impl SessionMode {
    /// Direction pinned by this mode, or `None` when each question chooses.
    #[must_use]
    pub fn fixed_direction(self) -> Option<ConversionDirection> {
        match self {
            SessionMode::DecimalToBinary => Some(ConversionDirection::DecimalToBinary),
            SessionMode::BinaryToDecimal => Some(ConversionDirection::BinaryToDecimal),
            SessionMode::TimedChallenge => None,
        }
    }

    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, SessionMode::TimedChallenge)
    }
}

impl From<ConversionDirection> for SessionMode {
    fn from(direction: ConversionDirection) -> Self {
        match direction {
            ConversionDirection::DecimalToBinary => SessionMode::DecimalToBinary,
            ConversionDirection::BinaryToDecimal => SessionMode::BinaryToDecimal,
        }
    }
}
