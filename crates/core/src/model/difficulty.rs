use serde::{Deserialize, Serialize};
use std::fmt;

use super::ModelError;

//
// ─── BIT WIDTH ─────────────────────────────────────────────────────────────────
//

/// Number of binary digits used for every question of a session.
///
/// Only the widths reachable through a [`Difficulty`] are representable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitWidth(u8);

impl BitWidth {
    pub const FOUR: Self = Self(4);
    pub const SIX: Self = Self(6);
    pub const EIGHT: Self = Self(8);

    /// Creates a `BitWidth` from a raw digit count.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::UnsupportedBitWidth` unless `bits` is 4, 6 or 8.
    pub fn new(bits: u8) -> Result<Self, ModelError> {
        match bits {
            4 | 6 | 8 => Ok(Self(bits)),
            other => Err(ModelError::UnsupportedBitWidth(other)),
        }
    }

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Largest value representable in this width (`2^bits - 1`).
    #[must_use]
    pub fn max_value(self) -> u32 {
        (1_u32 << self.0) - 1
    }

    #[must_use]
    pub fn contains(self, value: u32) -> bool {
        value <= self.max_value()
    }

    /// The all-zero answer a fresh binary input starts from.
    #[must_use]
    pub fn zeros(self) -> String {
        "0".repeat(usize::from(self.0))
    }
}

impl fmt::Debug for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitWidth({})", self.0)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier chosen on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn bit_width(self) -> BitWidth {
        match self {
            Difficulty::Easy => BitWidth::FOUR,
            Difficulty::Medium => BitWidth::SIX,
            Difficulty::Hard => BitWidth::EIGHT,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_maps_to_fixed_widths() {
        assert_eq!(Difficulty::Easy.bit_width().bits(), 4);
        assert_eq!(Difficulty::Medium.bit_width().bits(), 6);
        assert_eq!(Difficulty::Hard.bit_width().bits(), 8);
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn only_supported_widths_construct() {
        assert_eq!(BitWidth::new(6).unwrap(), BitWidth::SIX);
        assert_eq!(BitWidth::new(5), Err(ModelError::UnsupportedBitWidth(5)));
        assert_eq!(BitWidth::new(0), Err(ModelError::UnsupportedBitWidth(0)));
    }

    #[test]
    fn width_bounds() {
        assert_eq!(BitWidth::FOUR.max_value(), 15);
        assert_eq!(BitWidth::EIGHT.max_value(), 255);
        assert!(BitWidth::SIX.contains(63));
        assert!(!BitWidth::SIX.contains(64));
        assert_eq!(BitWidth::FOUR.zeros(), "0000");
    }

    #[test]
    fn difficulty_uses_lowercase_tags() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
