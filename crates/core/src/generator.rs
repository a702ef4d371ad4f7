//! Random question generation.

use rand::Rng;

use crate::model::{BitWidth, ConversionDirection, Question, SessionMode};
use crate::numeral::generate_random_number;

/// Produces a fresh question for `mode` at `width`.
///
/// Timed challenges pick a direction with equal probability on every call;
/// other modes pin it. Nothing is retained between calls except the RNG stream.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, mode: SessionMode, width: BitWidth) -> Question {
    let direction = match mode.fixed_direction() {
        Some(direction) => direction,
        None if rng.random_bool(0.5) => ConversionDirection::DecimalToBinary,
        None => ConversionDirection::BinaryToDecimal,
    };
    let value = generate_random_number(rng, width.bits());
    Question::generated(direction, value, width)
}

/// Unbounded lazy stream of independent questions.
pub struct Questions<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    mode: SessionMode,
    width: BitWidth,
}

impl<R: Rng + ?Sized> Iterator for Questions<'_, R> {
    type Item = Question;

    fn next(&mut self) -> Option<Question> {
        Some(generate(&mut *self.rng, self.mode, self.width))
    }
}

#[must_use]
pub fn questions<R: Rng + ?Sized>(
    rng: &mut R,
    mode: SessionMode,
    width: BitWidth,
) -> Questions<'_, R> {
    Questions { rng, mode, width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pinned_modes_keep_their_direction() {
        let mut rng = StdRng::seed_from_u64(1);
        for q in questions(&mut rng, SessionMode::BinaryToDecimal, BitWidth::SIX).take(200) {
            assert_eq!(q.direction(), ConversionDirection::BinaryToDecimal);
            assert!(q.value() <= 63);
            assert_eq!(q.width(), BitWidth::SIX);
        }
        let q = generate(&mut rng, SessionMode::DecimalToBinary, BitWidth::FOUR);
        assert_eq!(q.direction(), ConversionDirection::DecimalToBinary);
    }

    #[test]
    fn timed_mode_mixes_directions() {
        let mut rng = StdRng::seed_from_u64(2);
        let to_binary = questions(&mut rng, SessionMode::TimedChallenge, BitWidth::EIGHT)
            .take(1_000)
            .filter(|q| q.direction() == ConversionDirection::DecimalToBinary)
            .count();
        assert!((350..=650).contains(&to_binary), "got {to_binary}");
    }

    #[test]
    fn same_seed_same_questions() {
        let mut first = StdRng::seed_from_u64(3);
        let mut second = StdRng::seed_from_u64(3);
        let a: Vec<_> = questions(&mut first, SessionMode::TimedChallenge, BitWidth::EIGHT)
            .take(20)
            .collect();
        let b: Vec<_> = questions(&mut second, SessionMode::TimedChallenge, BitWidth::EIGHT)
            .take(20)
            .collect();
        assert_eq!(a, b);
    }
}
