//! Conversions between decimal values and fixed-width binary strings.
//!
//! All functions are pure apart from [`generate_random_number`], which only
//! consumes the caller's RNG.

use rand::Rng;
use thiserror::Error;

/// Widest binary value the converter handles.
pub const MAX_BITS: u8 = 32;

/// Ways a binary answer can be malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumeralError {
    #[error("binary input is empty")]
    Empty,

    #[error("invalid binary digit {found:?} at position {index}")]
    InvalidDigit { found: char, index: usize },

    #[error("expected {expected} bits, got {actual}")]
    WidthMismatch { expected: u8, actual: usize },

    #[error("binary value does not fit in 32 bits")]
    Overflow,
}

/// Renders `value` in base 2, left-padded with `0` to exactly `bits` characters.
///
/// Callers must keep `value < 2^bits`. If they do not, the full base-2 string is
/// returned unpadded; high-order bits are never dropped.
///
/// ```
/// # use blaster_core::numeral::decimal_to_binary;
/// assert_eq!(decimal_to_binary(5, 4), "0101");
/// assert_eq!(decimal_to_binary(255, 8), "11111111");
/// ```
#[must_use]
pub fn decimal_to_binary(value: u32, bits: u8) -> String {
    debug_assert!(bits > 0, "bit width must be positive");
    debug_assert!(
        u64::from(value) < 1_u64 << bits.min(MAX_BITS),
        "{value} does not fit in {bits} bits"
    );
    format!("{value:0width$b}", width = usize::from(bits))
}

/// Parses a string of `0`/`1` characters into its value.
///
/// # Errors
///
/// Returns `NumeralError::Empty` for an empty string, `NumeralError::InvalidDigit`
/// for any character other than `0` or `1`, and `NumeralError::Overflow` when the
/// value exceeds `u32`.
pub fn binary_to_decimal(bits: &str) -> Result<u32, NumeralError> {
    if bits.is_empty() {
        return Err(NumeralError::Empty);
    }
    let invalid = bits.chars().enumerate().find(|&(_, c)| !matches!(c, '0' | '1'));
    if let Some((index, found)) = invalid {
        return Err(NumeralError::InvalidDigit { found, index });
    }
    u32::from_str_radix(bits, 2).map_err(|_| NumeralError::Overflow)
}

/// Like [`binary_to_decimal`], but also requires exactly `width` digits.
///
/// # Errors
///
/// Returns `NumeralError::WidthMismatch` when the length differs from `width`,
/// otherwise the errors of [`binary_to_decimal`].
pub fn parse_fixed_width(bits: &str, width: u8) -> Result<u32, NumeralError> {
    let actual = bits.chars().count();
    if actual != 0 && actual != usize::from(width) {
        return Err(NumeralError::WidthMismatch {
            expected: width,
            actual,
        });
    }
    binary_to_decimal(bits)
}

/// Draws a value uniformly from `[0, 2^bits - 1]`.
#[must_use]
pub fn generate_random_number<R: Rng + ?Sized>(rng: &mut R, bits: u8) -> u32 {
    debug_assert!(bits > 0 && bits <= MAX_BITS);
    let max = u32::MAX >> (MAX_BITS - bits.clamp(1, MAX_BITS));
    rng.random_range(0..=max)
}

/// Flips the digit at `index`, as the bit-button input does on click.
///
/// Out-of-range indices and non-binary characters leave the string unchanged.
#[must_use]
pub fn toggle_bit(bits: &str, index: usize) -> String {
    bits.chars()
        .enumerate()
        .map(|(i, c)| match (i == index, c) {
            (true, '0') => '1',
            (true, '1') => '0',
            _ => c,
        })
        .collect()
}

/// Reads the leading decimal integer of typed text, ignoring anything after it.
///
/// `"5.0"`, `"5e0"` and `"12abc"` read as 5, 5 and 12. Returns `None` when no
/// digits lead the text or the value is negative or exceeds `u32`.
#[must_use]
pub fn parse_decimal_prefix(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<u32>().ok()?;
    // "-0" is still zero.
    (!negative || value == 0).then_some(value)
}
