// SPDX-License-Identifier: MIT
//
//! Validation of user-supplied color counts.
//!
//! The generator accepts any `usize`, but display layers only offer
//! `1..=100`: enough to compare hues, few enough to draw. Text from an input
//! field or the command line goes through [`parse_count`] first.

use std::ops::RangeInclusive;

/// Smallest count a display layer accepts.
pub const MIN_COUNT: usize = 1;

/// Largest count a display layer accepts.
pub const MAX_COUNT: usize = 100;

/// The accepted range, `MIN_COUNT..=MAX_COUNT`.
pub const COUNT_RANGE: RangeInclusive<usize> = MIN_COUNT..=MAX_COUNT;

/// Why a requested count was rejected.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// The input is not an integer.
    #[error("Please enter a valid integer")]
    InvalidFormat { input: String },

    /// The integer is outside [`COUNT_RANGE`].
    #[error("{}", range_message(.value))]
    OutOfRange { value: i64 },
}

impl CountError {
    /// Whether the input parsed but fell outside [`COUNT_RANGE`].
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Whether the input was out of range on the low side.
    #[must_use]
    pub const fn is_too_few(&self) -> bool {
        matches!(self, Self::OutOfRange { value } if *value < MIN_COUNT as i64)
    }
}

fn range_message(value: &i64) -> String {
    if *value < MIN_COUNT as i64 {
        format!("Number of colors must be at least {MIN_COUNT}")
    } else {
        format!("Number of colors cannot exceed {MAX_COUNT}")
    }
}

/// Parse and range-check a count typed by the user.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted
/// (so `-3` is reported as out of range rather than malformed). Integers too
/// large for `i64` are still integers and are reported as too many.
///
/// # Errors
///
/// [`CountError::InvalidFormat`] if `input` is not an integer,
/// [`CountError::OutOfRange`] if it is outside [`COUNT_RANGE`].
///
/// ```
/// use hue_gen::count::{parse_count, CountError};
///
/// assert_eq!(parse_count(" 8 "), Ok(8));
/// assert!(matches!(parse_count("eight"), Err(CountError::InvalidFormat { .. })));
/// assert_eq!(parse_count("0"), Err(CountError::OutOfRange { value: 0 }));
/// ```
pub fn parse_count(input: &str) -> Result<usize, CountError> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(v) => v,
        Err(_) if is_integer_literal(trimmed) => {
            let value = if trimmed.starts_with('-') { i64::MIN } else { i64::MAX };
            return Err(CountError::OutOfRange { value });
        }
        Err(_) => {
            return Err(CountError::InvalidFormat {
                input: input.to_owned(),
            });
        }
    };

    usize::try_from(value)
        .ok()
        .filter(|n| COUNT_RANGE.contains(n))
        .ok_or(CountError::OutOfRange { value })
}

/// Optional sign followed by at least one ASCII digit, nothing else.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Accepted ────────────────────────────────────────────────

    #[test]
    fn plain_number() {
        assert_eq!(parse_count("8"), Ok(8));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("100"), Ok(100));
    }

    #[test]
    fn whitespace_and_plus_sign() {
        assert_eq!(parse_count("  42\t"), Ok(42));
        assert_eq!(parse_count("+5"), Ok(5));
        assert_eq!(parse_count("007"), Ok(7));
    }

    // ── Malformed ───────────────────────────────────────────────

    #[test]
    fn letters_are_invalid() {
        assert_eq!(
            parse_count("abc"),
            Err(CountError::InvalidFormat { input: "abc".into() })
        );
    }

    #[test]
    fn empty_is_invalid() {
        assert!(matches!(parse_count(""), Err(CountError::InvalidFormat { .. })));
        assert!(matches!(parse_count("   "), Err(CountError::InvalidFormat { .. })));
    }

    #[test]
    fn decimals_are_invalid() {
        assert!(matches!(parse_count("3.5"), Err(CountError::InvalidFormat { .. })));
        assert!(matches!(parse_count("1e3"), Err(CountError::InvalidFormat { .. })));
        assert!(matches!(parse_count("-"), Err(CountError::InvalidFormat { .. })));
    }

    // ── Out of range ────────────────────────────────────────────

    #[test]
    fn zero_is_too_few() {
        let err = parse_count("0").unwrap_err();
        assert_eq!(err, CountError::OutOfRange { value: 0 });
        assert!(err.is_too_few());
    }

    #[test]
    fn negative_is_too_few() {
        assert_eq!(parse_count("-3"), Err(CountError::OutOfRange { value: -3 }));
    }

    #[test]
    fn above_max_is_too_many() {
        let err = parse_count("101").unwrap_err();
        assert_eq!(err, CountError::OutOfRange { value: 101 });
        assert!(!err.is_too_few());
    }

    #[test]
    fn huge_integers_are_out_of_range_not_malformed() {
        let err = parse_count("99999999999999999999999").unwrap_err();
        assert!(err.is_out_of_range());
        assert!(!err.is_too_few());

        let err = parse_count("-99999999999999999999999").unwrap_err();
        assert!(err.is_too_few());
    }

    // ── Messages ────────────────────────────────────────────────

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            parse_count("x").unwrap_err().to_string(),
            "Please enter a valid integer"
        );
        assert_eq!(
            parse_count("0").unwrap_err().to_string(),
            "Number of colors must be at least 1"
        );
        assert_eq!(
            parse_count("500").unwrap_err().to_string(),
            "Number of colors cannot exceed 100"
        );
    }

    #[test]
    fn invalid_format_is_not_out_of_range() {
        assert!(!parse_count("x").unwrap_err().is_out_of_range());
    }
}
