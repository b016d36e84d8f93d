use crate::error::DurationError;
use crate::normalize::normalize;
use crate::tokenize::{tokenize, Token};
use crate::units;

/// Fixed-point resolution of the running total: 10^-9 ns per step.
const STEPS_PER_NANO: u128 = 1_000_000_000;
/// Fraction digits used exactly; later digits only mark the total inexact.
const MAX_FRACTION_DIGITS: usize = 24;
/// Resolution of the part of a step kept below `steps`: 10^-15 step.
/// Enough for 24 fraction digits of a nanosecond.
const SUB_STEPS_PER_STEP: u128 = 1_000_000_000_000_000;

/// Parses a duration string into a signed count of nanoseconds.
///
/// A duration string is a possibly signed sequence of decimal numbers, each
/// with an optional fraction and a unit suffix, such as `"300ms"`, `"-1.5h"`
/// or `"2h45m"`. A trailing number without a unit is read as seconds. The
/// same unit may appear more than once; all parts are summed.
///
/// The result is rounded to the nearest nanosecond, ties to even.
///
/// # Errors
/// - [`DurationError::InvalidFormat`] if the input has no digits or no unit
/// - [`DurationError::InvalidValue`] for a malformed number such as `17.`
/// - [`DurationError::UnknownUnit`] for an unrecognized suffix
/// - [`DurationError::OutOfRange`] if the result does not fit in an `i64`
pub fn parse(input: &str) -> Result<i64, DurationError> {
    let normalized = normalize(input)?;

    let (negative, unsigned) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };

    let mut total = Total::default();
    for token in tokenize(unsigned)? {
        total.add(&token, input)?;
    }

    let nanos = i128::try_from(total.round())
        .map_err(|_| DurationError::OutOfRange(input.trim().to_string()))?;
    let nanos = if negative { -nanos } else { nanos };
    i64::try_from(nanos).map_err(|_| DurationError::OutOfRange(input.trim().to_string()))
}

/// Running sum of token values in fixed-point steps.
#[derive(Debug, Default)]
struct Total {
    steps: u128,
    // Always below SUB_STEPS_PER_STEP.
    sub_steps: u128,
    // Set when fraction digits past MAX_FRACTION_DIGITS were discarded.
    inexact: bool,
}

impl Total {
    fn add(&mut self, token: &Token<'_>, input: &str) -> Result<(), DurationError> {
        let (int_part, frac_part) = split_magnitude(token.magnitude)
            .ok_or_else(|| DurationError::InvalidValue(token.magnitude.to_string()))?;
        let unit = units::lookup(token.unit)
            .ok_or_else(|| DurationError::UnknownUnit(token.unit.to_string()))?;
        let out_of_range = || DurationError::OutOfRange(input.trim().to_string());

        let scale = u128::from(unit.scale);
        let int_steps = digits_value(int_part)
            .and_then(|v| v.checked_mul(scale))
            .and_then(|v| v.checked_mul(STEPS_PER_NANO))
            .ok_or_else(out_of_range)?;

        let (exact, rest) = frac_part.split_at(frac_part.len().min(MAX_FRACTION_DIGITS));
        if rest.bytes().any(|b| b != b'0') {
            self.inexact = true;
        }
        // Cannot overflow: exact < 10^24 and scale < 10^14.
        let frac = digits_value(exact).unwrap_or(0) * scale;
        let (frac_steps, frac_sub_steps) = match exact.len() {
            n if n <= 9 => (frac * 10u128.pow(9 - n as u32), 0),
            n => {
                // div <= 10^15 since n <= 24.
                let div = 10u128.pow(n as u32 - 9);
                (frac / div, (frac % div) * (SUB_STEPS_PER_STEP / div))
            }
        };

        let sub_steps = self.sub_steps + frac_sub_steps;
        self.sub_steps = sub_steps % SUB_STEPS_PER_STEP;

        self.steps = self
            .steps
            .checked_add(int_steps)
            .and_then(|v| v.checked_add(frac_steps))
            .and_then(|v| v.checked_add(sub_steps / SUB_STEPS_PER_STEP))
            .ok_or_else(out_of_range)?;
        Ok(())
    }

    /// Rounds to whole nanoseconds, ties to even.
    fn round(&self) -> u128 {
        let nanos = self.steps / STEPS_PER_NANO;
        let rem = self.steps % STEPS_PER_NANO;
        let half = STEPS_PER_NANO / 2;
        let above_half = self.sub_steps != 0 || self.inexact;
        let round_up = rem > half || (rem == half && (above_half || nanos % 2 == 1));
        if round_up { nanos + 1 } else { nanos }
    }
}

/// Splits a magnitude into integer and fraction digits.
///
/// Accepts `123`, `1.5` and `.5`; rejects an empty magnitude, a lone or
/// trailing `.`, repeated `.` and anything that is not an ASCII digit.
fn split_magnitude(magnitude: &str) -> Option<(&str, &str)> {
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) if !frac_part.is_empty() => (int_part, frac_part),
        Some(_) => return None,
        None if !magnitude.is_empty() => (magnitude, ""),
        None => return None,
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if all_digits(int_part) && all_digits(frac_part) {
        Some((int_part, frac_part))
    } else {
        None
    }
}

/// Value of a run of ASCII digits; `None` on overflow. Empty is zero.
fn digits_value(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_magnitude() {
        assert_eq!(split_magnitude("1"), Some(("1", "")));
        assert_eq!(split_magnitude("1.5"), Some(("1", "5")));
        assert_eq!(split_magnitude(".5"), Some(("", "5")));
        assert_eq!(split_magnitude("01.001"), Some(("01", "001")));

        for bad in ["", ".", "1.", "1.2.3", "1.0.10", " 1", "-1", "1a", "١"] {
            assert_eq!(split_magnitude(bad), None, "magnitude {:?}", bad);
        }
    }

    #[test]
    fn test_digits_value() {
        assert_eq!(digits_value(""), Some(0));
        assert_eq!(digits_value("0042"), Some(42));
        assert_eq!(digits_value(&"9".repeat(40)), None);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(parse(".5ns").unwrap(), 0);
        assert_eq!(parse("1.5ns").unwrap(), 2);
        assert_eq!(parse("2.5ns").unwrap(), 2);
        assert_eq!(parse("-2.5ns").unwrap(), -2);
        assert_eq!(parse(".4999ns").unwrap(), 0);
        assert_eq!(parse(".5001ns").unwrap(), 1);
    }

    #[test]
    fn test_digits_beyond_resolution_break_ties() {
        // 0.5ns plus something far below the fixed-point resolution.
        let input = format!(".5{}1ns", "0".repeat(30));
        assert_eq!(parse(&input).unwrap(), 1);

        let input = format!("2.5{}ns", "0".repeat(30));
        assert_eq!(parse(&input).unwrap(), 2);
    }

    #[test]
    fn test_fraction_remainders_add_up_across_tokens() {
        // 0.2499999999999ns + 0.2500000009ns = 0.5000000008999ns
        assert_eq!(parse(".2499999999999ns.2500000009ns").unwrap(), 1);
        assert_eq!(parse(".5000000008999ns").unwrap(), 1);

        // Remainders carry into a whole step: 3 x 0.3333333333ns = 0.9999999999ns
        assert_eq!(parse(".3333333333ns.3333333333ns.3333333333ns").unwrap(), 1);

        // 0.4999999999ns + 0.0000000001ns is exactly half, ties to even.
        assert_eq!(parse(".4999999999ns.0000000001ns").unwrap(), 0);
        assert_eq!(parse("1.4999999999ns.0000000001ns").unwrap(), 2);
    }

    #[test]
    fn test_long_fractions_of_large_units() {
        // 1/3 day, truncated to 24 digits, rounds to the nearest ns.
        let input = format!(".{}d", "3".repeat(30));
        assert_eq!(parse(&input).unwrap(), 28_800_000_000_000);
    }

    #[test]
    fn test_i64_limits() {
        assert_eq!(parse("9223372036854775807ns").unwrap(), i64::MAX);
        assert_eq!(parse("-9223372036854775808ns").unwrap(), i64::MIN);
        assert!(matches!(
            parse("9223372036854775808ns"),
            Err(DurationError::OutOfRange(_))
        ));
        assert!(matches!(
            parse("106752d"),
            Err(DurationError::OutOfRange(_))
        ));
        assert!(matches!(
            parse(&format!("{}d", "9".repeat(50))),
            Err(DurationError::OutOfRange(_))
        ));
    }
}
