use std::fmt::{self, Write};

use crate::duration::Duration;
use crate::units::{self, MICROSECOND, MILLISECOND, SECOND, UNITS};

/// Formats a signed nanosecond count as a canonical duration string.
///
/// Durations of a second or more look like `"3d2h3m0.5s"`: leading zero units
/// are omitted and later zero units are kept as placeholders. Shorter
/// durations use the largest of `ms`, `µs` or `ns` that keeps the leading digit
/// non-zero. Zero formats as `"0s"`.
///
/// The result always parses back to the same value.
pub fn format(nanos: i64) -> String {
    Duration::from_nanos(nanos).to_string()
}

/// Writes the canonical form of `nanos` to `w`. See [`format`].
pub fn write_duration<W: Write>(w: &mut W, nanos: i64) -> fmt::Result {
    if nanos == 0 {
        return w.write_str("0s");
    }
    if nanos < 0 {
        w.write_char('-')?;
    }

    let abs = nanos.unsigned_abs();
    if abs < SECOND {
        write_small(w, abs)
    } else {
        write_large(w, abs)
    }
}

fn write_small<W: Write>(w: &mut W, nanos: u64) -> fmt::Result {
    if nanos < MICROSECOND {
        write!(w, "{}ns", nanos)
    } else if nanos < MILLISECOND {
        write_decimal(w, nanos, MICROSECOND, 3)?;
        w.write_str(units::canonical_suffix(MICROSECOND))
    } else {
        write_decimal(w, nanos, MILLISECOND, 6)?;
        w.write_str(units::canonical_suffix(MILLISECOND))
    }
}

fn write_large<W: Write>(w: &mut W, nanos: u64) -> fmt::Result {
    let mut rem = nanos;
    let mut started = false;

    for unit in UNITS.iter().filter(|u| u.scale > SECOND) {
        if rem >= unit.scale {
            write!(w, "{}{}", rem / unit.scale, unit.suffix)?;
            rem %= unit.scale;
            started = true;
        } else if started {
            write!(w, "0{}", unit.suffix)?;
        }
    }

    write_decimal(w, rem, SECOND, 9)?;
    w.write_str(units::canonical_suffix(SECOND))
}

/// Writes `value / scale` with up to `digits` fraction digits, dropping
/// trailing zeros and a bare decimal point. `scale` must be `10^digits`.
fn write_decimal<W: Write>(w: &mut W, value: u64, scale: u64, digits: usize) -> fmt::Result {
    write!(w, "{}", value / scale)?;
    let frac = value % scale;
    if frac == 0 {
        return Ok(());
    }
    let frac = format!("{:0width$}", frac, width = digits);
    write!(w, ".{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_decimal() {
        let mut s = String::new();
        write_decimal(&mut s, 1_500, 1_000, 3).unwrap();
        assert_eq!(s, "1.5");

        let mut s = String::new();
        write_decimal(&mut s, 100_000, 1_000, 3).unwrap();
        assert_eq!(s, "100");

        let mut s = String::new();
        write_decimal(&mut s, 1_000_001, 1_000_000, 6).unwrap();
        assert_eq!(s, "1.000001");
    }

    #[test]
    fn test_zero_placeholders() {
        assert_eq!(format(86_400_000_000_000 + 5 * 60_000_000_000), "1d0h5m0s");
        assert_eq!(format(3_600_000_000_000 + 500_000_000), "1h0m0.5s");
        assert_eq!(format(61_000_000_000), "1m1s");
    }

    #[test]
    fn test_i64_limits() {
        assert_eq!(format(i64::MAX), "106751d23h47m16.854775807s");
        assert_eq!(format(i64::MIN), "-106751d23h47m16.854775808s");
    }
}
