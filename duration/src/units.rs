//! Duration units and their scales in nanoseconds.

use once_cell::sync::Lazy;

pub const NANOSECOND: u64 = 1;
pub const MICROSECOND: u64 = 1000 * NANOSECOND;
pub const MILLISECOND: u64 = 1000 * MICROSECOND;
pub const SECOND: u64 = 1000 * MILLISECOND;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;

/// A unit suffix and its length in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub suffix: &'static str,
    pub scale: u64,
}

const fn unit(suffix: &'static str, scale: u64) -> Unit {
    Unit { suffix, scale }
}

/// All accepted units, largest first.
///
/// Where several spellings share a scale, the first one is the canonical
/// spelling used when formatting.
pub static UNITS: [Unit; 8] = [
    unit("d", DAY),
    unit("h", HOUR),
    unit("m", MINUTE),
    unit("s", SECOND),
    unit("ms", MILLISECOND),
    unit("µs", MICROSECOND), // U+00B5 MICRO SIGN
    unit("us", MICROSECOND),
    unit("ns", NANOSECOND),
];

// Longer suffixes must be tried first so "ms" is never read as "m" + "s".
static MATCH_ORDER: Lazy<Vec<&'static Unit>> = Lazy::new(|| {
    let mut units: Vec<&'static Unit> = UNITS.iter().collect();
    units.sort_by(|a, b| b.suffix.len().cmp(&a.suffix.len()));
    units
});

/// Returns the unit spelled exactly as `suffix`.
pub fn lookup(suffix: &str) -> Option<&'static Unit> {
    UNITS.iter().find(|u| u.suffix == suffix)
}

/// Returns the longest unit suffix that `s` starts with.
pub fn match_prefix(s: &str) -> Option<&'static Unit> {
    MATCH_ORDER.iter().copied().find(|u| s.starts_with(u.suffix))
}

/// Returns the canonical suffix for a scale in the table.
pub(crate) fn canonical_suffix(scale: u64) -> &'static str {
    UNITS
        .iter()
        .find(|u| u.scale == scale)
        .map(|u| u.suffix)
        .unwrap_or("ns")
}
