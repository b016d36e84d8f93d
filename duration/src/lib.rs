//! Human-readable duration strings.
//!
//! This crate converts between duration strings such as `"300ms"`, `"-1.5h"`
//! or `"2h45m"` and a signed count of nanoseconds:
//!
//! - [`parse`]: duration string to nanoseconds
//! - [`format`]: nanoseconds to the canonical duration string
//! - [`Duration`]: a nanosecond value that serializes to the canonical string
//!
//! Valid units are `d`, `h`, `m`, `s`, `ms`, `us` (or `µs`) and `ns`. A number
//! without a unit is read as seconds.
//!
//! # Example
//!
//! ```rust
//! use giztoy_duration::{format, parse, Duration};
//!
//! assert_eq!(parse("2h45m").unwrap(), 9_900_000_000_000);
//! assert_eq!(parse("-1.5h").unwrap(), -5_400_000_000_000);
//! assert_eq!(format(-60_000_000_000), "-1m0s");
//!
//! // Duration serializes to its canonical string
//! let d: Duration = "90s".parse().unwrap();
//! let json = serde_json::to_string(&d).unwrap();
//! // => "\"1m30s\""
//! ```

mod duration;
mod error;
mod format;
mod normalize;
mod parse;
mod tokenize;
pub mod units;

pub use duration::Duration;
pub use error::DurationError;
pub use format::{format, write_duration};
pub use parse::parse;
