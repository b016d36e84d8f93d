use thiserror::Error;

/// Error returned when a duration cannot be parsed or converted.
///
/// Every variant carries the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input has no digits, or no `<number><unit>` pair could be found.
    #[error("invalid duration {0:?}")]
    InvalidFormat(String),

    /// A number is not of the form `123`, `1.5` or `.5`.
    #[error("invalid value {0:?} in duration")]
    InvalidValue(String),

    /// A unit is not one of `d`, `h`, `m`, `s`, `ms`, `us`, `µs`, `ns`.
    #[error("unknown unit {0:?} in duration")]
    UnknownUnit(String),

    /// The value does not fit in a signed 64-bit nanosecond count.
    #[error("duration {0:?} out of range")]
    OutOfRange(String),
}
