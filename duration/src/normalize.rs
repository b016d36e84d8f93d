use crate::error::DurationError;

/// Unit assumed for a trailing number without a suffix.
const DEFAULT_SUFFIX: &str = "s";

/// Prepares raw input for tokenizing.
///
/// Trims whitespace, drops a leading `+` and appends the default unit when
/// the input ends in a digit. A leading `-` is left for the parser.
pub(crate) fn normalize(input: &str) -> Result<String, DurationError> {
    let s = input.trim();

    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return Err(DurationError::InvalidFormat(s.to_string()));
    }

    let s = s.strip_prefix('+').unwrap_or(s);

    let mut out = String::with_capacity(s.len() + DEFAULT_SUFFIX.len());
    out.push_str(s);
    if s.ends_with(|c: char| c.is_ascii_digit()) {
        out.push_str(DEFAULT_SUFFIX);
    }
    Ok(out)
}
