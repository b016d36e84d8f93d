use crate::error::DurationError;
use crate::units;

/// One `<magnitude><unit>` pair, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub magnitude: &'a str,
    pub unit: &'a str,
}

/// Splits an unsigned, normalized duration string into tokens.
///
/// The text between two recognized unit suffixes becomes the magnitude of the
/// second one. Text after the last recognized suffix is returned as a final
/// token whose unit is whatever follows its numeric prefix, so the parser
/// reports it instead of dropping it. Magnitudes are not validated here.
pub(crate) fn tokenize(s: &str) -> Result<Vec<Token<'_>>, DurationError> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < s.len() {
        let rest = &s[pos..];
        match units::match_prefix(rest) {
            Some(unit) => {
                let end = pos + unit.suffix.len();
                tokens.push(Token {
                    magnitude: &s[start..pos],
                    unit: &s[pos..end],
                });
                pos = end;
                start = end;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    if tokens.is_empty() {
        return Err(DurationError::InvalidFormat(s.to_string()));
    }

    if start < s.len() {
        let tail = &s[start..];
        let split = tail
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(tail.len());
        tokens.push(Token {
            magnitude: &tail[..split],
            unit: &tail[split..],
        });
    }

    Ok(tokens)
}
