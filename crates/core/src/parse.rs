//! Textual input to integer sequences.

use crate::error::ParseError;

/// Parse each token as a decimal `i64` after trimming surrounding whitespace.
///
/// Stops at the first token that does not parse; its 1-based position is
/// reported in the error.
pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<i64>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(idx, tok)| parse_one(idx + 1, tok.as_ref()))
        .collect()
}

/// Parse whitespace-separated integers from a block of text.
///
/// Blank lines are skipped, as are lines whose first non-space character is `#`.
pub fn parse_text(text: &str) -> Result<Vec<i64>, ParseError> {
    let tokens = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_ascii_whitespace);
    parse_tokens(tokens)
}

fn parse_one(position: usize, raw: &str) -> Result<i64, ParseError> {
    let token = raw.trim();
    token
        .parse::<i64>()
        .map_err(|e| ParseError::InvalidInteger {
            position,
            token: token.to_string(),
            reason: e.to_string(),
        })
}
