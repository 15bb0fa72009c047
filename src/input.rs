//! Parsing drill input from the command line or config.

use crate::error::{DrillError, DrillResult};

/// Parse a sequence of integers.
///
/// Accepts comma and/or whitespace separators and an optional pair of
/// surrounding brackets, so `1,2,3`, `1 2 3` and `[1, 2, 3]` are equivalent.
/// An empty string yields an empty sequence.
pub fn parse_sequence(text: &str) -> DrillResult<Vec<i64>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|source| DrillError::InvalidElement {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert a signed rotation offset into an index offset.
///
/// Negative offsets are rejected rather than reinterpreted as left rotations.
pub fn normalize_offset(offset: i64) -> DrillResult<usize> {
    usize::try_from(offset).map_err(|_| DrillError::NegativeOffset(offset))
}
