//! Conversion between backend integer IDs and frontend string IDs.
//!
//! The backend keys every record with an integer. The dashboard model keeps
//! every ID as a string. Stringification is total; parsing back is total as
//! well but returns a tagged result instead of a sentinel value.

use thiserror::Error;

/// Error type for string to integer ID conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("ID is empty")]
    Empty,
    #[error("ID '{0}' is not a base-10 integer")]
    NotNumeric(String),
    #[error("ID '{0}' is out of range")]
    OutOfRange(String),
}

/// Converts a backend ID into its frontend representation.
pub fn id_to_string(id: i64) -> String {
    id.to_string()
}

/// Parses a frontend ID back into the backend integer.
///
/// Surrounding whitespace is ignored. Signs, decimal points and trailing
/// garbage (`"12abc"`) are rejected rather than truncated.
pub fn parse_id(raw: &str) -> Result<i64, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty);
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::NotNumeric(raw.to_string()));
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| IdError::OutOfRange(raw.to_string()))
}

/// Parses an optional frontend ID, keeping absence as absence.
pub fn parse_optional_id(raw: Option<&str>) -> Result<Option<i64>, IdError> {
    raw.map(parse_id).transpose()
}

/// Parses a list of frontend IDs, failing on the first invalid entry.
pub fn parse_ids<S: AsRef<str>>(raw: &[S]) -> Result<Vec<i64>, IdError> {
    raw.iter().map(|id| parse_id(id.as_ref())).collect()
}
