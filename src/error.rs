use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Master secret or domain was empty; names the offending field.
    InvalidInput(&'static str),
    /// Alphabet has fewer than 2 distinct symbols; carries the distinct count.
    InvalidAlphabet(usize),
    /// Requested output length was not a positive integer.
    InvalidLength(usize),
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeriveError::InvalidInput(field) => write!(f, "{field} must not be empty"),
            DeriveError::InvalidAlphabet(distinct) => {
                write!(
                    f,
                    "alphabet needs at least 2 distinct symbols, got {distinct}"
                )
            }
            DeriveError::InvalidLength(len) => {
                write!(f, "password length must be positive, got {len}")
            }
        }
    }
}

impl std::error::Error for DeriveError {}
