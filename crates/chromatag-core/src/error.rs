//! Error type for color parsing.

/// A color string did not decode to exactly three hex byte pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected 6 hex digits, found {found} characters")]
    Length { found: usize },

    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
