//! Error types shared by the parser and the naming validator.

use std::fmt;
use thiserror::Error;

/// Location and description of a syntax failure in selector source text.
///
/// # Examples
/// ```
/// use label_selector::SyntaxErrorInfo;
/// let info = SyntaxErrorInfo::new("unterminated value list", 9);
/// assert_eq!(info.position, 9);
/// assert_eq!(info.to_string(), "unterminated value list at byte 9 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Short description of what the parser expected or rejected.
    pub message: &'static str,
    /// Byte offset of the failure within the parsed text.
    pub position: usize,
}

impl SyntaxErrorInfo {
    /// Create a new syntax error description.
    #[must_use]
    pub const fn new(message: &'static str, position: usize) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for SyntaxErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {} (zero-based)", self.message, self.position)
    }
}

/// Reasons a key or value fails the naming grammar.
///
/// Lengths and positions count Unicode codepoints, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The key name (or the whole key) is empty.
    #[error("name is empty")]
    Empty,
    /// The name exceeds its codepoint limit.
    #[error("name is {length} characters long; the limit is {max}")]
    TooLong {
        /// Observed length in codepoints.
        length: usize,
        /// Permitted maximum.
        max: usize,
    },
    /// A `/` is present but nothing precedes it.
    #[error("key prefix is empty")]
    EmptyPrefix,
    /// The DNS-style prefix exceeds its codepoint limit.
    #[error("key prefix is {length} characters long; the limit is {max}")]
    PrefixTooLong {
        /// Observed length in codepoints.
        length: usize,
        /// Permitted maximum.
        max: usize,
    },
    /// A codepoint is not allowed where it appears.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected codepoint.
        character: char,
        /// Zero-based codepoint index within the key or value.
        position: usize,
    },
}

/// Errors surfaced while parsing or validating a selector.
///
/// # Examples
/// ```
/// use label_selector::{SelectorError, parse};
/// assert_eq!(parse("   "), Err(SelectorError::EmptySelector));
/// assert!(matches!(parse("x<a"), Err(SelectorError::InvalidOperator(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The input was empty or contained only whitespace.
    #[error("selector is empty")]
    EmptySelector,
    /// An operator token was missing, unknown or malformed.
    #[error("invalid operator: {0}")]
    InvalidOperator(SyntaxErrorInfo),
    /// The selector is structurally malformed.
    #[error("invalid selector: {0}")]
    InvalidSelector(SyntaxErrorInfo),
    /// A key or value does not satisfy the naming grammar.
    #[error("invalid name `{name}`: {reason}")]
    NameValidation {
        /// The offending key or value.
        name: String,
        /// Why it was rejected.
        reason: NameError,
    },
}

pub(crate) const fn invalid_operator(message: &'static str, position: usize) -> SelectorError {
    SelectorError::InvalidOperator(SyntaxErrorInfo::new(message, position))
}

pub(crate) const fn invalid_selector(message: &'static str, position: usize) -> SelectorError {
    SelectorError::InvalidSelector(SyntaxErrorInfo::new(message, position))
}

pub(crate) fn name_error(name: &str, reason: NameError) -> SelectorError {
    SelectorError::NameValidation {
        name: name.to_owned(),
        reason,
    }
}
