//! Error types for the segments crate.

use thiserror::Error;

/// Result type for segment construction.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Syntax errors raised while constructing a segment.
///
/// These are recoverable, user-input errors: callers (parsers, message
/// builders) are expected to catch them and attach interchange position
/// context before surfacing them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The candidate tag was empty.
    #[error("The tag of a segment must not be empty.")]
    EmptyTag,

    /// The candidate tag was not a plain text value.
    #[error("The tag name of a segment must be a string, but is a {type_name}: {value}")]
    TagNotText {
        /// Shape of the value that was supplied instead.
        type_name: String,
        /// Textual rendering of the offending value.
        value: String,
    },

    /// The candidate tag contained a non-alphanumeric character.
    #[error("Tag '{tag}': A tag name must only contain alphanumeric characters.")]
    TagNotAlphanumeric {
        /// The offending tag.
        tag: String,
    },
}

impl SyntaxError {
    /// Create a tag-not-text error.
    pub fn tag_not_text(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::TagNotText {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Create a tag-not-alphanumeric error.
    pub fn tag_not_alphanumeric(tag: impl Into<String>) -> Self {
        Self::TagNotAlphanumeric { tag: tag.into() }
    }
}
