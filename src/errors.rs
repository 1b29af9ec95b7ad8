//! Error types for afinn
//!
//! This module defines the error types used throughout the library.
//! The scoring path itself is infallible; errors can only arise at
//! construction time.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AfinnError>;

/// Main error type for afinn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AfinnError {
    /// The requested language has no bundled lexicon
    #[error("Unknown language code: {code:?} (expected one of: en, da, fi, fr, pl, sv, tr, emoticons)")]
    UnknownLanguage { code: String },

    /// The phrase alternation failed to compile
    ///
    /// Phrases are regex-escaped before compilation, so this should not
    /// occur with any lexicon the loader produces; it is surfaced rather
    /// than unwrapped so a hand-built matcher can report it.
    #[error("Invalid match pattern: {message}")]
    InvalidPattern { message: String },
}

impl AfinnError {
    /// Create an unknown language error
    pub fn unknown_language(code: impl Into<String>) -> Self {
        Self::UnknownLanguage { code: code.into() }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            message: message.into(),
        }
    }
}

impl From<regex::Error> for AfinnError {
    fn from(err: regex::Error) -> Self {
        Self::invalid_pattern(err.to_string())
    }
}
