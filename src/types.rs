//! Core types for afinn
//!
//! This module defines the language selector, the scorer configuration,
//! and the per-match output record.

use crate::errors::{AfinnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Language
// ============================================================================

/// Languages with a bundled sentiment lexicon.
///
/// `Emoticons` is not a natural language but selects the emoticon lexicon,
/// which shares the same file format as the word lexicons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    En,
    /// Danish
    Da,
    /// Finnish
    Fi,
    /// French
    Fr,
    /// Polish
    Pl,
    /// Swedish
    Sv,
    /// Turkish
    Tr,
    /// Emoticon table
    Emoticons,
}

impl Language {
    /// All supported languages, in code order
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Da,
        Language::Fi,
        Language::Fr,
        Language::Pl,
        Language::Sv,
        Language::Tr,
        Language::Emoticons,
    ];

    /// Resolve a language code such as `"en"` or `"da"`.
    ///
    /// Unrecognized codes are a configuration error, surfaced as
    /// [`AfinnError::UnknownLanguage`] instead of failing later during
    /// lexicon lookup.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "en" => Ok(Language::En),
            "da" => Ok(Language::Da),
            "fi" => Ok(Language::Fi),
            "fr" => Ok(Language::Fr),
            "pl" => Ok(Language::Pl),
            "sv" => Ok(Language::Sv),
            "tr" => Ok(Language::Tr),
            "emoticons" => Ok(Language::Emoticons),
            _ => Err(AfinnError::unknown_language(code)),
        }
    }

    /// The language code used in construction and in lexicon file names
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Da => "da",
            Language::Fi => "fi",
            Language::Fr => "fr",
            Language::Pl => "pl",
            Language::Sv => "sv",
            Language::Tr => "tr",
            Language::Emoticons => "emoticons",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl FromStr for Language {
    type Err = AfinnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the [`Afinn`](crate::scorer::Afinn) scorer.
///
/// All fields are fixed at construction; the scorer holds no mutable state
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AfinnConfig {
    /// Which bundled lexicon to load
    pub language: Language,
    /// Include emoticons in the matched token set.
    ///
    /// Accepted for forward compatibility with combined word + emoticon
    /// matching; currently has no effect on scoring. Select
    /// [`Language::Emoticons`] to score against the emoticon table alone.
    pub emoticons: bool,
    /// Require word boundaries around matches.
    ///
    /// Accepted for forward compatibility; currently has no effect, and
    /// matching remains a literal substring search.
    pub word_boundary: bool,
}

impl Default for AfinnConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            emoticons: false,
            word_boundary: false,
        }
    }
}

impl AfinnConfig {
    /// Create a default (English) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lexicon language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the emoticons flag (currently inert, see field docs)
    pub fn with_emoticons(mut self, emoticons: bool) -> Self {
        self.emoticons = emoticons;
        self
    }

    /// Set the word-boundary flag (currently inert, see field docs)
    pub fn with_word_boundary(mut self, word_boundary: bool) -> Self {
        self.word_boundary = word_boundary;
        self
    }
}

// ============================================================================
// Scored word
// ============================================================================

/// One matched phrase occurrence with its lexicon score.
///
/// The same phrase appears once per occurrence in the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    /// The matched phrase, as it appears in the lexicon
    pub word: String,
    /// The phrase's sentiment score
    pub score: f64,
}

impl ScoredWord {
    /// Create a new scored word
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}
