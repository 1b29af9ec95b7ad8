//! Phrase matching
//!
//! Builds a single alternation over every lexicon phrase and extracts all
//! non-overlapping occurrences from input text. Longer phrases are placed
//! first in the alternation so a multi-word idiom ("very bad") wins over a
//! sub-phrase ("bad") at the same position; the regex crate's leftmost-first
//! alternation semantics make the ordering authoritative.

use crate::errors::Result;
use regex::Regex;

/// A compiled matcher over a fixed set of phrases.
///
/// Matching is a literal substring search: phrases are regex-escaped, so
/// punctuation-heavy entries (emoticons like `:-)`) match exactly. The
/// pattern is case-sensitive; callers normalize case before matching.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    /// `None` when the phrase set is empty. An empty alternation would
    /// match the empty string at every position, so it is never compiled.
    pattern: Option<Regex>,
    /// Collapses a run of whitespace characters
    whitespace: Regex,
}

impl PhraseMatcher {
    /// Build a matcher from a set of phrases.
    ///
    /// Phrases are sorted by descending character count (ties broken
    /// lexicographically so the compiled pattern is deterministic) and
    /// escaped before being joined into one alternation.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        phrases.sort_unstable_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let pattern = if phrases.is_empty() {
            None
        } else {
            let escaped: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
            Some(Regex::new(&escaped.join("|"))?)
        };

        Ok(Self {
            pattern,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Extract all phrase occurrences from `text`, left to right.
    ///
    /// When `clean_whitespace` is set, only the first whitespace run in the
    /// text is collapsed to a single space before matching. This mirrors
    /// the reference implementation's non-global replace; collapsing every
    /// run would change which multi-word phrases match.
    pub fn extract(&self, text: &str, clean_whitespace: bool) -> Vec<String> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        let text = if clean_whitespace {
            self.whitespace.replace(text, " ")
        } else {
            std::borrow::Cow::Borrowed(text)
        };

        pattern
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Whether the matcher has any phrases at all
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }
}
