//! Sentiment scoring
//!
//! Ties the loaded lexicon and the compiled phrase matcher together. A
//! scorer owns both exclusively and is read-only after construction, so
//! independent instances can be used from separate threads without
//! coordination.

use crate::errors::Result;
use crate::lexicon::{self, Lexicon};
use crate::matcher::PhraseMatcher;
use crate::types::{AfinnConfig, Language, ScoredWord};

/// AFINN sentiment scorer for one language.
///
/// The lexicon is parsed once and the match pattern compiled once at
/// construction; scoring calls allocate only the per-call match list.
///
/// # Examples
///
/// ```
/// use afinn::{Afinn, Language};
///
/// let afinn = Afinn::default();
/// assert_eq!(afinn.score("bad"), -3.0);
///
/// let danish = Afinn::with_language(Language::Da).unwrap();
/// assert!(danish.score("DÅRLIG!!!") < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Afinn {
    config: AfinnConfig,
    lexicon: Lexicon,
    matcher: PhraseMatcher,
}

impl Afinn {
    /// Create a scorer from a configuration.
    ///
    /// Loads the bundled lexicon for the configured language and compiles
    /// the phrase alternation.
    pub fn new(config: AfinnConfig) -> Result<Self> {
        let lexicon = lexicon::load(config.language);
        let matcher = PhraseMatcher::new(lexicon.keys())?;

        Ok(Self {
            config,
            lexicon,
            matcher,
        })
    }

    /// Create a scorer for a language with otherwise default configuration
    pub fn with_language(language: Language) -> Result<Self> {
        Self::new(AfinnConfig::default().with_language(language))
    }

    /// The configuration this scorer was built with
    pub fn config(&self) -> &AfinnConfig {
        &self.config
    }

    /// The language this scorer matches against
    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Number of phrases in the loaded lexicon
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Extract the lexicon phrases present in `text`, left to right.
    ///
    /// Matching is case-sensitive at this layer; [`scores`](Self::scores)
    /// lowercases its input first. `clean_whitespace` collapses only the
    /// first whitespace run in the text (see [`PhraseMatcher::extract`]).
    pub fn extract_matching_words(&self, text: &str, clean_whitespace: bool) -> Vec<String> {
        self.matcher.extract(text, clean_whitespace)
    }

    /// Per-occurrence sentiment scores for `text`, in match order.
    ///
    /// The input is lowercased before matching, so scoring is
    /// case-insensitive. Every matched phrase is a lexicon key, so the
    /// score lookup cannot miss.
    pub fn scores(&self, text: &str) -> Vec<ScoredWord> {
        let text = text.to_lowercase();
        self.extract_matching_words(&text, true)
            .into_iter()
            .map(|word| {
                let score = self.lexicon.get(&word).copied().unwrap_or_default();
                ScoredWord { word, score }
            })
            .collect()
    }

    /// Aggregate sentiment score for `text`.
    ///
    /// The sum of all per-occurrence scores; `0.0` when the text is empty
    /// or contains no lexicon phrase.
    pub fn score(&self, text: &str) -> f64 {
        self.scores(text).iter().map(|s| s.score).sum()
    }
}

impl Default for Afinn {
    /// An English scorer. The English lexicon is bundled and its pattern
    /// compiles from escaped literals, so construction cannot fail.
    fn default() -> Self {
        Self::new(AfinnConfig::default()).expect("bundled English lexicon compiles")
    }
}
