//! # afinn
//!
//! AFINN lexicon-based sentiment scoring for multiple languages.
//!
//! This library estimates the sentiment of a piece of text by summing the
//! scores of recognized words and phrases from a bundled, language-specific
//! AFINN word list. No model, no network, no runtime I/O: the lexicons are
//! compiled into the binary and every scoring call is a bounded,
//! deterministic computation.
//!
//! ## Features
//!
//! - **Multi-language**: English, Danish, Finnish, French, Polish, Swedish,
//!   Turkish, plus an emoticon table
//! - **Phrase-aware**: multi-word idioms match as a unit; longer phrases win
//!   over their sub-phrases at overlapping positions
//! - **Unicode-aware**: matching and case normalization handle non-ASCII
//!   text (`"DÅRLIG!!!"` scores the same as `"dårlig!!!"`)
//!
//! ## Example
//!
//! ```
//! use afinn::{Afinn, AfinnConfig, Language};
//!
//! let afinn = Afinn::default();
//! assert!(afinn.score("This is a wonderful day") > 0.0);
//! assert_eq!(afinn.score(""), 0.0);
//!
//! let turkish = Afinn::new(AfinnConfig::new().with_language(Language::Tr)).unwrap();
//! assert!(turkish.score("çok iyi") > 0.0);
//! ```

pub mod errors;
pub mod lexicon;
pub mod matcher;
pub mod scorer;
pub mod types;

// Re-export commonly used types
pub use errors::{AfinnError, Result};
pub use lexicon::Lexicon;
pub use matcher::PhraseMatcher;
pub use scorer::Afinn;
pub use types::{AfinnConfig, Language, ScoredWord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
