//! Lexicon loading
//!
//! Each supported language ships a tab-separated word list compiled into the
//! binary. Parsing is lenient: lines that are not `<phrase>\t<score>` are
//! dropped without error, since the upstream AFINN files carry the occasional
//! header or encoding artifact.

use crate::types::Language;
use rustc_hash::FxHashMap;

/// A loaded lexicon: phrase to sentiment score
pub type Lexicon = FxHashMap<String, f64>;

/// Raw lexicon file contents for a language.
///
/// The files use the upstream AFINN naming scheme and are embedded at
/// compile time, so no I/O happens at runtime.
pub fn raw_lexicon(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../data/AFINN-en-165.txt"),
        Language::Da => include_str!("../data/AFINN-da-32.txt"),
        Language::Fi => include_str!("../data/AFINN-fi-165.txt"),
        Language::Fr => include_str!("../data/AFINN-fr-165.txt"),
        Language::Pl => include_str!("../data/AFINN-pl-165.txt"),
        Language::Sv => include_str!("../data/AFINN-sv-165.txt"),
        Language::Tr => include_str!("../data/AFINN-tr-165.txt"),
        Language::Emoticons => include_str!("../data/AFINN-emoticon-8.txt"),
    }
}

/// Parse raw lexicon text into a phrase -> score mapping.
///
/// Each line is split on the first tab. A line is skipped when the phrase
/// part is empty or the score part does not parse as a float; otherwise the
/// phrase is trimmed and inserted, overwriting any earlier entry for the
/// same phrase.
pub fn parse(raw: &str) -> Lexicon {
    let mut lexicon = Lexicon::default();

    for line in raw.lines() {
        let Some((phrase, score)) = line.split_once('\t') else {
            continue;
        };
        let phrase = phrase.trim();
        if phrase.is_empty() {
            continue;
        }
        let Ok(score) = score.trim().parse::<f64>() else {
            continue;
        };
        lexicon.insert(phrase.to_string(), score);
    }

    lexicon
}

/// Load the bundled lexicon for a language
pub fn load(language: Language) -> Lexicon {
    parse(raw_lexicon(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let lexicon = parse("good\t3\nbad\t-3\n");
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon["good"], 3.0);
        assert_eq!(lexicon["bad"], -3.0);
    }

    #[test]
    fn test_parse_fractional_and_signed_scores() {
        let lexicon = parse("meh\t-0.5\nnice\t+2\nokay\t1.25\n");
        assert_eq!(lexicon["meh"], -0.5);
        assert_eq!(lexicon["nice"], 2.0);
        assert_eq!(lexicon["okay"], 1.25);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let raw = "good\t3\n\nno tab here\n\tmissing phrase\nbroken\tscore\ntrailing\t\nbad\t-3\n";
        let lexicon = parse(raw);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains_key("good"));
        assert!(lexicon.contains_key("bad"));
    }

    #[test]
    fn test_parse_last_entry_wins() {
        let lexicon = parse("word\t1\nword\t-4\n");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon["word"], -4.0);
    }

    #[test]
    fn test_parse_trims_phrase_whitespace() {
        let lexicon = parse(" padded \t2\n");
        assert_eq!(lexicon["padded"], 2.0);
    }

    #[test]
    fn test_parse_multi_word_phrases() {
        let lexicon = parse("not good\t-2\nvery bad\t-5\n");
        assert_eq!(lexicon["not good"], -2.0);
        assert_eq!(lexicon["very bad"], -5.0);
    }

    #[test]
    fn test_all_bundled_lexicons_load() {
        for lang in Language::ALL {
            let lexicon = load(lang);
            assert!(!lexicon.is_empty(), "empty lexicon for {lang}");
            for (phrase, score) in &lexicon {
                assert!(!phrase.is_empty());
                assert!(score.is_finite(), "non-finite score for {phrase:?}");
            }
        }
    }

    #[test]
    fn test_bundled_english_entries() {
        let lexicon = load(Language::En);
        assert_eq!(lexicon["bad"], -3.0);
        assert_eq!(lexicon["good"], 3.0);
        assert!(lexicon["naïve"] < 0.0);
    }
}
