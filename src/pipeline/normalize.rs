//! Normalisation: whitespace collapse, spelling correction, stopword removal.
//!
//! ## Rule order
//!
//! 1. Collapse every run of whitespace (newlines included) to one space, so
//!    the page and line structure left over from extraction disappears.
//! 2. Correct spelling over the whole collapsed string.
//! 3. Drop stopwords by exact, case-insensitive whitespace-token match.
//! 4. Trim.
//!
//! Stopword matching does not look inside punctuation: `"this,"` and
//! `"here."` are not `"this"` and `"here"` and survive the filter.

use crate::pipeline::spelling::SpellingCorrector;
use once_cell::sync::Lazy;
use regex::Regex;

/// Words dropped by [`remove_stopwords`].
pub const STOPWORDS: [&str; 11] = [
    "the", "a", "an", "is", "are", "was", "were", "that", "this", "there", "here",
];

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Run all normalisation rules in order. `corrector` is `None` when spelling
/// correction is disabled.
pub fn normalize(input: &str, corrector: Option<&SpellingCorrector>) -> String {
    let s = collapse_whitespace(input);
    let s = match corrector {
        Some(c) => c.correct(&s),
        None => s,
    };
    let s = remove_stopwords(&s);
    s.trim().to_string()
}

// ── Rule 1: Collapse whitespace ──────────────────────────────────────────────

/// Replace every run of whitespace characters with a single space.
pub fn collapse_whitespace(input: &str) -> String {
    RE_WHITESPACE.replace_all(input, " ").into_owned()
}

// ── Rule 3: Stopword removal ─────────────────────────────────────────────────

/// `true` when the token's lowercase form is exactly one of [`STOPWORDS`].
pub fn is_stopword(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// Split on whitespace, drop stopword tokens, rejoin with single spaces.
pub fn remove_stopwords(input: &str) -> String {
    input
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("page one\n\nline\ttwo   three\r\n"),
            "page one line two three "
        );
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "a\n\n\nb",
            " lead and trail \t",
            "unicode\u{00A0}\u{2003}spaces",
        ];
        for input in inputs {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_remove_stopwords_case_insensitive() {
        assert_eq!(
            remove_stopwords("The cat IS on A mat that Was here"),
            "cat on mat"
        );
    }

    #[test]
    fn test_punctuation_adjacent_stopwords_survive() {
        assert_eq!(remove_stopwords("this, is here."), "this, here.");
    }

    #[test]
    fn test_no_standalone_stopword_left() {
        let text = "There were an apple and a pear. That is THIS and that, \
                    here we are; the end. An ARE Was were";
        let out = remove_stopwords(text);
        for token in out.split_whitespace() {
            assert!(!is_stopword(token), "stopword {token:?} left in {out:?}");
        }
    }

    #[test]
    fn test_scenario_sentence() {
        let text = "The cat is here. The dog is there. A bird flew away.";
        assert_eq!(remove_stopwords(text), "cat here. dog there. bird flew away.");
    }

    #[test]
    fn test_normalize_without_spelling() {
        let raw = "  The cat\nis here.\n\nThe dog   is there.  ";
        assert_eq!(normalize(raw, None), "cat here. dog there.");
    }

    #[test]
    fn test_normalize_with_spelling() {
        let c = SpellingCorrector::from_lines(
            ["the 100", "cat 50", "is 90", "here 40", "sat 30"],
            2,
        )
        .unwrap();
        // "teh" is corrected to "the" first and only then dropped as a stopword.
        assert_eq!(normalize("teh cat\nsta here.", Some(&c)), "cat sat here.");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("", None), "");
        assert_eq!(normalize(" \n\t ", None), "");
        assert_eq!(normalize("the a an", None), "");
    }
}
