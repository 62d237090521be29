//! Dictionary-based spelling correction with SymSpell.
//!
//! The corrector is word-local: every whitespace-delimited token is looked
//! up on its own, with no sentence context. Leading and trailing punctuation
//! is kept as-is and only the alphabetic core is corrected, so `"teh,"`
//! becomes `"the,"` and the stopword stage afterwards still sees the comma.
//!
//! Cores that are not plain ASCII letters (numbers, contractions, hyphenated
//! compounds, accented words) pass through untouched.

use crate::error::TextCleanError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use symspell::{AsciiStringStrategy, SymSpell, SymSpellBuilder, Verbosity};
use tracing::{debug, info};

static RE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// A loaded word-frequency dictionary plus the SymSpell delete index.
pub struct SpellingCorrector {
    symspell: SymSpell<AsciiStringStrategy>,
    max_edit_distance: i64,
    entries: usize,
}

impl std::fmt::Debug for SpellingCorrector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellingCorrector")
            .field("max_edit_distance", &self.max_edit_distance)
            .field("entries", &self.entries)
            .finish()
    }
}

impl SpellingCorrector {
    /// Load a `word count` dictionary file (one entry per line, single-space
    /// separated).
    pub fn from_path(path: &Path, max_edit_distance: i64) -> Result<Self, TextCleanError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| TextCleanError::DictionaryLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let corrector = Self::build(contents.lines(), max_edit_distance).map_err(|reason| {
            TextCleanError::DictionaryLoadFailed {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        info!(
            "Loaded spelling dictionary {} ({} words)",
            path.display(),
            corrector.entries
        );
        Ok(corrector)
    }

    /// Build a corrector from in-memory `word count` lines.
    pub fn from_lines<'a, I>(lines: I, max_edit_distance: i64) -> Result<Self, TextCleanError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::build(lines, max_edit_distance).map_err(|reason| TextCleanError::DictionaryLoadFailed {
            path: PathBuf::from("<memory>"),
            reason,
        })
    }

    fn build<'a, I>(lines: I, max_edit_distance: i64) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut symspell: SymSpell<AsciiStringStrategy> = SymSpellBuilder::default()
            .max_dictionary_edit_distance(max_edit_distance)
            .build()
            .map_err(|e| e.to_string())?;

        let mut entries = 0usize;
        for line in lines {
            let line = line.trim_end_matches('\r');
            if !is_dictionary_line(line) {
                continue;
            }
            if symspell.load_dictionary_line(line, 0, 1, " ") {
                entries += 1;
            }
        }

        if entries == 0 {
            return Err("dictionary holds no `word count` entries".to_string());
        }

        Ok(Self {
            symspell,
            max_edit_distance,
            entries,
        })
    }

    /// Number of dictionary words loaded.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Correct every token of `text`, leaving the whitespace between tokens
    /// exactly as it was.
    pub fn correct(&self, text: &str) -> String {
        let mut changed = 0usize;
        let corrected = RE_TOKEN.replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let fixed = self.correct_token(token);
            if fixed != token {
                changed += 1;
            }
            fixed
        });
        debug!("Spelling: {} tokens corrected", changed);
        corrected.into_owned()
    }

    /// Correct a single whitespace-free token.
    pub fn correct_token(&self, token: &str) -> String {
        let (prefix, core, suffix) = split_punctuation(token);
        if core.is_empty() || !core.bytes().all(|b| b.is_ascii_alphabetic()) {
            return token.to_string();
        }

        let lower = core.to_ascii_lowercase();
        let suggestions = self
            .symspell
            .lookup(&lower, Verbosity::Top, self.max_edit_distance);

        match suggestions.first() {
            Some(best) if best.distance > 0 => {
                format!("{prefix}{}{suffix}", match_case(core, &best.term))
            }
            _ => token.to_string(),
        }
    }
}

/// `word count` with a non-empty word and an integer count.
fn is_dictionary_line(line: &str) -> bool {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next()) {
        (Some(word), Some(count)) => !word.is_empty() && count.parse::<i64>().is_ok(),
        _ => false,
    }
}

/// Split a token into leading punctuation, alphanumeric core and trailing
/// punctuation.
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let start = token
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, _)| i);

    let Some(start) = start else {
        return (token, "", "");
    };

    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(token.len());

    (&token[..start], &token[start..end], &token[end..])
}

/// Re-case `replacement` the way `original` was cased.
fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(|c| c.is_uppercase());
    let all_upper = original.chars().count() > 1 && original.chars().all(|c| c.is_uppercase());

    if all_upper {
        replacement.to_uppercase()
    } else if first_upper {
        let mut out = String::with_capacity(replacement.len());
        let mut rep = replacement.chars();
        if let Some(c) = rep.next() {
            out.extend(c.to_uppercase());
        }
        out.push_str(rep.as_str());
        out
    } else {
        replacement.to_string()
    }
}
