//! Paragraph segmentation: sentences regrouped into fixed-size blocks.
//!
//! Sentence boundaries come from the Unicode sentence-boundary rules
//! (UAX #29), plus one extra rule: a terminal `.`, `!` or `?` (optionally
//! followed by closing quotes or brackets), then whitespace, then a letter of
//! either case ends a sentence. UAX #29 alone never breaks before a lowercase
//! word, and stopword removal strips most capitalised sentence openers.
//!
//! Sentences are batched greedily, [`SENTENCES_PER_PARAGRAPH`] per block;
//! only the final block may be shorter.

use crate::config::SENTENCES_PER_PARAGRAPH;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static RE_TERMINAL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\)\]\}\u{201D}\u{2019}]*\s+\p{L}"#).unwrap());

/// Separator placed between paragraph blocks.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Result of segmenting one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Paragraph blocks, each the space-joined text of its sentences.
    pub paragraphs: Vec<String>,
    /// Number of sentences found before grouping.
    pub sentence_count: usize,
}

impl Segmentation {
    /// Paragraph blocks joined with a blank line.
    pub fn text(&self) -> String {
        self.paragraphs.join(PARAGRAPH_SEPARATOR)
    }
}

/// Split `text` into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds()
        .flat_map(split_terminal_boundaries)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split after every terminal punctuation mark that is followed by
/// whitespace and a letter.
fn split_terminal_boundaries(sentence: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in RE_TERMINAL_BOUNDARY.find_iter(sentence) {
        let letter_len = m.as_str().chars().last().map_or(0, char::len_utf8);
        let next = m.end() - letter_len;
        pieces.push(&sentence[start..next]);
        start = next;
    }
    pieces.push(&sentence[start..]);
    pieces
}

/// Group sentences into blocks of [`SENTENCES_PER_PARAGRAPH`].
pub fn group_paragraphs(sentences: &[&str]) -> Vec<String> {
    sentences
        .chunks(SENTENCES_PER_PARAGRAPH)
        .map(|group| group.join(" "))
        .collect()
}

/// Sentence-split and regroup `text`.
pub fn segment(text: &str) -> Segmentation {
    let sentences = split_sentences(text);
    Segmentation {
        paragraphs: group_paragraphs(&sentences),
        sentence_count: sentences.len(),
    }
}

/// Convenience wrapper returning only the joined paragraph text.
pub fn segment_into_paragraphs(text: &str) -> String {
    segment(text).text()
}
