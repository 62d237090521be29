//! Similarity between the raw extraction and the cleaned text.
//!
//! The score is the Ratcliff/Obershelp ratio `2·M / T`: find the longest
//! common block of characters, recurse on the pieces to its left and right,
//! and let `M` be the total length of all blocks found and `T` the combined
//! length of both strings.
//!
//! For a second sequence of 200 characters or more, characters that make up
//! more than 1 % of it ("popular" characters such as the space) cannot seed
//! a match, though they still extend one. Scores match the classic
//! `SequenceMatcher` ratio.
//!
//! The report is observational only. The review warning for a low score is
//! carried by [`SimilarityReport::summary_lines`]; the log records the score
//! at `info` level only.

use crate::config::SIMILARITY_THRESHOLD;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

/// Sequences at least this long get popular characters junked.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity score plus the threshold it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Ratio scaled to 0–100.
    pub percent: f64,
    /// Score below which the text is flagged for review.
    pub threshold: f64,
}

impl SimilarityReport {
    /// Score `cleaned` against `original` with the fixed threshold and log the
    /// outcome.
    pub fn compare(original: &str, cleaned: &str) -> Self {
        let report = Self {
            percent: similarity_percent(original, cleaned),
            threshold: SIMILARITY_THRESHOLD,
        };
        info!(
            "Similarity {:.2}% (threshold {:.0}%)",
            report.percent, report.threshold
        );
        report
    }

    pub fn is_below_threshold(&self) -> bool {
        self.percent < self.threshold
    }

    /// Console lines for this report: the score, and the review warning
    /// when the score is below the threshold.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Document similarity: {:.2}%", self.percent)];
        if self.is_below_threshold() {
            lines.push(
                "There are notable differences. Consider reviewing the cleaned text.".to_string(),
            );
        }
        lines
    }
}

/// Similarity of `a` and `b` as a percentage (0.0–100.0).
pub fn similarity_percent(a: &str, b: &str) -> f64 {
    similarity_ratio(a, b) * 100.0
}

/// Ratcliff/Obershelp similarity of `a` and `b` in 0.0–1.0.
///
/// Two empty strings are identical and score 1.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = BlockMatcher::new(&a, &b).matching_chars();
    2.0 * matches as f64 / total as f64
}

/// A common run: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

struct BlockMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each non-popular character of `b`, ascending.
    b_index: HashMap<char, Vec<usize>>,
}

impl<'s> BlockMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b_index.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_index }
    }

    /// Total size of all matching blocks.
    fn matching_chars(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
            let block = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.size == 0 {
                continue;
            }
            total += block.size;

            if a_lo < block.a_start && b_lo < block.b_start {
                queue.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < a_hi && b_end < b_hi {
                queue.push((a_end, a_hi, b_end, b_hi));
            }
        }

        total
    }

    /// Longest block inside `a[a_lo..a_hi]` × `b[b_lo..b_hi]`, earliest in
    /// `a` (then `b`) on ties, extended over popular characters on both ends.
    fn longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> Block {
        let mut best = Block {
            a_start: a_lo,
            b_start: b_lo,
            size: 0,
        };

        // run_len[j] = length of the match ending at a[i - 1], b[j]
        let mut run_len: HashMap<usize, usize> = HashMap::new();
        for i in a_lo..a_hi {
            let mut next_run_len = HashMap::new();
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_len.insert(j, k);
                    if k > best.size {
                        best = Block {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            run_len = next_run_len;
        }

        while best.a_start > a_lo
            && best.b_start > b_lo
            && self.a[best.a_start - 1] == self.b[best.b_start - 1]
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }
        while best.a_start + best.size < a_hi
            && best.b_start + best.size < b_hi
            && self.a[best.a_start + best.size] == self.b[best.b_start + best.size]
        {
            best.size += 1;
        }

        best
    }
}
