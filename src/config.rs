//! Configuration types for the text-cleaning pipeline.
//!
//! Engine settings live in [`PipelineConfig`], built via its
//! [`PipelineConfigBuilder`]. Input and output paths are *not* part of the
//! config: they are passed to [`crate::clean::TextPipeline::run`] so one
//! constructed pipeline can be pointed at any file.
//!
//! The shape of the pipeline itself (page separator, sentences per paragraph,
//! similarity threshold, stopword list) is fixed and exposed as constants.

use crate::error::TextCleanError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Number of sentences grouped into one paragraph block.
pub const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Similarity percentage below which the cleaned text is flagged for review.
pub const SIMILARITY_THRESHOLD: f64 = 90.0;

/// Largest edit distance the spelling corrector accepts.
pub const MAX_EDIT_DISTANCE_LIMIT: i64 = 3;

/// Configuration for a [`crate::clean::TextPipeline`].
///
/// # Example
/// ```rust
/// use pdf_textclean::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .dictionary_path("frequency_dictionary_en_82_765.txt")
///     .max_edit_distance(2)
///     .build()
///     .unwrap();
/// assert!(config.spelling);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Run the spelling-correction stage. Default: true.
    pub spelling: bool,

    /// Word-frequency dictionary for the spelling stage.
    ///
    /// One entry per line, `word count`, separated by a single space (the
    /// SymSpell `frequency_dictionary_en_82_765.txt` format). Required when
    /// `spelling` is on.
    pub dictionary_path: Option<PathBuf>,

    /// Maximum edit distance between a misspelt word and its correction. Default: 2.
    ///
    /// Lookup cost grows quickly with distance; 2 catches most typos
    /// (transpositions, a dropped or doubled letter).
    pub max_edit_distance: i64,

    /// PDF user password for encrypted documents.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// Explicit path to the pdfium shared library.
    ///
    /// When `None`, `PDFIUM_LIB_PATH`, the working directory and finally
    /// the system library search path are tried in that order.
    pub pdfium_library_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            spelling: true,
            dictionary_path: None,
            max_edit_distance: 2,
            password: None,
            pdfium_library_path: None,
        }
    }
}

impl PipelineConfig {
    /// Create a new builder for `PipelineConfig`.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    pub fn spelling(mut self, enabled: bool) -> Self {
        self.config.spelling = enabled;
        self
    }

    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary_path = Some(path.into());
        self
    }

    pub fn max_edit_distance(mut self, distance: i64) -> Self {
        self.config.max_edit_distance = distance.clamp(0, MAX_EDIT_DISTANCE_LIMIT);
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pdfium_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library_path = Some(path.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PipelineConfig, TextCleanError> {
        let c = &self.config;
        if c.spelling && c.dictionary_path.is_none() {
            return Err(TextCleanError::InvalidConfig(
                "spelling correction needs a dictionary; set a dictionary path or disable spelling"
                    .into(),
            ));
        }
        if !(0..=MAX_EDIT_DISTANCE_LIMIT).contains(&c.max_edit_distance) {
            return Err(TextCleanError::InvalidConfig(format!(
                "max edit distance must be 0–{}, got {}",
                MAX_EDIT_DISTANCE_LIMIT, c.max_edit_distance
            )));
        }
        Ok(self.config)
    }
}
