//! Pipeline entry points.
//!
//! [`TextCleaner`] covers the pure text stages and needs nothing but an
//! optional dictionary. [`TextPipeline`] adds a bound pdfium instance and
//! the input/output files around it. Both are built once and reused across
//! runs; nothing in here is global.

use crate::config::PipelineConfig;
use crate::error::TextCleanError;
use crate::output::{CleanedText, PipelineOutput};
use crate::pipeline::compare::SimilarityReport;
use crate::pipeline::extract::PdfTextExtractor;
use crate::pipeline::spelling::SpellingCorrector;
use crate::pipeline::{input, normalize, segment, write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Normalisation and segmentation over an already-extracted string.
#[derive(Debug, Default)]
pub struct TextCleaner {
    corrector: Option<SpellingCorrector>,
}

impl TextCleaner {
    /// `corrector` is `None` to skip spelling correction.
    pub fn new(corrector: Option<SpellingCorrector>) -> Self {
        Self { corrector }
    }

    /// Load the dictionary named by `config` when spelling is enabled.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, TextCleanError> {
        if !config.spelling {
            return Ok(Self::new(None));
        }
        let path = config.dictionary_path.as_deref().ok_or_else(|| {
            TextCleanError::InvalidConfig("spelling is enabled but no dictionary is set".into())
        })?;
        let corrector = SpellingCorrector::from_path(path, config.max_edit_distance)?;
        Ok(Self::new(Some(corrector)))
    }

    pub fn corrector(&self) -> Option<&SpellingCorrector> {
        self.corrector.as_ref()
    }

    /// Normalise `original`, then regroup it into paragraphs.
    pub fn clean(&self, original: &str) -> CleanedText {
        let normalized = normalize::normalize(original, self.corrector.as_ref());
        debug!(
            "Normalized {} → {} chars",
            original.chars().count(),
            normalized.chars().count()
        );
        let segmentation = segment::segment(&normalized);
        debug!(
            "Segmented into {} sentences, {} paragraphs",
            segmentation.sentence_count,
            segmentation.paragraphs.len()
        );
        CleanedText {
            normalized,
            segmentation,
        }
    }
}

/// Extraction, cleaning, comparison and output for one PDF at a time.
pub struct TextPipeline {
    extractor: PdfTextExtractor,
    cleaner: TextCleaner,
}

impl TextPipeline {
    /// Bind pdfium and load the dictionary described by `config`.
    pub fn new(config: &PipelineConfig) -> Result<Self, TextCleanError> {
        let cleaner = TextCleaner::from_config(config)?;
        let extractor = PdfTextExtractor::bind(
            config.pdfium_library_path.as_deref(),
            config.password.clone(),
        )?;
        Ok(Self::from_parts(extractor, cleaner))
    }

    pub fn from_parts(extractor: PdfTextExtractor, cleaner: TextCleaner) -> Self {
        Self { extractor, cleaner }
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Clean `input` and write the result to `output`.
    ///
    /// # Errors
    /// Any stage failure aborts the run. A low similarity score is not an
    /// error; it is reported in [`PipelineOutput::similarity`].
    pub fn run(&self, input: &Path, output: &Path) -> Result<PipelineOutput, TextCleanError> {
        let start = Instant::now();
        info!("Cleaning {}", input.display());

        // ── Step 1: Validate and extract ─────────────────────────────────────
        let pdf_path = input::validate_pdf_path(input)?;
        let extracted = self.extractor.extract(&pdf_path)?;
        info!(
            "Extracted {} pages, {} chars",
            extracted.page_count(),
            extracted.text.chars().count()
        );

        // ── Step 2: Normalise and segment ────────────────────────────────────
        let cleaned = self.cleaner.clean(&extracted.text);
        let text = cleaned.text();

        // ── Step 3: Compare ──────────────────────────────────────────────────
        let similarity = SimilarityReport::compare(&extracted.text, &text);

        // ── Step 4: Write ────────────────────────────────────────────────────
        write::write_output(output, &text)?;

        info!(
            "Cleaning complete: {} paragraphs in {}ms",
            cleaned.paragraph_count(),
            start.elapsed().as_millis()
        );

        Ok(PipelineOutput {
            page_count: extracted.page_count(),
            sentence_count: cleaned.sentence_count(),
            paragraph_count: cleaned.paragraph_count(),
            original: extracted.text,
            normalized: cleaned.normalized,
            text,
            similarity,
            output_path: output.to_path_buf(),
        })
    }
}

/// Build a [`TextPipeline`] for `config` and run it once.
pub fn clean_pdf(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, TextCleanError> {
    TextPipeline::new(config)?.run(input.as_ref(), output.as_ref())
}
