//! Results returned by the cleaning pipeline.

use crate::pipeline::compare::SimilarityReport;
use crate::pipeline::segment::Segmentation;
use serde::Serialize;
use std::path::PathBuf;

/// Text after normalisation and paragraph segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// Single-line text after whitespace collapse, spelling and stopwords.
    pub normalized: String,
    pub segmentation: Segmentation,
}

impl CleanedText {
    /// The final paragraph text, as written to the output file.
    pub fn text(&self) -> String {
        self.segmentation.text()
    }

    pub fn sentence_count(&self) -> usize {
        self.segmentation.sentence_count
    }

    pub fn paragraph_count(&self) -> usize {
        self.segmentation.paragraphs.len()
    }
}

/// Everything one pipeline run produced.
///
/// The two intermediate texts are left out of the JSON form; `text` is the
/// content of the output file.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// Raw extraction, pages joined with a blank line.
    #[serde(skip_serializing)]
    pub original: String,

    #[serde(skip_serializing)]
    pub normalized: String,

    /// Final paragraph text.
    pub text: String,

    pub page_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub similarity: SimilarityReport,
    pub output_path: PathBuf,
}

impl PipelineOutput {
    /// Console lines for a run: the similarity report followed by the
    /// completion line.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = self.similarity.summary_lines();
        lines.push(format!(
            "Text extraction, spelling correction, unnecessary words removal, and segmentation completed. Saved to: {}",
            self.output_path.display()
        ));
        lines
    }
}
