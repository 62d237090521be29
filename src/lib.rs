//! # pdf-textclean
//!
//! Extract the text of a PDF and clean it up for reading or indexing.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input      check the file exists and is a PDF
//!  ├─ 2. Extract    per-page text via pdfium, pages joined by a blank line
//!  ├─ 3. Normalize  collapse whitespace, correct spelling, drop stopwords
//!  ├─ 4. Segment    sentences regrouped three per paragraph
//!  ├─ 5. Compare    similarity of the result to the raw extraction
//!  └─ 6. Output     paragraph text written to a .txt file
//! ```
//!
//! Everything runs synchronously on the calling thread.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_textclean::{clean_pdf, PipelineConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::builder()
//!         .dictionary_path("frequency_dictionary_en_82_765.txt")
//!         .build()?;
//!     let output = clean_pdf("report.pdf", "report.txt", &config)?;
//!     for line in output.summary_lines() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! To clean text that did not come from a PDF, use [`TextCleaner`] directly;
//! it needs no pdfium library.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfclean` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-textclean = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod clean;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use clean::{clean_pdf, TextCleaner, TextPipeline};
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::TextCleanError;
pub use output::{CleanedText, PipelineOutput};
pub use pipeline::compare::SimilarityReport;
pub use pipeline::extract::{ExtractedDocument, PdfTextExtractor};
pub use pipeline::spelling::SpellingCorrector;
