//! Error types for the pdf-textclean library.
//!
//! Every failure is fatal: the pipeline processes one document in one pass,
//! so there is nothing sensible to continue with once a stage has failed.
//! There is no page-level error type and no partial output. The similarity
//! threshold is the only "soft" condition and it is reported through
//! [`crate::pipeline::compare::SimilarityReport`], never through this enum.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf-textclean library.
#[derive(Debug, Error)]
pub enum TextCleanError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium could not load a page or its text layer.
    #[error("Text extraction failed for page {page}: {detail}")]
    PageExtractionFailed { page: usize, detail: String },

    // ── Spelling errors ───────────────────────────────────────────────────
    /// The word-frequency dictionary could not be read or held no entries.
    #[error("Failed to load spelling dictionary '{path}': {reason}")]
    DictionaryLoadFailed { path: PathBuf, reason: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output text file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
You can:\n\
  • Pass --pdfium-lib /path/to/libpdfium.\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium.\n\
  • Place libpdfium next to the working directory or install it system-wide.\n"
    )]
    PdfiumBindingFailed(String),
}
