//! Input validation: make sure the path points at a readable PDF.
//!
//! pdfium reports a missing file, a permission problem and a text file
//! renamed to `.pdf` with the same opaque load error. Checking the path and
//! the `%PDF` magic bytes up front turns those into distinct errors.

use crate::error::TextCleanError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Magic bytes every PDF file starts with.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Validate a local PDF path, checking existence, read permission and the
/// PDF magic bytes. Returns the path as an owned `PathBuf`.
pub fn validate_pdf_path(path: &Path) -> Result<PathBuf, TextCleanError> {
    let path = path.to_path_buf();

    if !path.exists() {
        return Err(TextCleanError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != PDF_MAGIC {
                return Err(TextCleanError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(TextCleanError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(TextCleanError::FileNotFound { path });
        }
    }

    debug!("Validated local PDF: {}", path.display());
    Ok(path)
}
