//! PDF text extraction via pdfium.
//!
//! Each page's text layer is read in definition order with
//! `PdfPageText::all()` and the pages are joined with
//! [`PAGE_SEPARATOR`](crate::config::PAGE_SEPARATOR). There is no partial
//! result: the first page that fails to load aborts extraction.
//!
//! Pages are fetched by index rather than through `PdfPages::iter()`, which
//! stops silently at the first page it cannot load.

use crate::config::PAGE_SEPARATOR;
use crate::error::TextCleanError;
use pdfium_render::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an existing pdfium shared library.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Text extracted from a PDF, page by page and joined.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    /// Text of each page, in page order.
    pub pages: Vec<String>,
    /// All pages joined with a blank line.
    pub text: String,
}

impl ExtractedDocument {
    pub fn from_pages(pages: Vec<String>) -> Self {
        let text = join_pages(&pages);
        Self { pages, text }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Join page texts with a blank line between consecutive pages.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

/// Bind to a pdfium shared library.
///
/// Resolution order: `library_path`, then `PDFIUM_LIB_PATH`, then the
/// platform library name in the working directory, then the system search
/// path.
pub fn bind_pdfium(library_path: Option<&Path>) -> Result<Pdfium, TextCleanError> {
    if let Some(path) = library_path {
        return bind_pdfium_from_path(path);
    }

    if let Ok(env_path) = std::env::var(PDFIUM_LIB_PATH_ENV) {
        if !env_path.is_empty() {
            return bind_pdfium_from_path(Path::new(&env_path));
        }
    }

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| TextCleanError::PdfiumBindingFailed(e.to_string()))?;

    Ok(Pdfium::new(bindings))
}

fn bind_pdfium_from_path(path: &Path) -> Result<Pdfium, TextCleanError> {
    debug!("Binding pdfium from {}", path.display());
    Pdfium::bind_to_library(path)
        .map(Pdfium::new)
        .map_err(|e| {
            TextCleanError::PdfiumBindingFailed(format!("'{}': {}", path.display(), e))
        })
}

/// Extracts plain text from PDF files with a bound pdfium instance.
pub struct PdfTextExtractor {
    pdfium: Pdfium,
    password: Option<String>,
}

impl PdfTextExtractor {
    pub fn new(pdfium: Pdfium, password: Option<String>) -> Self {
        Self { pdfium, password }
    }

    /// Bind pdfium per [`bind_pdfium`] and wrap it.
    pub fn bind(library_path: Option<&Path>, password: Option<String>) -> Result<Self, TextCleanError> {
        Ok(Self::new(bind_pdfium(library_path)?, password))
    }

    /// Extract every page of `pdf_path`.
    pub fn extract(&self, pdf_path: &Path) -> Result<ExtractedDocument, TextCleanError> {
        let password = self.password.as_deref();
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, password)
            .map_err(|e| map_load_error(pdf_path, password.is_some(), e))?;

        let pages = document.pages();
        let total_pages = pages.len();
        info!("PDF loaded: {} pages", total_pages);

        let mut texts = Vec::with_capacity(total_pages as usize);
        for idx in 0..total_pages {
            let page_num = idx as usize + 1;
            let page = pages
                .get(idx)
                .map_err(|e| TextCleanError::PageExtractionFailed {
                    page: page_num,
                    detail: e.to_string(),
                })?;
            let text = page
                .text()
                .map_err(|e| TextCleanError::PageExtractionFailed {
                    page: page_num,
                    detail: e.to_string(),
                })?
                .all();
            debug!("Extracted page {} → {} chars", page_num, text.chars().count());
            texts.push(text);
        }

        Ok(ExtractedDocument::from_pages(texts))
    }
}

fn map_load_error(pdf_path: &Path, had_password: bool, e: PdfiumError) -> TextCleanError {
    let path = pdf_path.to_path_buf();
    match e {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            if had_password {
                TextCleanError::WrongPassword { path }
            } else {
                TextCleanError::PasswordRequired { path }
            }
        }
        other => TextCleanError::CorruptPdf {
            path,
            detail: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_pages_uses_blank_lines() {
        let pages = vec!["first page\n", "second page\n", "third page\n"];
        let joined = join_pages(&pages);
        assert_eq!(joined, "first page\n\n\nsecond page\n\n\nthird page\n");
    }

    #[test]
    fn n_pages_give_n_minus_one_separators() {
        let pages: Vec<String> = (1..=5).map(|i| format!("page {i}")).collect();
        let doc = ExtractedDocument::from_pages(pages);
        assert_eq!(doc.page_count(), 5);
        assert_eq!(doc.text.matches(PAGE_SEPARATOR).count(), 4);
        assert_eq!(doc.text.split(PAGE_SEPARATOR).count(), 5);
    }

    #[test]
    fn single_and_empty_documents() {
        assert_eq!(join_pages(&["only"]), "only");
        assert_eq!(join_pages::<&str>(&[]), "");
        assert_eq!(ExtractedDocument::from_pages(vec![]).page_count(), 0);
    }

    #[test]
    fn password_error_maps_by_context() {
        let path = Path::new("locked.pdf");
        let err = || PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError);
        assert!(matches!(
            map_load_error(path, false, err()),
            TextCleanError::PasswordRequired { .. }
        ));
        assert!(matches!(
            map_load_error(path, true, err()),
            TextCleanError::WrongPassword { .. }
        ));
        assert!(matches!(
            map_load_error(
                path,
                false,
                PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::FormatError)
            ),
            TextCleanError::CorruptPdf { .. }
        ));
    }
}
