//! Line-oriented text extraction from PDF documents.
//!
//! The only consumer of this crate is a row parser that matches a fixed
//! tabular shape against individual lines, so the extraction pipeline is
//! tuned for exactly one thing: reproducing each printed line of the page as
//! one `\n`-terminated string with column gaps preserved as spaces.
//!
//! I/O lives behind the [`PdfBackend`] trait (implemented by
//! [`LopdfBackend`]); the span and line assembly in [`layout`] is pure and
//! can be exercised with mock backends.

use thiserror::Error;

pub mod backend;
pub mod layout;

pub use backend::{LopdfBackend, PdfBackend};

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("Document is encrypted")]
    Encrypted,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extract the complete text of a PDF supplied as an in-memory byte slice.
///
/// Pages are visited in document order. Each page that yields non-empty
/// text contributes its lines; pages with no extractable text are skipped
/// outright rather than inserting blank separators. Page texts are joined
/// with a single `\n`.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let backend = LopdfBackend::load_bytes(bytes)?;
    document_text(&backend)
}

/// Extract the newline-joined text of every non-empty page.
pub fn document_text(backend: &dyn PdfBackend) -> Result<String, PdfError> {
    let page_map = backend.pages();
    let mut pages: Vec<String> = Vec::with_capacity(page_map.len());

    for (&page_num, &page_id) in &page_map {
        let spans = layout::extract_page_spans(backend, page_id)?;
        let text = layout::page_text(spans);
        if text.is_empty() {
            log::debug!("page {page_num}: no extractable text, skipping");
            continue;
        }
        pages.push(text);
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_rejects_garbage() {
        assert!(matches!(extract_text(b"not a pdf"), Err(PdfError::Parse(_))));
    }

    #[test]
    fn extract_text_rejects_empty_input() {
        assert!(extract_text(&[]).is_err());
    }
}
