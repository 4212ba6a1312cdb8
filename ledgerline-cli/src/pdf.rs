//! Text extraction for statement documents.

use anyhow::{Context, Result, anyhow};
use ledgerline_ingest::source::{PageSource, TextFileSource, split_pages};
use std::panic;
use std::path::Path;

/// Extracts PDF text with `pdf-extract`. Pages are separated by form feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSource;

impl PageSource for PdfSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed documents
        let text = panic::catch_unwind(|| pdf_extract::extract_text(path))
            .map_err(|_| anyhow!("pdf-extract panicked"))
            .and_then(|r| r.map_err(|e| anyhow!("{e}")))
            .with_context(|| format!("extract text from {}", path.display()))?;
        Ok(split_pages(&text))
    }
}

/// `.txt` files are treated as already-extracted text; everything else as PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementSource;

impl PageSource for StatementSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        if is_extension(path, "txt") {
            TextFileSource.pages(path)
        } else {
            PdfSource.pages(path)
        }
    }
}

pub fn is_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_extension() {
        assert!(is_extension(Path::new("2024-01.PDF"), "pdf"));
        assert!(is_extension(Path::new("a/b.txt"), "txt"));
        assert!(!is_extension(Path::new("notes"), "txt"));
    }

    #[test]
    fn test_text_statement_bypasses_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("2024-05.txt");
        fs::write(&p, "05/01 Deposit 1.00 1.00").unwrap();
        let pages = StatementSource.pages(&p).unwrap();
        assert_eq!(pages, vec!["05/01 Deposit 1.00 1.00".to_string()]);
    }

    #[test]
    fn test_corrupt_pdf_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("2024-05.pdf");
        fs::write(&p, b"not a pdf").unwrap();
        assert!(StatementSource.pages(&p).is_err());
    }
}
