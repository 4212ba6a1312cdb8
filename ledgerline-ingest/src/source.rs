//! Where page text comes from.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Page separator emitted by most PDF-to-text tools.
pub const PAGE_BREAK: char = '\u{c}';

/// Text-extraction collaborator: one string per page, in reading order.
///
/// An error means the whole document could not be read. A page with no
/// text is an empty string, not an error.
pub trait PageSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>>;
}

impl<F> PageSource for F
where
    F: Fn(&Path) -> Result<Vec<String>>,
{
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        self(path)
    }
}

/// Split extracted text on form feeds.
pub fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_BREAK).map(str::to_string).collect()
}

/// Reads text that was already extracted (e.g. `pdftotext` output).
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileSource;

impl PageSource for TextFileSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(split_pages(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("a\nb\u{c}c\n"), vec!["a\nb", "c\n"]);
        assert_eq!(split_pages(""), vec![""]);
    }

    #[test]
    fn test_text_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "01/02 Deposit 1.00 2.00\u{c}01/03 Fee 1.00").unwrap();

        let pages = TextFileSource.pages(file.path()).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1], "01/03 Fee 1.00");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextFileSource.pages(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
