//! Locating statement documents on disk.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pdf::is_extension;

/// Expand directories to their `*.pdf` files (sorted by name); files pass through.
pub fn collect_documents(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("read {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_extension(p, "pdf"))
                .collect();
            if found.is_empty() {
                bail!("No PDF files found in {}", path.display());
            }
            found.sort();
            docs.extend(found);
        } else if path.exists() {
            docs.push(path.clone());
        } else {
            bail!("Statement not found: {}", path.display());
        }
    }

    Ok(docs)
}

/// `<input dir>/../processed/all_transactions.csv`
pub fn default_output_path(first_input: &Path) -> PathBuf {
    let dir = if first_input.is_dir() {
        first_input
    } else {
        first_input.parent().unwrap_or(Path::new(""))
    };
    dir.parent()
        .unwrap_or(Path::new(""))
        .join("processed")
        .join("all_transactions.csv")
}
