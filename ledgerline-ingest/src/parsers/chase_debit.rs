//! Chase Debit (Checking) statement parser (text)
//!
//! Expected extracted-text section:
//!   TRANSACTION DETAIL
//!          DATE        DESCRIPTION                                     AMOUNT     BALANCE
//!          04/22       Discover     E-Payment 8148   Web ID: ...       -15.00      53.70
//!          04/23       Online Transfer To Sav ...9876 Transaction#:
//!                      12345678                                        -250.00    -196.30
//!
//! Rows only carry `MM/DD`; the year comes from the file name
//! (`2024-04 statement.pdf`) or falls back to the current year.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::assemble::TransactionAssembler;
use crate::config::StatementLayout;
use crate::dates::{reconstruct_date, resolve_year};
use crate::error::IngestError;
use crate::merge::{MergeOutcome, merge_statements};
use crate::scanner::amount_value;
use crate::source::PageSource;
use crate::types::{RawRecord, TransactionRecord};

fn normalize(raw: RawRecord, statement_year: i32) -> TransactionRecord {
    let date = reconstruct_date(&raw.partial_date, statement_year);
    if date.is_none() {
        warn!(
            source = %raw.source_id,
            partial_date = %raw.partial_date,
            year = statement_year,
            "invalid transaction date, keeping record undated"
        );
    }

    TransactionRecord {
        date,
        description: raw.description,
        amount: raw.amount.as_deref().and_then(amount_value),
        balance: raw.balance.as_deref().and_then(amount_value),
        source_id: raw.source_id,
    }
}

/// Parse extracted statement pages into Chase debit transactions.
///
/// `statement_year` is required because rows are MM/DD.
pub fn parse_chase_debit_pages<S: AsRef<str>>(
    pages: &[S],
    source_id: &str,
    statement_year: i32,
    layout: &StatementLayout,
) -> Vec<TransactionRecord> {
    let mut assembler = TransactionAssembler::new(layout, source_id);
    for page in pages {
        assembler.push_page(page.as_ref());
    }

    assembler
        .finish()
        .into_iter()
        .map(|raw| normalize(raw, statement_year))
        .collect()
}

/// Same as [`parse_chase_debit_pages`] for a single block of text.
pub fn parse_chase_debit_text(
    text: &str,
    source_id: &str,
    statement_year: i32,
    layout: &StatementLayout,
) -> Vec<TransactionRecord> {
    parse_chase_debit_pages(&[text], source_id, statement_year, layout)
}

/// File name used as the record's source id.
pub fn source_id_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Extract and parse one statement document.
pub fn parse_chase_debit_statement(
    path: &Path,
    source: &dyn PageSource,
    layout: &StatementLayout,
) -> Result<Vec<TransactionRecord>, IngestError> {
    let source_id = source_id_for(path);
    let year = resolve_year(&source_id);

    let pages = source
        .pages(path)
        .map_err(|e| IngestError::DocumentUnreadable {
            source_id: source_id.clone(),
            reason: format!("{e:#}"),
        })?;

    let records = parse_chase_debit_pages(&pages, &source_id, year.year, layout);
    debug!(source = %source_id, pages = pages.len(), records = records.len(), "parsed statement");
    Ok(records)
}

/// Parse several statements and merge them by date. Unreadable documents are
/// reported in the outcome and do not stop the batch.
pub fn parse_chase_debit_statements(
    paths: &[PathBuf],
    source: &dyn PageSource,
    layout: &StatementLayout,
) -> MergeOutcome {
    merge_statements(paths.iter().map(|path| {
        (
            source_id_for(path),
            parse_chase_debit_statement(path, source, layout),
        )
    }))
}
