//! ledgerline-ingest: turn line-oriented statement text into transaction records.
//!
//! Pipeline: page text → [`TransactionAssembler`] (classify, resolve amounts,
//! join wrapped rows) → [`RawRecord`] → date/amount normalization →
//! [`merge_statements`] across documents.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod dates;
pub mod error;
pub mod merge;
pub mod parsers;
pub mod resolve;
pub mod scanner;
pub mod source;
pub mod types;

pub use assemble::{TransactionAssembler, assemble_lines};
pub use classify::LineKind;
pub use config::{LayoutConfig, StatementLayout};
pub use dates::{StatementYear, YearSource, reconstruct_date, resolve_year, resolve_year_or};
pub use error::IngestError;
pub use merge::{MergeOutcome, SkippedDocument, merge_statements};
pub use parsers::chase_debit::{
    parse_chase_debit_pages, parse_chase_debit_statement, parse_chase_debit_statements,
    parse_chase_debit_text,
};
pub use resolve::{Resolution, resolve_amounts};
pub use scanner::{AmountToken, amount_value, scan_amounts};
pub use source::{PageSource, TextFileSource};
pub use types::{RawRecord, TransactionRecord};
