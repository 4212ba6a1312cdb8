//! Completing `MM/DD` statement dates with a year.

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSource {
    /// Leading four digits of the document name, e.g. `2024-03-statement.pdf`.
    SourceId,
    /// The document name carried no year; the caller's fallback was used.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementYear {
    pub year: i32,
    pub source: YearSource,
}

/// Year from the first four characters of `source_id`, or `fallback_year`.
pub fn resolve_year_or(source_id: &str, fallback_year: i32) -> StatementYear {
    let prefix: String = source_id.chars().take(4).collect();
    let from_name = (prefix.len() == 4 && prefix.bytes().all(|b| b.is_ascii_digit()))
        .then(|| prefix.parse::<i32>().ok())
        .flatten();

    match from_name {
        Some(year) => StatementYear {
            year,
            source: YearSource::SourceId,
        },
        None => StatementYear {
            year: fallback_year,
            source: YearSource::Fallback,
        },
    }
}

/// Year for a document, falling back to the current year with a warning.
pub fn resolve_year(source_id: &str) -> StatementYear {
    let resolved = resolve_year_or(source_id, Local::now().year());
    if resolved.source == YearSource::Fallback {
        warn!(
            source = source_id,
            year = resolved.year,
            "could not extract year from file name, using current year"
        );
    }
    resolved
}

/// `MM/DD` + year as a calendar date; `None` for impossible dates like `13/45`.
pub fn reconstruct_date(partial_date: &str, year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{partial_date}/{year:04}"), "%m/%d/%Y").ok()
}
