use chrono::NaiveDate;
use ledgerline_ingest::{MergeOutcome, TransactionRecord};

/// Earliest and latest dated transaction.
pub fn date_range(records: &[TransactionRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter_map(|r| r.date);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

fn cell<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_record(r: &TransactionRecord) -> String {
    format!(
        "{:<10}  {:>12}  {:>12}  {}  [{}]",
        cell(r.date),
        cell(r.amount),
        cell(r.balance),
        r.description,
        r.source_id
    )
}

pub fn print_summary(outcome: &MergeOutcome, sample: usize) {
    for s in &outcome.skipped {
        println!("Skipped {}: {}", s.source_id, s.error);
    }

    if outcome.records.is_empty() {
        println!("No transactions extracted");
        return;
    }

    println!("\nExtracted {} transactions", outcome.records.len());
    match date_range(&outcome.records) {
        Some((lo, hi)) => println!("Date range: {} to {}", lo, hi),
        None => println!("Date range: (no valid dates)"),
    }

    if sample > 0 {
        println!("\nSample transactions:");
        for r in outcome.records.iter().take(sample) {
            println!("{}", format_record(r));
        }
    }
}
