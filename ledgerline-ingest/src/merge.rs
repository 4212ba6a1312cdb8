//! Merging per-document results into one ordered collection.

use tracing::warn;

use crate::error::IngestError;
use crate::types::TransactionRecord;

/// A document left out of the merged output.
#[derive(Debug)]
pub struct SkippedDocument {
    pub source_id: String,
    pub error: IngestError,
}

#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub records: Vec<TransactionRecord>,
    pub skipped: Vec<SkippedDocument>,
}

/// Concatenate successfully parsed documents and order by date.
///
/// Failed documents are reported in [`MergeOutcome::skipped`] instead of
/// aborting the batch. Undated records sort last; ties keep input order.
pub fn merge_statements<I>(results: I) -> MergeOutcome
where
    I: IntoIterator<Item = (String, Result<Vec<TransactionRecord>, IngestError>)>,
{
    let mut outcome = MergeOutcome::default();

    for (source_id, result) in results {
        match result {
            Ok(records) => outcome.records.extend(records),
            Err(error) => {
                warn!(source = %source_id, error = %error, "skipped statement");
                outcome.skipped.push(SkippedDocument { source_id, error });
            }
        }
    }

    // sort_by_key is stable
    outcome.records.sort_by_key(|r| (r.date.is_none(), r.date));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: Option<(i32, u32, u32)>, description: &str, source: &str) -> TransactionRecord {
        TransactionRecord {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            description: description.to_string(),
            amount: None,
            balance: None,
            source_id: source.to_string(),
        }
    }

    fn descriptions(outcome: &MergeOutcome) -> Vec<&str> {
        outcome.records.iter().map(|r| r.description.as_str()).collect()
    }

    #[test]
    fn test_orders_by_date_with_undated_last() {
        let a = vec![
            record(Some((2024, 3, 5)), "a1", "a.pdf"),
            record(None, "a-undated", "a.pdf"),
            record(Some((2024, 3, 1)), "a2", "a.pdf"),
        ];
        let b = vec![
            record(Some((2024, 3, 1)), "b1", "b.pdf"),
            record(None, "b-undated", "b.pdf"),
            record(Some((2024, 2, 28)), "b2", "b.pdf"),
        ];

        let outcome = merge_statements([("a.pdf".to_string(), Ok(a)), ("b.pdf".to_string(), Ok(b))]);

        assert_eq!(
            descriptions(&outcome),
            vec!["b2", "a2", "b1", "a1", "a-undated", "b-undated"]
        );
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_failed_document_is_skipped() {
        let outcome = merge_statements([
            ("a.pdf".to_string(), Ok(vec![record(Some((2024, 1, 2)), "a", "a.pdf")])),
            (
                "broken.pdf".to_string(),
                Err(IngestError::DocumentUnreadable {
                    source_id: "broken.pdf".to_string(),
                    reason: "encrypted".to_string(),
                }),
            ),
            ("c.pdf".to_string(), Ok(vec![record(Some((2024, 1, 1)), "c", "c.pdf")])),
        ]);

        assert_eq!(descriptions(&outcome), vec!["c", "a"]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].source_id, "broken.pdf");
    }

    #[test]
    fn test_empty_inputs() {
        let outcome = merge_statements(Vec::new());
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());

        let outcome = merge_statements([("empty.pdf".to_string(), Ok(Vec::new()))]);
        assert!(outcome.records.is_empty());
    }
}
