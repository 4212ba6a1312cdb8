use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction as read off the page, before dates and amounts are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// `MM/DD` as printed on the statement.
    pub partial_date: String,
    pub description: String,
    pub amount: Option<String>,
    pub balance: Option<String>,
    pub source_id: String,
}

/// Normalized output of statement parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// `None` when the printed date does not form a calendar date.
    pub date: Option<NaiveDate>,
    pub description: String,
    /// Negative means withdrawal.
    pub amount: Option<Decimal>,
    /// Running balance after the transaction.
    pub balance: Option<Decimal>,
    /// Originating document (file name).
    #[serde(rename = "source_file")]
    pub source_id: String,
}
