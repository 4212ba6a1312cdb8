//! Statement layout configuration.
//!
//! The layout names the lines to discard and the two patterns the parser
//! keys on. Defaults describe the Chase checking statement:
//!
//!   TRANSACTION DETAIL
//!          DATE        DESCRIPTION                                     AMOUNT     BALANCE
//!          04/22       Discover     E-Payment 8148   Web ID: ...       -15.00      53.70

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

pub const DEFAULT_DATE_PREFIX_PATTERN: &str = r"^(\d{2}/\d{2})\s";
pub const DEFAULT_AMOUNT_PATTERN: &str = r"-?\d{1,3}(?:,\d{3})*\.\d{2}";

const DEFAULT_NOISE_PREFIXES: &[&str] = &[
    "DATE",
    "DESCRIPTION",
    "AMOUNT",
    "BALANCE",
    "TRANSACTION DETAIL",
    "CHECKING SUMMARY",
    "SAVINGS SUMMARY",
    "Beginning Balance",
    "Ending Balance",
    "DEPOSITS AND ADDITIONS",
    "ATM & Debit Card Withdrawals",
    "Electronic Withdrawals",
    "Other Withdrawals",
    "Deposits and Additions",
    "Your account ending",
    "Page ",
];

/// User-editable layout description (loaded from TOML by the CLI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lines starting with any of these are discarded, even when they look like a transaction.
    pub noise_prefixes: Vec<String>,
    /// Matches the start of a transaction line. Capture group 1, when present, is the partial date.
    pub date_prefix_pattern: String,
    /// Matches one currency token.
    pub amount_pattern: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            noise_prefixes: DEFAULT_NOISE_PREFIXES.iter().map(|p| p.to_string()).collect(),
            date_prefix_pattern: DEFAULT_DATE_PREFIX_PATTERN.to_string(),
            amount_pattern: DEFAULT_AMOUNT_PATTERN.to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn compile(&self) -> Result<StatementLayout, IngestError> {
        let date_prefix = Regex::new(&self.date_prefix_pattern).map_err(|source| {
            IngestError::InvalidPattern {
                name: "date prefix",
                source,
            }
        })?;
        let amount = Regex::new(&self.amount_pattern).map_err(|source| {
            IngestError::InvalidPattern {
                name: "amount",
                source,
            }
        })?;
        if amount.is_match("") {
            return Err(IngestError::EmptyMatch { name: "amount" });
        }

        Ok(StatementLayout {
            noise_prefixes: self
                .noise_prefixes
                .iter()
                .filter(|p| !p.is_empty())
                .cloned()
                .collect(),
            date_prefix,
            amount,
        })
    }
}

/// Compiled form of [`LayoutConfig`], shared read-only by every document parse.
#[derive(Debug, Clone)]
pub struct StatementLayout {
    pub(crate) noise_prefixes: Vec<String>,
    pub(crate) date_prefix: Regex,
    pub(crate) amount: Regex,
}
