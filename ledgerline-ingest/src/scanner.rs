//! Currency token scanning.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use crate::config::StatementLayout;

/// One currency-formatted token and its byte span in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountToken<'t> {
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

/// All matches of `pattern` in `text`, left to right.
pub fn scan_amounts<'t>(pattern: &Regex, text: &'t str) -> Vec<AmountToken<'t>> {
    pattern
        .find_iter(text)
        .map(|m| AmountToken {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

impl StatementLayout {
    pub fn scan_amounts<'t>(&self, text: &'t str) -> Vec<AmountToken<'t>> {
        scan_amounts(&self.amount, text)
    }
}

/// Numeric value of a token such as `-1,234.56`. Thousands separators are dropped.
pub fn amount_value(token: &str) -> Option<Decimal> {
    Decimal::from_str(&token.replace(',', "")).ok()
}
