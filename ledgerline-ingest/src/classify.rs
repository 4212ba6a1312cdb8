//! Line classification.

use crate::config::StatementLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Header, banner or summary label.
    Noise,
    /// A date-prefixed line that opens a new transaction.
    TransactionStart {
        partial_date: &'a str,
        remainder: &'a str,
    },
    /// Anything else; belongs to the transaction being assembled, if any.
    Continuation(&'a str),
}

impl StatementLayout {
    pub fn is_noise(&self, line: &str) -> bool {
        self.noise_prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }

    /// Classify a trimmed, non-empty line. Noise wins over a date prefix.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if self.is_noise(line) {
            return LineKind::Noise;
        }

        let Some(caps) = self.date_prefix.captures(line) else {
            return LineKind::Continuation(line);
        };
        let whole = caps.get_match();

        let partial_date = caps.get(1).map_or_else(|| whole.as_str().trim(), |m| m.as_str());
        LineKind::TransactionStart {
            partial_date,
            remainder: line[whole.end()..].trim(),
        }
    }
}
