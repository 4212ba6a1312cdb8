//! Line-by-line transaction assembly.
//!
//! A transaction starts on a date-prefixed line and absorbs every following
//! non-noise line until the next date-prefixed line. Wrapped descriptions put
//! the amount and balance on a later line; the first such line that carries
//! currency tokens supplies them.

use std::mem;

use tracing::debug;

use crate::classify::LineKind;
use crate::config::StatementLayout;
use crate::resolve::{Resolution, resolve_amounts};
use crate::types::RawRecord;

#[derive(Debug)]
struct InProgressRecord {
    partial_date: String,
    description: Vec<String>,
    amount: Option<String>,
    balance: Option<String>,
}

impl InProgressRecord {
    fn start(partial_date: &str, resolution: Resolution<'_>) -> Self {
        let mut record = Self {
            partial_date: partial_date.to_string(),
            description: Vec::new(),
            amount: resolution.amount,
            balance: resolution.balance,
        };
        record.push_description(resolution.description);
        record
    }

    fn push_description(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.description.push(fragment.to_string());
        }
    }

    fn absorb(&mut self, line: &str, layout: &StatementLayout) {
        if self.amount.is_none() {
            let tokens = layout.scan_amounts(line);
            if !tokens.is_empty() {
                let resolution = resolve_amounts(line, &tokens);
                self.amount = resolution.amount;
                self.balance = resolution.balance;
                self.push_description(resolution.description);
                return;
            }
        }
        self.push_description(line);
    }

    fn finish(self, source_id: &str) -> RawRecord {
        RawRecord {
            partial_date: self.partial_date,
            description: self.description.join(" ").trim().to_string(),
            amount: self.amount,
            balance: self.balance,
            source_id: source_id.to_string(),
        }
    }
}

#[derive(Debug, Default)]
enum AssemblerState {
    #[default]
    Idle,
    Accumulating(InProgressRecord),
}

/// Stateful assembler for one document. Feed lines in reading order, page
/// after page, then call [`TransactionAssembler::finish`].
#[derive(Debug)]
pub struct TransactionAssembler<'l> {
    layout: &'l StatementLayout,
    source_id: String,
    state: AssemblerState,
    records: Vec<RawRecord>,
}

impl<'l> TransactionAssembler<'l> {
    pub fn new(layout: &'l StatementLayout, source_id: impl Into<String>) -> Self {
        Self {
            layout,
            source_id: source_id.into(),
            state: AssemblerState::Idle,
            records: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match self.layout.classify(line) {
            LineKind::Noise => {}
            LineKind::TransactionStart {
                partial_date,
                remainder,
            } => {
                let tokens = self.layout.scan_amounts(remainder);
                let next = InProgressRecord::start(partial_date, resolve_amounts(remainder, &tokens));
                let previous = mem::replace(&mut self.state, AssemblerState::Accumulating(next));
                if let AssemblerState::Accumulating(done) = previous {
                    self.records.push(done.finish(&self.source_id));
                }
            }
            LineKind::Continuation(text) => match &mut self.state {
                AssemblerState::Accumulating(current) => current.absorb(text, self.layout),
                AssemblerState::Idle => {
                    debug!(source = %self.source_id, line = text, "dropping line before first transaction");
                }
            },
        }
    }

    /// Feed one page of extracted text.
    pub fn push_page(&mut self, page: &str) {
        for line in page.lines() {
            self.push_line(line);
        }
    }

    /// Whether a transaction is currently being assembled.
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, AssemblerState::Accumulating(_))
    }

    /// Emit the pending transaction, if any, and return everything assembled.
    pub fn finish(mut self) -> Vec<RawRecord> {
        if let AssemblerState::Accumulating(current) = mem::take(&mut self.state) {
            self.records.push(current.finish(&self.source_id));
        }
        self.records
    }
}

/// Assemble raw records from a complete line sequence.
pub fn assemble_lines<I, S>(layout: &StatementLayout, source_id: &str, lines: I) -> Vec<RawRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = TransactionAssembler::new(layout, source_id);
    for line in lines {
        assembler.push_line(line.as_ref());
    }
    assembler.finish()
}
