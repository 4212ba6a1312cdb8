//! Amount / balance disambiguation for a single line.
//!
//! Statement rows end with `AMOUNT BALANCE`, so the last two currency tokens
//! on a line are taken as those columns and everything before the amount is
//! description. A lone token is read as the balance.

use crate::scanner::AmountToken;

/// Placeholder amount for a line that only shows a balance.
pub const ZERO_AMOUNT: &str = "0.00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'t> {
    pub description: &'t str,
    /// `None` means no amount was observed, which is not the same as zero.
    pub amount: Option<String>,
    pub balance: Option<String>,
}

/// Split `text` into description, amount and balance using `tokens`, the
/// currency tokens scanned from that same text.
pub fn resolve_amounts<'t>(text: &'t str, tokens: &[AmountToken<'t>]) -> Resolution<'t> {
    match tokens {
        [] => Resolution {
            description: text.trim(),
            amount: None,
            balance: None,
        },
        [balance] => Resolution {
            description: text[..balance.start].trim(),
            amount: Some(ZERO_AMOUNT.to_string()),
            balance: Some(balance.text.to_string()),
        },
        [.., amount, balance] => {
            // The amount string may also occur earlier in the description
            // (e.g. "PAYMENT 45.00 45.00 1,000.00"); split at the occurrence
            // nearest the balance.
            let split = text[..balance.start]
                .rfind(amount.text)
                .unwrap_or(amount.start);
            Resolution {
                description: text[..split].trim(),
                amount: Some(amount.text.to_string()),
                balance: Some(balance.text.to_string()),
            }
        }
    }
}
