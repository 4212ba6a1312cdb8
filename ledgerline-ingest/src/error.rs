use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The text-extraction collaborator could not produce lines for a document.
    #[error("could not read {source_id}: {reason}")]
    DocumentUnreadable { source_id: String, reason: String },

    #[error("invalid {name} pattern")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A pattern that matches `""` would turn every line into empty tokens.
    #[error("{name} pattern matches the empty string")]
    EmptyMatch { name: &'static str },
}
