//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Catalog has no records")]
    EmptyCatalog,

    #[error("Duplicate record name in catalog: {0}")]
    DuplicateRecord(String),

    #[error("Question on '{0}' has no options")]
    EmptyOptions(String),

    #[error("No record carries attribute '{0}' asked by a question")]
    UnusedAttribute(String),

    #[error("Question on '{0}' offers '{1}', which does not read as yes or no")]
    NonFlagOption(String, String),

    #[error("Reset keyword list is empty")]
    NoResetKeywords,

    #[error("Invalid conversation id: {0}")]
    InvalidConversationId(String),
}
