//! Intake violation errors.

use thiserror::Error;

/// Ways a registration or document request can be malformed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeViolation {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("a document name is required")]
    UnnamedDocument,

    #[error("document '{name}' has unknown kind '{kind}'")]
    UnknownDocumentKind { name: String, kind: String },
}
