use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),

    #[error("invalid e-mail address: {0}")]
    InvalidEmail(String),
}
