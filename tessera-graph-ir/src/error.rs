//! Error types for identifier construction

use thiserror::Error;

/// A string could not be turned into a named identifier (absolute IRI)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed IRI <{iri}>: {reason}")]
pub struct MalformedIdentifierError {
    /// The rejected input, verbatim
    pub iri: String,
    /// Why it was rejected
    pub reason: MalformedReason,
}

/// Reason a string was rejected as an IRI
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("empty string")]
    Empty,

    #[error("missing scheme")]
    MissingScheme,

    #[error("invalid scheme")]
    InvalidScheme,

    #[error("forbidden character {0:?}")]
    ForbiddenChar(char),
}

impl MalformedIdentifierError {
    pub(crate) fn new(iri: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            iri: iri.into(),
            reason,
        }
    }
}

/// Result type for identifier operations
pub type Result<T> = std::result::Result<T, MalformedIdentifierError>;
