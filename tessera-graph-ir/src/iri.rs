//! Named identifiers (IRIs) and subject resources
//!
//! An [`Iri`] is always absolute and expanded. A [`Resource`] is anything
//! that may appear in subject position: a named IRI or a blank node.

use crate::error::{MalformedIdentifierError, MalformedReason, Result};
use crate::BlankId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Returns true if the IRI is absolute (has an RFC 3986 scheme).
///
/// A scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` followed by `:`.
pub fn is_absolute(iri: &str) -> bool {
    match iri.find(':') {
        Some(colon_pos) => is_scheme(&iri[..colon_pos]),
        None => false,
    }
}

fn is_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme.as_bytes()[0].is_ascii_alphabetic()
        && scheme
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'-' || b == b'.')
}

/// Characters that may never appear unescaped in an IRI
fn is_forbidden(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
}

/// Check that `iri` is an absolute IRI this crate accepts.
pub fn validate(iri: &str) -> Result<()> {
    if iri.is_empty() {
        return Err(MalformedIdentifierError::new(iri, MalformedReason::Empty));
    }
    if let Some(c) = iri.chars().find(|c| is_forbidden(*c)) {
        return Err(MalformedIdentifierError::new(
            iri,
            MalformedReason::ForbiddenChar(c),
        ));
    }
    match iri.find(':') {
        None => Err(MalformedIdentifierError::new(
            iri,
            MalformedReason::MissingScheme,
        )),
        Some(colon_pos) if !is_scheme(&iri[..colon_pos]) => Err(MalformedIdentifierError::new(
            iri,
            MalformedReason::InvalidScheme,
        )),
        Some(_) => Ok(()),
    }
}

/// A validated, absolute IRI
///
/// Two IRIs built from the same string are equal; cloning shares storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(Arc<str>);

impl Iri {
    /// Parse and validate an IRI
    pub fn parse(iri: impl AsRef<str>) -> Result<Self> {
        let iri = iri.as_ref();
        validate(iri)?;
        Ok(Iri(Arc::from(iri)))
    }

    /// Wrap a string without validating it
    ///
    /// Intended for IRI constants such as those in `tessera_vocab`.
    pub fn new_unchecked(iri: impl AsRef<str>) -> Self {
        Iri(Arc::from(iri.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Iri {
    type Error = MalformedIdentifierError;

    fn try_from(value: String) -> Result<Self> {
        Iri::parse(value)
    }
}

impl TryFrom<&str> for Iri {
    type Error = MalformedIdentifierError;

    fn try_from(value: &str) -> Result<Self> {
        Iri::parse(value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.to_string()
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A subject-position term: named IRI or anonymous blank node
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Iri(Iri),
    Blank(BlankId),
}

impl Resource {
    pub fn is_iri(&self) -> bool {
        matches!(self, Resource::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Resource::Blank(_))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Resource::Iri(iri) => Some(iri),
            Resource::Blank(_) => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Resource::Blank(id) => Some(id),
            Resource::Iri(_) => None,
        }
    }
}

impl From<Iri> for Resource {
    fn from(iri: Iri) -> Self {
        Resource::Iri(iri)
    }
}

impl From<BlankId> for Resource {
    fn from(id: BlankId) -> Self {
        Resource::Blank(id)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Iri(iri) => write!(f, "{}", iri),
            Resource::Blank(id) => write!(f, "{}", id),
        }
    }
}
