//! RDF triple: subject, predicate, object

use crate::{Iri, Resource, Term};
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// Field order gives the derived ordering: SPO lexicographic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Resource,
    /// Predicate (always an IRI)
    pub p: Iri,
    /// Object (any term)
    pub o: Term,
}

impl Triple {
    pub fn new(s: impl Into<Resource>, p: Iri, o: impl Into<Term>) -> Self {
        Self {
            s: s.into(),
            p,
            o: o.into(),
        }
    }

    /// True if this triple's predicate is `rdf:type`
    pub fn is_type_assertion(&self) -> bool {
        self.p.as_str() == tessera_vocab::rdf::TYPE
    }
}

impl std::fmt::Display for Triple {
    /// N-Triples style, including the terminating ` .`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
