//! The shapes a subject argument may take

use tessera_graph_ir::{BlankId, Iri, Resource};

/// Subject specification accepted by [`GraphBuilder::instance_with`]
///
/// Resolved once, at the call boundary:
/// - `Absent` mints a fresh blank node
/// - `Named` is resolved through the builder config and the value factory
/// - `Iri` and `Resource` are used as is
///
/// [`GraphBuilder::instance_with`]: crate::GraphBuilder::instance_with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubjectSpec {
    #[default]
    Absent,
    Named(String),
    Iri(Iri),
    Resource(Resource),
}

impl From<&str> for SubjectSpec {
    fn from(s: &str) -> Self {
        SubjectSpec::Named(s.to_string())
    }
}

impl From<String> for SubjectSpec {
    fn from(s: String) -> Self {
        SubjectSpec::Named(s)
    }
}

impl From<Iri> for SubjectSpec {
    fn from(iri: Iri) -> Self {
        SubjectSpec::Iri(iri)
    }
}

impl From<&Iri> for SubjectSpec {
    fn from(iri: &Iri) -> Self {
        SubjectSpec::Iri(iri.clone())
    }
}

impl From<Resource> for SubjectSpec {
    fn from(resource: Resource) -> Self {
        SubjectSpec::Resource(resource)
    }
}

impl From<&Resource> for SubjectSpec {
    fn from(resource: &Resource) -> Self {
        SubjectSpec::Resource(resource.clone())
    }
}

impl From<BlankId> for SubjectSpec {
    fn from(id: BlankId) -> Self {
        SubjectSpec::Resource(Resource::Blank(id))
    }
}

impl<T: Into<SubjectSpec>> From<Option<T>> for SubjectSpec {
    fn from(value: Option<T>) -> Self {
        value.map_or(SubjectSpec::Absent, Into::into)
    }
}
