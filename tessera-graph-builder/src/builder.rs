//! Graph-level builder: owns the accumulator and starts new subjects

use crate::config::BuilderConfig;
use crate::error::Result;
use crate::resource::ResourceBuilder;
use crate::session::Session;
use crate::subject::SubjectSpec;
use std::sync::Arc;
use tessera_graph_ir::{Graph, Iri, Resource, SimpleValueFactory, ValueFactory};

/// Builds a set of statements through [`ResourceBuilder`]s
///
/// Every `ResourceBuilder` handed out writes into this builder's accumulator.
/// Builders are single-threaded (`!Send`); finish a session before passing
/// the resulting [`Graph`] to other threads.
///
/// # Example
///
/// ```
/// use tessera_graph_builder::GraphBuilder;
/// use tessera_graph_ir::Iri;
///
/// let person = Iri::parse("http://xmlns.com/foaf/0.1/Person")?;
/// let name = Iri::parse("http://xmlns.com/foaf/0.1/name")?;
///
/// let builder = GraphBuilder::new();
/// builder.instance_of(&person).add(&name, "Alice");
/// builder.uri_str("urn:bob")?.add(&name, "Bob");
///
/// assert_eq!(builder.graph().len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    session: Session,
}

impl GraphBuilder {
    /// Empty builder using the shared default value factory
    pub fn new() -> Self {
        Self::with_parts(SimpleValueFactory::shared(), BuilderConfig::default())
    }

    pub fn with_factory(factory: Arc<dyn ValueFactory>) -> Self {
        Self::with_parts(factory, BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_parts(SimpleValueFactory::shared(), config)
    }

    pub fn with_parts(factory: Arc<dyn ValueFactory>, config: BuilderConfig) -> Self {
        Self {
            session: Session::new(factory, config),
        }
    }

    /// Return an independent copy of the statements built so far
    pub fn graph(&self) -> Graph {
        self.session.snapshot()
    }

    /// Consume the builder and return its graph
    ///
    /// Copies only if some `ResourceBuilder` from this session is still alive.
    pub fn into_graph(self) -> Graph {
        self.session.into_graph()
    }

    /// Clear the accumulated statements; the builder stays usable
    pub fn reset(&self) {
        self.session.clear();
    }

    pub fn len(&self) -> usize {
        self.session.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn value_factory(&self) -> &Arc<dyn ValueFactory> {
        self.session.factory()
    }

    pub fn config(&self) -> &BuilderConfig {
        self.session.config()
    }

    /// Builder for a named individual; asserts nothing
    pub fn uri(&self, iri: &Iri) -> ResourceBuilder {
        self.bind(None, Resource::Iri(iri.clone()))
    }

    /// Builder for the individual named by `iri`; asserts nothing
    ///
    /// The string goes through the config (prefixes, base) and then the
    /// value factory, whose `MalformedIdentifierError` is returned unchanged.
    pub fn uri_str(&self, iri: &str) -> Result<ResourceBuilder> {
        self.instance_with(None, iri)
    }

    /// Un-typed anonymous individual
    pub fn instance(&self) -> ResourceBuilder {
        self.bind(None, self.fresh_blank())
    }

    /// Anonymous individual of type `ty`; inserts `(_:b, rdf:type, ty)`
    pub fn instance_of(&self, ty: &Iri) -> ResourceBuilder {
        self.bind(Some(ty), self.fresh_blank())
    }

    /// Builder for `subject`, optionally asserting its type
    ///
    /// An absent subject becomes a fresh blank node. With `ty` of `None` the
    /// accumulator is left untouched.
    pub fn instance_with(
        &self,
        ty: Option<&Iri>,
        subject: impl Into<SubjectSpec>,
    ) -> Result<ResourceBuilder> {
        let subject = match subject.into() {
            SubjectSpec::Absent => self.fresh_blank(),
            SubjectSpec::Named(raw) => Resource::Iri(self.session.iri(&raw)?),
            SubjectSpec::Iri(iri) => Resource::Iri(iri),
            SubjectSpec::Resource(resource) => resource,
        };
        Ok(self.bind(ty, subject))
    }

    fn fresh_blank(&self) -> Resource {
        Resource::Blank(self.session.factory().create_blank())
    }

    fn bind(&self, ty: Option<&Iri>, subject: Resource) -> ResourceBuilder {
        if let Some(ty) = ty {
            self.session.insert_type(&subject, ty);
        }
        tracing::debug!(subject = %subject, typed = ty.is_some(), "subject started");
        ResourceBuilder::new(self.session.clone(), subject)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
