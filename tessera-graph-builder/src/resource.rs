//! Per-subject builder: asserts predicate/object pairs about one resource

use crate::error::Result;
use crate::session::{Session, RDFS_COMMENT, RDFS_LABEL};
use std::sync::Arc;
use tessera_graph_ir::{Datatype, Graph, Iri, Resource, Term, ValueFactory};

/// Adds statements about a single subject
///
/// Obtained from [`GraphBuilder`](crate::GraphBuilder). Each `add*` call
/// inserts exactly one statement per object into the shared accumulator and
/// returns the builder again so calls can be chained:
///
/// ```
/// use tessera_graph_builder::GraphBuilder;
/// use tessera_graph_ir::Iri;
///
/// let age = Iri::parse("http://xmlns.com/foaf/0.1/age")?;
/// let builder = GraphBuilder::new();
///
/// builder
///     .uri_str("http://example.org/alice")?
///     .add_label("Alice")
///     .add(&age, 30_i64)
///     .add_str("http://xmlns.com/foaf/0.1/nick", "ali")?;
///
/// assert_eq!(builder.len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    session: Session,
    subject: Resource,
}

impl ResourceBuilder {
    pub(crate) fn new(session: Session, subject: Resource) -> Self {
        Self { session, subject }
    }

    /// The subject every statement from this builder is about
    pub fn resource(&self) -> &Resource {
        &self.subject
    }

    pub fn value_factory(&self) -> &Arc<dyn ValueFactory> {
        self.session.factory()
    }

    /// Snapshot of the whole accumulator, not just this subject
    pub fn graph(&self) -> Graph {
        self.session.snapshot()
    }

    /// Insert `(subject, predicate, object)`
    pub fn add(&mut self, predicate: &Iri, object: impl Into<Term>) -> &mut Self {
        self.session.insert(&self.subject, predicate, object.into());
        self
    }

    /// Like [`add`](Self::add) with the predicate given as a string
    pub fn add_str(&mut self, predicate: &str, object: impl Into<Term>) -> Result<&mut Self> {
        let predicate = self.session.iri(predicate)?;
        Ok(self.add(&predicate, object))
    }

    /// One statement per object, in iteration order
    pub fn add_all<I>(&mut self, predicate: &Iri, objects: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        for object in objects {
            self.add(predicate, object);
        }
        self
    }

    pub fn add_type(&mut self, ty: &Iri) -> &mut Self {
        self.session.insert_type(&self.subject, ty);
        self
    }

    pub fn add_label(&mut self, label: &str) -> &mut Self {
        let literal = self.session.factory().create_literal(label);
        self.add(&RDFS_LABEL, literal)
    }

    pub fn add_comment(&mut self, comment: &str) -> &mut Self {
        let literal = self.session.factory().create_literal(comment);
        self.add(&RDFS_COMMENT, literal)
    }

    pub fn add_lang(&mut self, predicate: &Iri, value: &str, lang: &str) -> &mut Self {
        let literal = self.session.factory().create_lang_literal(value, lang);
        self.add(predicate, literal)
    }

    /// Typed literal from its lexical form; the form is not validated
    pub fn add_typed(&mut self, predicate: &Iri, lexical: &str, datatype: Datatype) -> &mut Self {
        let literal = self
            .session
            .factory()
            .create_typed_literal(lexical, datatype);
        self.add(predicate, literal)
    }

    /// Link to the subject of another builder
    pub fn add_resource(&mut self, predicate: &Iri, other: &ResourceBuilder) -> &mut Self {
        self.add(predicate, other.resource())
    }
}

#[cfg(test)]
mod tests {
    use crate::GraphBuilder;
    use tessera_graph_ir::{Datatype, Iri, Resource, Term};
    use tessera_vocab::{rdf, rdfs};

    fn iri(s: &str) -> Iri {
        Iri::parse(s).unwrap()
    }

    #[test]
    fn test_one_statement_per_add() {
        let builder = GraphBuilder::new();
        let p = iri("urn:p");
        let mut alice = builder.uri_str("urn:alice").unwrap();

        alice.add(&p, "a").add(&p, "b").add(&p, "a");

        let graph = builder.graph();
        assert_eq!(graph.len(), 3);
        assert!(graph.iter().all(|t| &t.s == alice.resource()));
    }

    #[test]
    fn test_add_str_resolves_predicate() {
        let builder = GraphBuilder::new();
        let mut b = builder.instance();
        b.add_str("urn:p", 1_i64).unwrap();

        let graph = builder.graph();
        assert_eq!(graph.triples()[0].p, iri("urn:p"));
        assert_eq!(graph.triples()[0].o, Term::integer(1));
    }

    #[test]
    fn test_add_str_malformed_predicate_inserts_nothing() {
        let builder = GraphBuilder::new();
        let mut b = builder.instance();
        assert!(b.add_str("has space", "x").is_err());
        assert!(builder.is_empty());
    }

    #[test]
    fn test_vocabulary_helpers() {
        let builder = GraphBuilder::new();
        let person = iri("http://example.org/Person");
        let name = iri("http://example.org/name");
        let born = iri("http://example.org/born");

        let mut b = builder.instance();
        b.add_type(&person)
            .add_label("Alice")
            .add_comment("example person")
            .add_lang(&name, "Alicia", "es")
            .add_typed(&born, "1990-01-01", Datatype::xsd_date());

        let graph = builder.graph();
        let s = b.resource();
        assert_eq!(graph.len(), 5);

        let types_pred = iri(rdf::TYPE);
        let types: Vec<_> = graph.objects(s, &types_pred).collect();
        assert_eq!(types, vec![&Term::Iri(person)]);

        let labels_pred = iri(rdfs::LABEL);
        let labels: Vec<_> = graph.objects(s, &labels_pred).collect();
        assert_eq!(labels, vec![&Term::string("Alice")]);

        let comments_pred = iri(rdfs::COMMENT);
        let comments: Vec<_> = graph.objects(s, &comments_pred).collect();
        assert_eq!(comments, vec![&Term::string("example person")]);

        let names: Vec<_> = graph.objects(s, &name).collect();
        assert_eq!(names, vec![&Term::lang_string("Alicia", "es")]);

        let births: Vec<_> = graph.objects(s, &born).collect();
        assert_eq!(
            births,
            vec![&Term::typed("1990-01-01", Datatype::xsd_date())]
        );
    }

    #[test]
    fn test_add_resource_links_subjects() {
        let builder = GraphBuilder::new();
        let knows = iri("http://xmlns.com/foaf/0.1/knows");

        let bob = builder.uri_str("urn:bob").unwrap();
        let mut alice = builder.instance();
        alice.add_resource(&knows, &bob);

        let graph = builder.graph();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.triples()[0].o, Term::iri("urn:bob"));
    }

    #[test]
    fn test_add_all() {
        let builder = GraphBuilder::new();
        let tag = iri("urn:tag");
        builder.instance().add_all(&tag, ["a", "b", "c"]);
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_interleaved_builders_share_accumulator() {
        let builder = GraphBuilder::new();
        let p = iri("urn:p");

        let mut a = builder.uri_str("urn:a").unwrap();
        let mut b = builder.uri_str("urn:b").unwrap();
        a.add(&p, 1_i64);
        b.add(&p, 2_i64);
        a.add(&p, 3_i64);

        let graph = builder.graph();
        let a_res = Resource::Iri(iri("urn:a"));
        assert_eq!(graph.about(&a_res).count(), 2);
        assert_eq!(graph.len(), 3);
        assert_eq!(a.graph(), graph);
    }

    #[test]
    fn test_value_factory_is_shared() {
        let builder = GraphBuilder::new();
        let child = builder.instance();
        assert!(std::sync::Arc::ptr_eq(
            builder.value_factory(),
            child.value_factory()
        ));
    }
}
