//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` and keeps duplicates (bag semantics).
//! Call `dedupe()` explicitly if you want set semantics.

use crate::{Iri, Resource, Term, Triple};
use std::collections::BTreeMap;

/// A collection of RDF triples
///
/// `Clone` yields a fully independent copy; this is how builders hand out
/// snapshots of their accumulator.
///
/// # Example
///
/// ```
/// use tessera_graph_ir::{Graph, Iri, Term};
///
/// let mut graph = Graph::new();
///
/// graph.add_triple(
///     Iri::new_unchecked("http://example.org/alice"),
///     Iri::new_unchecked("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
///
/// // Sort + dedupe for deterministic set output
/// graph.canonicalize();
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    triples: Vec<Triple>,
    /// Base IRI that relative references were resolved against
    pub base: Option<String>,
    /// Prefix mappings (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: impl Into<Resource>, p: Iri, o: impl Into<Term>) {
        self.add(Triple::new(s, p, o));
    }

    /// Remove every triple; base and prefixes are kept
    pub fn clear(&mut self) {
        self.triples.clear();
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples whose subject is `subject`, in insertion order
    pub fn about<'a>(&'a self, subject: &'a Resource) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| &t.s == subject)
    }

    /// Objects of `(subject, predicate, ?)` in insertion order
    pub fn objects<'a>(
        &'a self,
        subject: &'a Resource,
        predicate: &'a Iri,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.about(subject)
            .filter(move |t| &t.p == predicate)
            .map(|t| &t.o)
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics)
    ///
    /// Sorts as a side effect.
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Sort and dedupe in one pass
    pub fn canonicalize(&mut self) {
        self.dedupe();
    }

    pub fn is_sorted(&self) -> bool {
        self.triples.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
