//! State shared between a `GraphBuilder` and the `ResourceBuilder`s it hands out

use crate::config::BuilderConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, LazyLock};
use tessera_graph_ir::{Graph, Iri, Resource, Term, Triple, ValueFactory};

pub(crate) static RDF_TYPE: LazyLock<Iri> =
    LazyLock::new(|| Iri::new_unchecked(tessera_vocab::rdf::TYPE));
pub(crate) static RDFS_LABEL: LazyLock<Iri> =
    LazyLock::new(|| Iri::new_unchecked(tessera_vocab::rdfs::LABEL));
pub(crate) static RDFS_COMMENT: LazyLock<Iri> =
    LazyLock::new(|| Iri::new_unchecked(tessera_vocab::rdfs::COMMENT));

/// One assembly session: the accumulator plus the factory and config used to
/// fill it. Cloning shares all three.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    graph: Rc<RefCell<Graph>>,
    factory: Arc<dyn ValueFactory>,
    config: Rc<BuilderConfig>,
}

impl Session {
    pub(crate) fn new(factory: Arc<dyn ValueFactory>, config: BuilderConfig) -> Self {
        let mut graph = Graph::new();
        if let Some(base) = &config.base {
            graph.set_base(base.clone());
        }
        for (prefix, namespace) in &config.prefixes {
            graph.add_prefix(prefix.clone(), namespace.clone());
        }

        Self {
            graph: Rc::new(RefCell::new(graph)),
            factory,
            config: Rc::new(config),
        }
    }

    pub(crate) fn factory(&self) -> &Arc<dyn ValueFactory> {
        &self.factory
    }

    pub(crate) fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Resolve a raw string to an IRI: config expansion, then the factory
    pub(crate) fn iri(&self, raw: &str) -> Result<Iri> {
        let resolved = self.config.resolve(raw);
        Ok(self.factory.create_iri(&resolved)?)
    }

    pub(crate) fn insert(&self, s: &Resource, p: &Iri, o: Term) {
        tracing::trace!(subject = %s, predicate = %p, object = %o, "statement added");
        self.graph
            .borrow_mut()
            .add(Triple::new(s.clone(), p.clone(), o));
    }

    pub(crate) fn insert_type(&self, s: &Resource, ty: &Iri) {
        self.insert(s, &RDF_TYPE, Term::Iri(ty.clone()));
    }

    pub(crate) fn len(&self) -> usize {
        self.graph.borrow().len()
    }

    pub(crate) fn clear(&self) {
        let mut graph = self.graph.borrow_mut();
        let cleared = graph.len();
        graph.clear();
        tracing::debug!(cleared, "graph builder reset");
    }

    /// Independent copy of the accumulator
    pub(crate) fn snapshot(&self) -> Graph {
        let mut copy = self.graph.borrow().clone();
        if self.config.canonicalize_snapshots {
            copy.canonicalize();
        }
        tracing::debug!(triples = copy.len(), "graph snapshot taken");
        copy
    }

    /// Take the accumulator without copying when this is the last handle
    pub(crate) fn into_graph(self) -> Graph {
        let canonicalize = self.config.canonicalize_snapshots;
        match Rc::try_unwrap(self.graph) {
            Ok(cell) => {
                let mut graph = cell.into_inner();
                if canonicalize {
                    graph.canonicalize();
                }
                graph
            }
            Err(shared) => {
                let mut copy = shared.borrow().clone();
                if canonicalize {
                    copy.canonicalize();
                }
                copy
            }
        }
    }
}
