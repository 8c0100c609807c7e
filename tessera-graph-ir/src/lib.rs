//! In-memory RDF graph model for Tessera
//!
//! This crate provides the types statement builders write into:
//! terms, triples, the `Graph` accumulator and the `ValueFactory` that mints
//! identifiers and literals.
//!
//! # Key Design Principles
//!
//! 1. **Absolute IRIs only** - `Iri` values are validated by `Iri::parse` or a
//!    `ValueFactory`; `Iri::new_unchecked` exists for constants.
//!
//! 2. **Explicit datatypes** - Literals always carry a datatype. Plain strings
//!    use `xsd:string`, language-tagged strings use `rdf:langString`.
//!
//! 3. **Bag semantics by default** - `Graph` uses `Vec<Triple>` and keeps
//!    duplicates. Call `dedupe()` explicitly for set semantics.
//!
//! # Example
//!
//! ```
//! use tessera_graph_ir::{Graph, SimpleValueFactory, Term, ValueFactory};
//!
//! let vf = SimpleValueFactory::new();
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     vf.create_iri("http://example.org/alice").unwrap(),
//!     vf.create_iri("http://xmlns.com/foaf/0.1/name").unwrap(),
//!     Term::string("Alice"),
//! );
//! graph.add_triple(vf.create_blank(), vf.create_iri("urn:p").unwrap(), 42_i64);
//!
//! assert_eq!(graph.len(), 2);
//! ```

pub mod datatype;
pub mod error;
mod factory;
mod graph;
pub mod iri;
mod term;
mod triple;

pub use datatype::Datatype;
pub use error::{MalformedIdentifierError, MalformedReason};
pub use factory::{SimpleValueFactory, ValueFactory, DEFAULT_BLANK_PREFIX};
pub use graph::Graph;
pub use iri::{Iri, Resource};
pub use term::{BlankId, LiteralValue, Term};
pub use triple::Triple;
