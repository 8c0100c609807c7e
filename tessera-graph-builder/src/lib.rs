//! Fluent assembly of small RDF graphs
//!
//! A [`GraphBuilder`] owns a graph accumulator and a value factory. It hands
//! out [`ResourceBuilder`]s bound to one subject each, so a sequence of
//! statements about the same subject never repeats it:
//!
//! ```
//! use tessera_graph_builder::{BuilderConfig, GraphBuilder};
//! use tessera_graph_ir::Iri;
//!
//! let config = BuilderConfig::new()
//!     .with_prefix("foaf", "http://xmlns.com/foaf/0.1/")
//!     .with_standard_prefixes();
//! let builder = GraphBuilder::with_config(config);
//!
//! let person = Iri::parse("http://xmlns.com/foaf/0.1/Person")?;
//! let mut alice = builder.instance_with(Some(&person), "http://example.org/alice")?;
//! alice.add_str("foaf:name", "Alice")?.add_label("Alice");
//!
//! let graph = builder.graph();
//! assert_eq!(graph.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Builders share their accumulator through `Rc<RefCell<_>>` and are meant
//! for one caller on one thread. Snapshots taken with
//! [`GraphBuilder::graph`] are independent, owned [`Graph`] values.
//!
//! [`Graph`]: tessera_graph_ir::Graph

mod builder;
pub mod config;
pub mod error;
mod resource;
mod session;
mod subject;

pub use builder::GraphBuilder;
pub use config::BuilderConfig;
pub use error::{BuilderError, Result};
pub use resource::ResourceBuilder;
pub use subject::SubjectSpec;
