//! RDF graph intermediate representation for tabgraph
//!
//! This crate provides the term, triple and graph types that the mapping
//! engine produces. It does not parse, query or store graphs; `Display` on
//! terms and triples gives the N-Triples form.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype.
//!    Plain strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`.
//!
//! 3. **Bag semantics by default** - `Graph` keeps duplicates. Call
//!    `dedupe()` explicitly for set semantics.
//!
//! 4. **Fresh anonymous nodes** - `BlankId::fresh()` never repeats, so
//!    graphs built independently can be merged without label clashes.
//!
//! # Example
//!
//! ```
//! use tabgraph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! for triple in &graph {
//!     println!("{triple}");
//! }
//! ```

pub mod datatype;
mod graph;
mod sink;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use sink::{CountingSink, TripleSink};
pub use term::{BlankId, Term};
pub use triple::Triple;
