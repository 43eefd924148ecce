//! Tabular data to RDF mapping
//!
//! This crate turns rows of a table (delimited text, spreadsheets, query
//! results) into RDF triples. It has two layers plus a driver:
//!
//! - **Extraction**: a [`ColumnMappingRule`] turns one cell into zero or more
//!   terms. Cells can be split on a delimiter, restricted to a capture
//!   pattern, and wrapped either as typed literals or as normalized
//!   identifiers under a prefix. Null sentinels (`NA`, `n/a`, empty, ...)
//!   produce nothing.
//! - **Patterns**: reusable subgraph templates ([`qualified_association`],
//!   [`observation`], [`temporal_interval`], [`geometry`], [`concept`],
//!   [`agent`]) that expand their arguments into a fixed shape with fresh
//!   blank nodes. A call with a null argument logs one `error` event and
//!   emits nothing.
//! - **Row mapping**: a [`RowMapper`] applies a subject strategy, row classes,
//!   constant links, column rules and pattern bindings to every row.
//!
//! # Usage
//!
//! Load a JSON mapping document with [`MappingLoader::from_json()`], then
//! call `compile()` to produce a [`RowMapper`]:
//!
//! ```
//! use tabgraph_mapping::MappingLoader;
//!
//! let mapper = MappingLoader::from_json(r#"{
//!     "subject": { "kind": "column", "column": 0, "prefix": "http://example.com/item/" },
//!     "columns": [{
//!         "column": 1,
//!         "predicate": "http://purl.org/dc/terms/created",
//!         "extract": {
//!             "kind": "literal",
//!             "delimiter": "||",
//!             "datatype": "http://www.w3.org/2001/XMLSchema#gYear"
//!         }
//!     }]
//! }"#)?
//! .compile()?;
//!
//! let graph = mapper.map_rows(&["id", "created"], [["a 1", "2020||NA||2021"]])?;
//! assert_eq!(graph.len(), 2);
//! # Ok::<(), tabgraph_mapping::MappingError>(())
//! ```
//!
//! Nothing here installs a `tracing` subscriber; diagnostics go to whatever
//! the application has configured.

pub mod error;
pub mod loader;
pub mod mapping;
pub mod materialize;
pub mod pattern;
pub mod row;

pub use error::{MappingError, MappingResult};
pub use loader::{MappingDocument, MappingLoader};
pub use mapping::{
    ArgSource, ColumnMappingRule, ExtractionFunction, IdentifierExtraction, LiteralExtraction,
    NoMatchPolicy, PatternBinding, SubjectStrategy,
};
pub use materialize::{extract, is_null_sentinel, normalize_identifier, normalize_identifier_with};
pub use pattern::{
    agent, concept, geometry, observation, qualified_association, temporal_interval, PatternKind,
};
pub use row::{MappedRow, MappingStats, RowMapper};
