//! Mapping structures
//!
//! The compiled, immutable pieces a [`crate::RowMapper`] is assembled from.
//! They are produced either directly through their builders or by the
//! [`crate::loader`] module from a JSON mapping document.

mod binding;
mod extraction;
mod rule;
mod subject;

pub use binding::{ArgSource, PatternBinding};
pub use extraction::{
    Capture, EntryOptions, ExtractionFunction, IdentifierExtraction, LiteralExtraction,
    NoMatchPolicy,
};
pub use rule::ColumnMappingRule;
pub use subject::SubjectStrategy;
