//! Term materialization module
//!
//! This module turns raw cell text into RDF terms:
//!
//! - [`is_null_sentinel`] and [`normalize_identifier`] are the text-level
//!   building blocks
//! - [`extract`] applies a column rule to one cell

mod extract;
mod text;

pub use extract::{extract, extract_with};
pub use text::{
    is_null_sentinel, normalize_identifier, normalize_identifier_with, DEFAULT_PLACEHOLDER,
    NULL_SENTINELS,
};
