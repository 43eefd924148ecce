//! Mapping document loader
//!
//! Mappings are described as JSON documents (see [`MappingDocument`]) and
//! compiled into a [`RowMapper`]. Compilation validates everything up front:
//! capture patterns are compiled, pattern names resolved and argument counts
//! checked, so a mapper that compiles never fails on configuration while
//! rows are being read.
//!
//! For programmatic construction, build a [`MappingDocument`] and use
//! [`MappingLoader::from_document()`], or skip documents entirely and use the
//! [`RowMapper`] builders.

mod document;

pub use document::{
    ArgDoc, ColumnDoc, ConstantDoc, ExtractDoc, MappingDocument, PatternDoc, SubjectDoc, TermDoc,
};

use crate::error::{MappingError, MappingResult};
use crate::row::RowMapper;

/// Mapping document loader
pub struct MappingLoader {
    document: MappingDocument,
}

impl MappingLoader {
    /// Load from an already-built document
    pub fn from_document(document: MappingDocument) -> Self {
        Self { document }
    }

    /// Load from JSON text
    pub fn from_json(content: &str) -> MappingResult<Self> {
        let document =
            serde_json::from_str(content).map_err(|e| MappingError::Parse(e.to_string()))?;
        Ok(Self { document })
    }

    /// Load from a parsed JSON value
    pub fn from_value(value: serde_json::Value) -> MappingResult<Self> {
        let document =
            serde_json::from_value(value).map_err(|e| MappingError::Parse(e.to_string()))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &MappingDocument {
        &self.document
    }

    /// Compile the loaded document into a row mapper
    pub fn compile(self) -> MappingResult<RowMapper> {
        self.document.compile()
    }
}
