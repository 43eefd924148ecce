//! Row subject strategies

use tabgraph_ir::Term;
use uuid::Uuid;

use crate::materialize::{is_null_sentinel, normalize_identifier};

/// How each row's subject identifier is derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectStrategy {
    /// `prefix` + the value of an identifier column
    Column {
        column: usize,
        prefix: String,
        /// Normalize the cell before prefixing
        normalize: bool,
    },
    /// `prefix` + a random UUID, for sources without an identifier column
    Generated { prefix: String },
}

impl SubjectStrategy {
    /// Subject from a normalized identifier column
    pub fn column(column: usize, prefix: impl Into<String>) -> Self {
        SubjectStrategy::Column {
            column,
            prefix: prefix.into(),
            normalize: true,
        }
    }

    /// Subject from a freshly generated UUID
    pub fn generated(prefix: impl Into<String>) -> Self {
        SubjectStrategy::Generated {
            prefix: prefix.into(),
        }
    }

    /// The column read by this strategy, if any
    pub fn source_column(&self) -> Option<usize> {
        match self {
            SubjectStrategy::Column { column, .. } => Some(*column),
            SubjectStrategy::Generated { .. } => None,
        }
    }

    /// Materialize the subject for a row
    ///
    /// `cell` is the identifier column's value (ignored for generated
    /// subjects). Returns `None` when the identifier cell holds no data.
    pub fn materialize(&self, cell: Option<&str>) -> Option<Term> {
        match self {
            SubjectStrategy::Column {
                prefix, normalize, ..
            } => {
                let cell = cell.filter(|c| !is_null_sentinel(c))?.trim();
                let local = if *normalize {
                    normalize_identifier(cell)
                } else {
                    cell.to_string()
                };
                if local.is_empty() {
                    return None;
                }
                Some(Term::iri(format!("{prefix}{local}")))
            }
            SubjectStrategy::Generated { prefix } => {
                Some(Term::iri(format!("{prefix}{}", Uuid::new_v4())))
            }
        }
    }
}
