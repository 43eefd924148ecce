//! Pattern bindings
//!
//! A binding attaches one pattern template to a row: each pattern parameter
//! is fed from an [`ArgSource`] evaluated against the row.

use tabgraph_ir::Term;

use super::ExtractionFunction;
use crate::error::{MappingError, MappingResult};
use crate::materialize::{extract_with, normalize_identifier};
use crate::pattern::PatternKind;

/// Where a pattern argument comes from
#[derive(Debug, Clone)]
pub enum ArgSource {
    /// The row's subject
    Subject,
    /// A fixed term
    Constant(Term),
    /// Terms extracted from a column; several values fan the binding out
    Column {
        column: usize,
        extract: ExtractionFunction,
    },
    /// `{subject}/{header}` where `header` is the normalized header name of
    /// `header_column`
    SubjectPath { header_column: usize },
}

impl ArgSource {
    /// Column read by this source, if any
    pub fn source_column(&self) -> Option<usize> {
        match self {
            ArgSource::Column { column, .. } => Some(*column),
            ArgSource::SubjectPath { header_column } => Some(*header_column),
            ArgSource::Subject | ArgSource::Constant(_) => None,
        }
    }

    /// Candidate values for this argument in one row
    ///
    /// Callers check column bounds first; an out-of-range column yields no
    /// values.
    pub(crate) fn resolve(&self, subject: &Term, header: &[&str], row: &[&str]) -> Vec<Term> {
        match self {
            ArgSource::Subject => vec![subject.clone()],
            ArgSource::Constant(term) => vec![term.clone()],
            ArgSource::Column { column, extract } => row
                .get(*column)
                .map(|cell| extract_with(cell, extract))
                .unwrap_or_default(),
            ArgSource::SubjectPath { header_column } => {
                let Some(base) = subject.as_iri() else {
                    return Vec::new();
                };
                header
                    .get(*header_column)
                    .map(|name| normalize_identifier(name))
                    .filter(|name| !name.is_empty())
                    .map(|name| vec![Term::iri(format!("{base}/{name}"))])
                    .unwrap_or_default()
            }
        }
    }
}

/// A pattern template with one argument source per parameter
#[derive(Debug, Clone)]
pub struct PatternBinding {
    kind: PatternKind,
    args: Vec<ArgSource>,
}

impl PatternBinding {
    /// Bind `args` to `kind`
    ///
    /// Fails with [`MappingError::PatternArity`] unless there is exactly one
    /// source per pattern parameter.
    pub fn new(kind: PatternKind, args: Vec<ArgSource>) -> MappingResult<Self> {
        if args.len() != kind.arity() {
            return Err(MappingError::PatternArity {
                pattern: kind.name(),
                expected: kind.arity(),
                found: args.len(),
            });
        }
        Ok(Self { kind, args })
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn args(&self) -> &[ArgSource] {
        &self.args
    }
}
