//! Column mapping rule
//!
//! One rule maps one input column to zero or more triples that share a
//! subject and a predicate.

use tabgraph_ir::{Graph, Term, Triple};

use super::ExtractionFunction;
use crate::materialize::extract;

/// Maps a single column to `subject predicate object` triples
///
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ColumnMappingRule {
    source_column: usize,
    predicate: Term,
    extract: ExtractionFunction,
}

impl ColumnMappingRule {
    /// Create a rule for column `source_column`
    pub fn new(
        source_column: usize,
        predicate: impl AsRef<str>,
        extract: impl Into<ExtractionFunction>,
    ) -> Self {
        Self {
            source_column,
            predicate: Term::iri(predicate),
            extract: extract.into(),
        }
    }

    /// Zero-based index of the column this rule reads
    pub fn source_column(&self) -> usize {
        self.source_column
    }

    /// Predicate IRI of every produced triple
    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    /// The extraction function
    pub fn extraction(&self) -> &ExtractionFunction {
        &self.extract
    }

    /// Produce the triples for one cell of this rule's column
    pub fn apply(&self, subject: &Term, cell: &str) -> Graph {
        extract(cell, self)
            .into_iter()
            .map(|object| Triple::new(subject.clone(), self.predicate.clone(), object))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{IdentifierExtraction, LiteralExtraction};
    use tabgraph_vocab::dcterms;

    #[test]
    fn test_apply_shares_subject_and_predicate() {
        let rule = ColumnMappingRule::new(
            3,
            dcterms::CREATOR,
            IdentifierExtraction::new()
                .with_delimiter("||")
                .with_prefix("http://example.com/people/"),
        );
        let subject = Term::iri("http://example.com/dataset/1");

        let graph = rule.apply(&subject, "Ann Lee||Bo Chen");
        assert_eq!(graph.len(), 2);
        for triple in &graph {
            assert_eq!(triple.s, subject);
            assert_eq!(triple.p.as_iri(), Some(dcterms::CREATOR));
        }
        let objects: Vec<_> = graph.objects(&subject, dcterms::CREATOR).collect();
        assert_eq!(
            objects,
            vec![
                &Term::iri("http://example.com/people/Ann-Lee"),
                &Term::iri("http://example.com/people/Bo-Chen"),
            ]
        );
    }

    #[test]
    fn test_apply_null_cell_is_empty() {
        let rule = ColumnMappingRule::new(1, dcterms::TITLE, LiteralExtraction::new());
        let graph = rule.apply(&Term::iri("http://example.com/s"), "N/A");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_accessors() {
        let rule = ColumnMappingRule::new(7, dcterms::TITLE, LiteralExtraction::new());
        assert_eq!(rule.source_column(), 7);
        assert_eq!(rule.predicate().as_iri(), Some(dcterms::TITLE));
        assert!(rule.extraction().is_literal());
    }
}
