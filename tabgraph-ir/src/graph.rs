//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` to preserve duplicates (bag semantics).
//! Call `dedupe()` explicitly if you want set semantics.

use crate::{BlankId, Term, Triple};
use std::collections::BTreeSet;

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: pattern templates and column rules return small graphs
///   that callers concatenate; nothing is deduplicated along the way.
/// - **Explicit deduplication**: Call `dedupe()` if you want set semantics.
/// - **Deterministic output**: `dedupe()` also leaves the triples in SPO order.
///
/// # Example
///
/// ```
/// use tabgraph_ir::{Graph, Term};
///
/// let mut graph = Graph::new();
///
/// graph.add_triple(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
///
/// graph.add_triple(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
/// assert_eq!(graph.len(), 2);
///
/// graph.dedupe();
/// assert_eq!(graph.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Append every triple of `other`, keeping duplicates
    pub fn merge(&mut self, other: Graph) {
        self.triples.extend(other.triples);
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Remove duplicate triples (apply set semantics)
    pub fn dedupe(&mut self) {
        // Sort first to group duplicates
        self.triples.sort();
        self.triples.dedup();
    }

    /// Objects of every triple matching `subject` and `predicate`, in
    /// insertion order
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| &t.s == subject && t.p.as_iri() == Some(predicate))
            .map(|t| &t.o)
    }

    /// Triples whose predicate is `predicate`
    pub fn with_predicate<'a>(
        &'a self,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.p.as_iri() == Some(predicate))
    }

    /// Get all unique subjects in the graph
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Get every distinct blank node mentioned in the graph
    pub fn blank_nodes(&self) -> BTreeSet<&BlankId> {
        self.triples
            .iter()
            .flat_map(|t| [t.s.as_blank(), t.o.as_blank()])
            .flatten()
            .collect()
    }

}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
