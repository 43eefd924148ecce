//! TripleSink trait for streaming mapped output
//!
//! Row mapping produces one small graph per row. A sink lets the caller
//! decide where those triples go: an in-memory [`Graph`], a counter, or a
//! writer owned by the orchestration layer.

use crate::{Graph, Triple};

/// Destination for triples produced by mapping
///
/// # Example
///
/// ```
/// use tabgraph_ir::{Graph, Term, Triple, TripleSink};
///
/// let mut sink = Graph::new();
/// sink.emit(Triple::new(
///     Term::iri("http://example.org/alice"),
///     Term::iri("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// ));
/// assert_eq!(sink.len(), 1);
/// ```
pub trait TripleSink {
    /// Accept a single triple
    fn emit(&mut self, triple: Triple);

    /// Accept every triple of a graph
    ///
    /// Default implementation emits triples one by one in graph order.
    fn emit_graph(&mut self, graph: Graph) {
        for triple in graph {
            self.emit(triple);
        }
    }
}

impl TripleSink for Graph {
    fn emit(&mut self, triple: Triple) {
        self.add(triple);
    }

    fn emit_graph(&mut self, graph: Graph) {
        self.merge(graph);
    }
}

/// A sink that only counts what it receives
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    /// Triples received so far
    pub triples: usize,
}

impl TripleSink for CountingSink {
    fn emit(&mut self, _triple: Triple) {
        self.triples += 1;
    }

    fn emit_graph(&mut self, graph: Graph) {
        self.triples += graph.len();
    }
}
