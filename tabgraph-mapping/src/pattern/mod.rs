//! Graph pattern templates
//!
//! Each pattern expands a fixed tuple of arguments into a fixed subgraph,
//! introducing fresh blank nodes for its intermediate structure. A pattern
//! call either emits its whole skeleton or nothing: when any required
//! argument is null (absent, empty, or a sentinel spelling such as `NA`) the
//! call logs one `error` event and returns an empty [`Graph`].
//!
//! | Pattern | Arguments |
//! |---|---|
//! | `qualified_association` | subject, agent, role |
//! | `observation` | subject, observed property, value, unit |
//! | `temporal_interval` | subject, start, end |
//! | `geometry` | subject, wkt |
//! | `concept` | subject, label, scheme |
//! | `agent` | subject, agent type, name |

mod templates;

use serde::{Deserialize, Serialize};
use tabgraph_ir::{Graph, Term};

use crate::error::{MappingError, MappingResult};
use crate::materialize::is_null_sentinel;

pub use templates::{
    agent, concept, geometry, observation, qualified_association, temporal_interval,
};

/// The pattern template library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    QualifiedAssociation,
    Observation,
    TemporalInterval,
    Geometry,
    Concept,
    Agent,
}

impl PatternKind {
    /// Every pattern in the library
    pub const ALL: [PatternKind; 6] = [
        PatternKind::QualifiedAssociation,
        PatternKind::Observation,
        PatternKind::TemporalInterval,
        PatternKind::Geometry,
        PatternKind::Concept,
        PatternKind::Agent,
    ];

    /// Pattern name as used in mapping documents and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::QualifiedAssociation => "qualified_association",
            PatternKind::Observation => "observation",
            PatternKind::TemporalInterval => "temporal_interval",
            PatternKind::Geometry => "geometry",
            PatternKind::Concept => "concept",
            PatternKind::Agent => "agent",
        }
    }

    /// Look up a pattern by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Like [`from_name`](Self::from_name), but unknown names are an error
    pub fn parse(name: &str) -> MappingResult<Self> {
        Self::from_name(name).ok_or_else(|| MappingError::UnknownPattern(name.to_string()))
    }

    /// Parameter names, in argument order. The first is always the subject.
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            PatternKind::QualifiedAssociation => &["subject", "agent", "role"],
            PatternKind::Observation => &["subject", "observed_property", "value", "unit"],
            PatternKind::TemporalInterval => &["subject", "start", "end"],
            PatternKind::Geometry => &["subject", "wkt"],
            PatternKind::Concept => &["subject", "label", "concept_scheme"],
            PatternKind::Agent => &["subject", "agent_type", "name"],
        }
    }

    /// Number of required arguments
    pub fn arity(self) -> usize {
        self.parameters().len()
    }

    /// Expand the pattern
    ///
    /// `args` lines up with [`parameters`](Self::parameters); a `None` or a
    /// missing trailing argument counts as null. The subject must be an IRI
    /// or blank node.
    pub fn expand(self, args: &[Option<&Term>]) -> Graph {
        let params = self.parameters();

        let missing: Vec<&str> = params
            .iter()
            .enumerate()
            .filter(|(i, _)| args.get(*i).copied().flatten().map_or(true, is_null_term))
            .map(|(_, name)| *name)
            .collect();
        if !missing.is_empty() {
            tracing::error!(
                pattern = self.name(),
                missing = %missing.join(", "),
                "{} requires {}",
                self.name(),
                params.join(", ")
            );
            return Graph::new();
        }

        let present: Vec<&Term> = args.iter().take(params.len()).flatten().copied().collect();
        if let Some(subject) = present.first().filter(|s| s.is_literal()) {
            tracing::error!(
                pattern = self.name(),
                subject = %subject,
                "{} subject must be an IRI or blank node",
                self.name()
            );
            return Graph::new();
        }

        match (self, present.as_slice()) {
            (PatternKind::QualifiedAssociation, [s, agent, role]) => {
                templates::build_qualified_association(s, agent, role)
            }
            (PatternKind::Observation, [s, property, value, unit]) => {
                templates::build_observation(s, property, value, unit)
            }
            (PatternKind::TemporalInterval, [s, start, end]) => {
                templates::build_temporal_interval(s, start, end)
            }
            (PatternKind::Geometry, [s, wkt]) => templates::build_geometry(s, wkt),
            (PatternKind::Concept, [s, label, scheme]) => {
                templates::build_concept(s, label, scheme)
            }
            (PatternKind::Agent, [s, agent_type, name]) => {
                templates::build_agent(s, agent_type, name)
            }
            _ => Graph::new(),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Null check for pattern arguments: empty text or a sentinel spelling
fn is_null_term(term: &Term) -> bool {
    is_null_sentinel(term.text())
}
