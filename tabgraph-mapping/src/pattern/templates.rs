//! The pattern skeletons
//!
//! `build_*` functions assume validated arguments; the public functions go
//! through [`PatternKind::expand`] so they share its null handling.

use tabgraph_ir::{Graph, Term};
use tabgraph_vocab::{dcat, geo, prov, qudt, rdf, sdo, skos, sosa, time};

use super::PatternKind;

fn iri(value: &str) -> Term {
    Term::iri(value)
}

/// A PROV qualified association
///
/// ```text
/// {subject} prov:qualifiedAssociation [
///     a prov:Association ;
///     prov:agent {agent} ;
///     dcat:hadRole {role}
/// ] .
/// ```
pub fn qualified_association(subject: &Term, agent: &Term, role: &Term) -> Graph {
    PatternKind::QualifiedAssociation.expand(&[Some(subject), Some(agent), Some(role)])
}

/// A SOSA observation with a QUDT result
///
/// ```text
/// {subject} sosa:isFeatureOfInterestOf [
///     a sosa:Observation ;
///     sosa:observedProperty {observed_property} ;
///     sosa:hasResult [
///         a sosa:Result ;
///         qudt:numericValue {value} ;
///         qudt:unit {unit}
///     ]
/// ] .
/// ```
pub fn observation(subject: &Term, observed_property: &Term, value: &Term, unit: &Term) -> Graph {
    PatternKind::Observation.expand(&[
        Some(subject),
        Some(observed_property),
        Some(value),
        Some(unit),
    ])
}

/// An OWL-Time interval
///
/// ```text
/// {subject} time:hasTime [
///     a time:Interval ;
///     time:intervalStarts {start} ;
///     time:intervalFinishes {end}
/// ] .
/// ```
pub fn temporal_interval(subject: &Term, start: &Term, end: &Term) -> Graph {
    PatternKind::TemporalInterval.expand(&[Some(subject), Some(start), Some(end)])
}

/// A GeoSPARQL geometry
///
/// ```text
/// {subject} geo:hasGeometry [
///     a geo:Geometry ;
///     geo:asWKT {wkt}
/// ] .
/// ```
pub fn geometry(subject: &Term, wkt: &Term) -> Graph {
    PatternKind::Geometry.expand(&[Some(subject), Some(wkt)])
}

/// A SKOS concept
///
/// ```text
/// {subject} a skos:Concept ;
///     skos:inScheme {concept_scheme} ;
///     skos:prefLabel {label} .
/// ```
pub fn concept(subject: &Term, label: &Term, concept_scheme: &Term) -> Graph {
    PatternKind::Concept.expand(&[Some(subject), Some(label), Some(concept_scheme)])
}

/// A schema.org agent, e.g. `agent_type` = schema:Person
///
/// ```text
/// {subject} a {agent_type} ;
///     schema:name {name} .
/// ```
pub fn agent(subject: &Term, agent_type: &Term, name: &Term) -> Graph {
    PatternKind::Agent.expand(&[Some(subject), Some(agent_type), Some(name)])
}

pub(super) fn build_qualified_association(subject: &Term, agent: &Term, role: &Term) -> Graph {
    let assoc = Term::fresh_blank();
    let mut g = Graph::new();
    g.add_triple(subject.clone(), iri(prov::QUALIFIED_ASSOCIATION), assoc.clone());
    g.add_triple(assoc.clone(), iri(rdf::TYPE), iri(prov::ASSOCIATION));
    g.add_triple(assoc.clone(), iri(prov::AGENT), agent.clone());
    g.add_triple(assoc, iri(dcat::HAD_ROLE), role.clone());
    g
}

pub(super) fn build_observation(
    subject: &Term,
    observed_property: &Term,
    value: &Term,
    unit: &Term,
) -> Graph {
    let obs = Term::fresh_blank();
    let result = Term::fresh_blank();
    let mut g = Graph::new();
    g.add_triple(obs.clone(), iri(rdf::TYPE), iri(sosa::OBSERVATION));
    g.add_triple(result.clone(), iri(rdf::TYPE), iri(sosa::RESULT));
    g.add_triple(subject.clone(), iri(sosa::IS_FEATURE_OF_INTEREST_OF), obs.clone());
    g.add_triple(obs.clone(), iri(sosa::OBSERVED_PROPERTY), observed_property.clone());
    g.add_triple(obs, iri(sosa::HAS_RESULT), result.clone());
    g.add_triple(result.clone(), iri(qudt::NUMERIC_VALUE), value.clone());
    g.add_triple(result, iri(qudt::UNIT), unit.clone());
    g
}

pub(super) fn build_temporal_interval(subject: &Term, start: &Term, end: &Term) -> Graph {
    let interval = Term::fresh_blank();
    let mut g = Graph::new();
    g.add_triple(interval.clone(), iri(rdf::TYPE), iri(time::INTERVAL));
    g.add_triple(subject.clone(), iri(time::HAS_TIME), interval.clone());
    g.add_triple(interval.clone(), iri(time::INTERVAL_STARTS), start.clone());
    g.add_triple(interval, iri(time::INTERVAL_FINISHES), end.clone());
    g
}

pub(super) fn build_geometry(subject: &Term, wkt: &Term) -> Graph {
    let geom = Term::fresh_blank();
    let mut g = Graph::new();
    g.add_triple(geom.clone(), iri(rdf::TYPE), iri(geo::GEOMETRY));
    g.add_triple(subject.clone(), iri(geo::HAS_GEOMETRY), geom.clone());
    g.add_triple(geom, iri(geo::AS_WKT), wkt.clone());
    g
}

pub(super) fn build_concept(subject: &Term, label: &Term, concept_scheme: &Term) -> Graph {
    let mut g = Graph::new();
    g.add_triple(subject.clone(), iri(rdf::TYPE), iri(skos::CONCEPT));
    g.add_triple(subject.clone(), iri(skos::IN_SCHEME), concept_scheme.clone());
    g.add_triple(subject.clone(), iri(skos::PREF_LABEL), label.clone());
    g
}

pub(super) fn build_agent(subject: &Term, agent_type: &Term, name: &Term) -> Graph {
    let mut g = Graph::new();
    g.add_triple(subject.clone(), iri(rdf::TYPE), agent_type.clone());
    g.add_triple(subject.clone(), iri(sdo::NAME), name.clone());
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgraph_ir::Datatype;

    fn subject() -> Term {
        Term::iri("http://example.com/dataset/example-dataset/1")
    }

    /// The single object of `subject predicate ?o`
    fn object<'a>(g: &'a Graph, subject: &'a Term, predicate: &'a str) -> &'a Term {
        let objects: Vec<_> = g.objects(subject, predicate).collect();
        assert_eq!(objects.len(), 1, "expected one {predicate}");
        objects[0]
    }

    #[test]
    fn test_qualified_association_shape() {
        let s = subject();
        let agent = Term::iri("http://example.com/people/ann");
        let role = Term::iri("http://example.com/roles/reviewer");
        let g = qualified_association(&s, &agent, &role);

        assert_eq!(g.len(), 4);
        assert_eq!(g.blank_nodes().len(), 1);
        let assoc = object(&g, &s, prov::QUALIFIED_ASSOCIATION);
        assert!(assoc.is_blank());
        assert_eq!(object(&g, assoc, rdf::TYPE), &iri(prov::ASSOCIATION));
        assert_eq!(object(&g, assoc, prov::AGENT), &agent);
        assert_eq!(object(&g, assoc, dcat::HAD_ROLE), &role);
    }

    #[test]
    fn test_observation_shape() {
        let s = subject();
        let prop = Term::iri("http://example.com/dataset/example-dataset/1/rating");
        let value = Term::typed("4.5", Datatype::xsd_float());
        let unit = Term::iri("http://example.com/vocab/stars");
        let g = observation(&s, &prop, &value, &unit);

        assert_eq!(g.len(), 7);
        assert_eq!(g.blank_nodes().len(), 2);
        let obs = object(&g, &s, sosa::IS_FEATURE_OF_INTEREST_OF);
        assert_eq!(object(&g, obs, rdf::TYPE), &iri(sosa::OBSERVATION));
        assert_eq!(object(&g, obs, sosa::OBSERVED_PROPERTY), &prop);
        let result = object(&g, obs, sosa::HAS_RESULT);
        assert!(result.is_blank());
        assert_ne!(result, obs);
        assert_eq!(object(&g, result, rdf::TYPE), &iri(sosa::RESULT));
        assert_eq!(object(&g, result, qudt::NUMERIC_VALUE), &value);
        assert_eq!(object(&g, result, qudt::UNIT), &unit);
    }

    #[test]
    fn test_temporal_interval_shape() {
        let s = subject();
        let start = Term::typed("2020-01-01", Datatype::xsd_date());
        let end = Term::typed("2021-06-30", Datatype::xsd_date());
        let g = temporal_interval(&s, &start, &end);

        assert_eq!(g.len(), 4);
        let interval = object(&g, &s, time::HAS_TIME);
        assert_eq!(object(&g, interval, rdf::TYPE), &iri(time::INTERVAL));
        assert_eq!(object(&g, interval, time::INTERVAL_STARTS), &start);
        assert_eq!(object(&g, interval, time::INTERVAL_FINISHES), &end);
    }

    #[test]
    fn test_geometry_shape() {
        let s = subject();
        let wkt = Term::typed("POINT(153.02 -27.47)", Datatype::geo_wkt_literal());
        let g = geometry(&s, &wkt);

        assert_eq!(g.len(), 3);
        let geom = object(&g, &s, geo::HAS_GEOMETRY);
        assert_eq!(object(&g, geom, rdf::TYPE), &iri(geo::GEOMETRY));
        assert_eq!(object(&g, geom, geo::AS_WKT), &wkt);
    }

    #[test]
    fn test_concept_shape() {
        let s = subject();
        let label = Term::lang_string("Sandstone", "en");
        let scheme = Term::iri("http://example.com/vocab/rock-types");
        let g = concept(&s, &label, &scheme);

        assert_eq!(g.len(), 3);
        assert!(g.blank_nodes().is_empty());
        assert_eq!(object(&g, &s, rdf::TYPE), &iri(skos::CONCEPT));
        assert_eq!(object(&g, &s, skos::IN_SCHEME), &scheme);
        assert_eq!(object(&g, &s, skos::PREF_LABEL), &label);
    }

    #[test]
    fn test_agent_shape() {
        let s = subject();
        let name = Term::string("Ann Lee");
        let g = agent(&s, &iri(sdo::PERSON), &name);

        assert_eq!(g.len(), 2);
        assert_eq!(object(&g, &s, rdf::TYPE), &iri(sdo::PERSON));
        assert_eq!(object(&g, &s, sdo::NAME), &name);
    }

    #[test]
    fn test_null_arguments_yield_empty_graphs() {
        let s = subject();
        let na = Term::string("NA");
        let empty = Term::iri("");
        let some = Term::iri("http://example.com/x");

        assert!(qualified_association(&s, &empty, &some).is_empty());
        assert!(observation(&s, &some, &na, &some).is_empty());
        assert!(temporal_interval(&s, &na, &some).is_empty());
        assert!(geometry(&empty, &some).is_empty());
        assert!(concept(&s, &Term::string("  "), &some).is_empty());
        assert!(agent(&s, &empty, &Term::string("Ann")).is_empty());
    }

    #[test]
    fn test_repeated_calls_do_not_share_nodes() {
        let s = subject();
        let prop = Term::iri("http://example.com/p");
        let value = Term::typed("4.5", Datatype::xsd_float());
        let unit = Term::iri("http://example.com/vocab/stars");

        let first = observation(&s, &prop, &value, &unit);
        let second = observation(&s, &prop, &value, &unit);

        assert!(first.blank_nodes().is_disjoint(&second.blank_nodes()));

        let mut union = first.clone();
        union.merge(second);
        union.dedupe();
        assert_eq!(union.len(), 14);
    }
}
