//! RDF vocabulary constants for tabgraph
//!
//! This crate provides a centralized location for the vocabulary IRIs used by
//! the tabgraph pattern templates and by mapping documents that refer to
//! well-known terms.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD datatypes (http://www.w3.org/2001/XMLSchema#)
//! - `prov` - PROV-O (http://www.w3.org/ns/prov#)
//! - `dcat` - DCAT (http://www.w3.org/ns/dcat#)
//! - `dcterms` - Dublin Core terms (http://purl.org/dc/terms/)
//! - `sosa` - SOSA observations (http://www.w3.org/ns/sosa/)
//! - `qudt` - QUDT quantities (http://qudt.org/schema/qudt/)
//! - `time` - OWL-Time (http://www.w3.org/2006/time#)
//! - `geo` - GeoSPARQL (http://www.opengis.net/ont/geosparql#)
//! - `skos` - SKOS (http://www.w3.org/2004/02/skos/core#)
//! - `sdo` - schema.org (https://schema.org/)
//!
//! All constants are expanded IRIs. Project-specific namespaces (dataset base,
//! role vocabularies) belong in mapping documents, not here.

/// RDF vocabulary constants
pub mod rdf {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XSD vocabulary constants
pub mod xsd {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:gYear IRI
    pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";

    /// xsd:gYearMonth IRI
    pub const G_YEAR_MONTH: &str = "http://www.w3.org/2001/XMLSchema#gYearMonth";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// PROV-O constants
pub mod prov {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/prov#";

    /// prov:qualifiedAssociation
    pub const QUALIFIED_ASSOCIATION: &str = "http://www.w3.org/ns/prov#qualifiedAssociation";

    /// prov:Association
    pub const ASSOCIATION: &str = "http://www.w3.org/ns/prov#Association";

    /// prov:agent
    pub const AGENT: &str = "http://www.w3.org/ns/prov#agent";
}

/// DCAT constants
pub mod dcat {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/dcat#";

    /// dcat:hadRole
    pub const HAD_ROLE: &str = "http://www.w3.org/ns/dcat#hadRole";

    /// dcat:Resource
    pub const RESOURCE: &str = "http://www.w3.org/ns/dcat#Resource";
}

/// Dublin Core terms
pub mod dcterms {
    /// Namespace IRI
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    pub const IS_PART_OF: &str = "http://purl.org/dc/terms/isPartOf";
}

/// SOSA observation constants
pub mod sosa {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/sosa/";

    /// sosa:isFeatureOfInterestOf
    pub const IS_FEATURE_OF_INTEREST_OF: &str = "http://www.w3.org/ns/sosa/isFeatureOfInterestOf";

    /// sosa:Observation
    pub const OBSERVATION: &str = "http://www.w3.org/ns/sosa/Observation";

    /// sosa:observedProperty
    pub const OBSERVED_PROPERTY: &str = "http://www.w3.org/ns/sosa/observedProperty";

    /// sosa:hasResult
    pub const HAS_RESULT: &str = "http://www.w3.org/ns/sosa/hasResult";

    /// sosa:Result
    pub const RESULT: &str = "http://www.w3.org/ns/sosa/Result";
}

/// QUDT constants
pub mod qudt {
    /// Namespace IRI
    pub const NS: &str = "http://qudt.org/schema/qudt/";

    /// qudt:numericValue
    pub const NUMERIC_VALUE: &str = "http://qudt.org/schema/qudt/numericValue";

    /// qudt:unit
    pub const UNIT: &str = "http://qudt.org/schema/qudt/unit";
}

/// OWL-Time constants
pub mod time {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2006/time#";

    /// time:hasTime
    pub const HAS_TIME: &str = "http://www.w3.org/2006/time#hasTime";

    /// time:Interval
    pub const INTERVAL: &str = "http://www.w3.org/2006/time#Interval";

    /// time:intervalStarts
    pub const INTERVAL_STARTS: &str = "http://www.w3.org/2006/time#intervalStarts";

    /// time:intervalFinishes
    pub const INTERVAL_FINISHES: &str = "http://www.w3.org/2006/time#intervalFinishes";
}

/// GeoSPARQL constants
pub mod geo {
    /// Namespace IRI
    pub const NS: &str = "http://www.opengis.net/ont/geosparql#";

    /// geo:hasGeometry
    pub const HAS_GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#hasGeometry";

    /// geo:Geometry
    pub const GEOMETRY: &str = "http://www.opengis.net/ont/geosparql#Geometry";

    /// geo:asWKT
    pub const AS_WKT: &str = "http://www.opengis.net/ont/geosparql#asWKT";

    /// geo:wktLiteral datatype
    pub const WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";
}

/// SKOS constants
pub mod skos {
    /// Namespace IRI
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:Concept
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    /// skos:inScheme
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";

    /// skos:prefLabel
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
}

/// schema.org constants
pub mod sdo {
    /// Namespace IRI
    pub const NS: &str = "https://schema.org/";

    /// schema:name
    pub const NAME: &str = "https://schema.org/name";

    /// schema:Person
    pub const PERSON: &str = "https://schema.org/Person";

    /// schema:Organization
    pub const ORGANIZATION: &str = "https://schema.org/Organization";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        assert!(rdf::TYPE.starts_with(rdf::NS));
        assert!(xsd::G_YEAR.starts_with(xsd::NS));
        assert!(prov::QUALIFIED_ASSOCIATION.starts_with(prov::NS));
        assert!(dcat::HAD_ROLE.starts_with(dcat::NS));
        assert!(dcterms::IS_PART_OF.starts_with(dcterms::NS));
        assert!(sosa::HAS_RESULT.starts_with(sosa::NS));
        assert!(qudt::NUMERIC_VALUE.starts_with(qudt::NS));
        assert!(time::INTERVAL_FINISHES.starts_with(time::NS));
        assert!(geo::AS_WKT.starts_with(geo::NS));
        assert!(skos::PREF_LABEL.starts_with(skos::NS));
        assert!(sdo::NAME.starts_with(sdo::NS));
    }
}
