//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`, and language-tagged strings use
//! `rdf:langString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tabgraph_vocab::{geo, rdf, xsd};

/// RDF literal datatype, stored as an expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(xsd::STRING)
    }

    /// xsd:float
    pub fn xsd_float() -> Self {
        Self::from_iri(xsd::FLOAT)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(xsd::DATE)
    }

    /// xsd:gYear
    pub fn xsd_g_year() -> Self {
        Self::from_iri(xsd::G_YEAR)
    }

    /// geo:wktLiteral
    pub fn geo_wkt_literal() -> Self {
        Self::from_iri(geo::WKT_LITERAL)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(rdf::LANG_STRING)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == xsd::STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == rdf::LANG_STRING
    }
}

impl Default for Datatype {
    fn default() -> Self {
        Self::xsd_string()
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}
