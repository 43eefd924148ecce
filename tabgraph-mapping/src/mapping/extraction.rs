//! Extraction function structures
//!
//! An extraction function describes how one raw cell becomes zero or more
//! RDF terms. The two variants share the entry options (splitting, capture,
//! no-match policy) and differ in what they wrap the surviving text in.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tabgraph_ir::Datatype;

use crate::error::{MappingError, MappingResult};

/// What to do when a capture pattern does not match an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
    /// Stop extracting: the failing entry and every entry after it in the
    /// same cell produce nothing
    #[default]
    StopRule,
    /// Skip only the failing entry and keep going
    SkipEntry,
}

/// A compiled capture pattern
///
/// Compiled once when the rule is built so a malformed pattern is reported
/// before any row is read.
#[derive(Debug, Clone)]
pub struct Capture {
    regex: Regex,
}

impl Capture {
    /// Compile a capture pattern
    pub fn new(pattern: &str) -> MappingResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| MappingError::InvalidCapturePattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Leftmost match in `text`, if any
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find(text).map(|m| m.as_str())
    }
}

/// Options shared by both extraction variants
#[derive(Debug, Clone, Default)]
pub struct EntryOptions {
    /// Splits a cell into several entries on every occurrence
    pub delimiter: Option<String>,
    /// Restricts each entry to its first match
    pub capture: Option<Capture>,
    /// Behavior when `capture` finds nothing in an entry
    pub on_no_match: NoMatchPolicy,
}

impl EntryOptions {
    /// The delimiter, ignoring an empty one
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref().filter(|d| !d.is_empty())
    }
}

/// Produces typed literals
#[derive(Debug, Clone, Default)]
pub struct LiteralExtraction {
    pub entries: EntryOptions,
    /// Datatype of every produced literal (default: xsd:string)
    pub datatype: Datatype,
    /// Language tag; when set the literal is an rdf:langString
    pub language: Option<String>,
}

impl LiteralExtraction {
    /// A plain xsd:string extraction of the whole cell
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.entries.delimiter = Some(delimiter.into());
        self
    }

    /// Restrict each entry to the first match of `pattern`
    pub fn with_capture(mut self, pattern: &str) -> MappingResult<Self> {
        self.entries.capture = Some(Capture::new(pattern)?);
        Ok(self)
    }

    pub fn on_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.entries.on_no_match = policy;
        self
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Produces resource identifiers (IRIs)
#[derive(Debug, Clone)]
pub struct IdentifierExtraction {
    pub entries: EntryOptions,
    /// Replace characters outside the unreserved set before prefixing
    pub normalize: bool,
    /// Prepended verbatim to every identifier
    pub prefix: Option<String>,
}

impl Default for IdentifierExtraction {
    fn default() -> Self {
        Self {
            entries: EntryOptions::default(),
            normalize: true,
            prefix: None,
        }
    }
}

impl IdentifierExtraction {
    /// A normalized, unprefixed extraction of the whole cell
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.entries.delimiter = Some(delimiter.into());
        self
    }

    /// Restrict each entry to the first match of `pattern`
    pub fn with_capture(mut self, pattern: &str) -> MappingResult<Self> {
        self.entries.capture = Some(Capture::new(pattern)?);
        Ok(self)
    }

    pub fn on_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.entries.on_no_match = policy;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Keep entry text as-is instead of normalizing it
    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }
}

/// How a cell becomes terms
#[derive(Debug, Clone)]
pub enum ExtractionFunction {
    /// Typed literal values
    Literal(LiteralExtraction),
    /// Resource identifiers
    Identifier(IdentifierExtraction),
}

impl ExtractionFunction {
    /// Shared entry options of either variant
    pub fn entries(&self) -> &EntryOptions {
        match self {
            ExtractionFunction::Literal(lit) => &lit.entries,
            ExtractionFunction::Identifier(id) => &id.entries,
        }
    }

    /// Check if this produces literals
    pub fn is_literal(&self) -> bool {
        matches!(self, ExtractionFunction::Literal(_))
    }
}

impl Default for ExtractionFunction {
    fn default() -> Self {
        ExtractionFunction::Literal(LiteralExtraction::default())
    }
}

impl From<LiteralExtraction> for ExtractionFunction {
    fn from(value: LiteralExtraction) -> Self {
        ExtractionFunction::Literal(value)
    }
}

impl From<IdentifierExtraction> for ExtractionFunction {
    fn from(value: IdentifierExtraction) -> Self {
        ExtractionFunction::Identifier(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_capture_fails_at_construction() {
        let err = LiteralExtraction::new().with_capture("(unclosed").unwrap_err();
        assert!(matches!(
            err,
            MappingError::InvalidCapturePattern { ref pattern, .. } if pattern == "(unclosed"
        ));
    }

    #[test]
    fn test_capture_first_match_is_leftmost() {
        let capture = Capture::new(r"\d{4}").unwrap();
        assert_eq!(capture.first_match("from 1999 to 2004"), Some("1999"));
        assert_eq!(capture.first_match("undated"), None);
        assert_eq!(capture.as_str(), r"\d{4}");
    }

    #[test]
    fn test_identifier_defaults() {
        let id = IdentifierExtraction::new();
        assert!(id.normalize);
        assert!(id.prefix.is_none());
        assert_eq!(id.entries.on_no_match, NoMatchPolicy::StopRule);

        let id = id.without_normalization().with_prefix("http://example.org/");
        assert!(!id.normalize);
        assert_eq!(id.prefix.as_deref(), Some("http://example.org/"));
    }

    #[test]
    fn test_literal_defaults_to_xsd_string() {
        let f: ExtractionFunction = LiteralExtraction::new().into();
        assert!(f.is_literal());
        match f {
            ExtractionFunction::Literal(lit) => assert!(lit.datatype.is_xsd_string()),
            ExtractionFunction::Identifier(_) => panic!("expected literal"),
        }
    }

    #[test]
    fn test_empty_delimiter_is_ignored() {
        let lit = LiteralExtraction::new().with_delimiter("");
        assert_eq!(lit.entries.delimiter(), None);

        let lit = LiteralExtraction::new().with_delimiter("||");
        assert_eq!(lit.entries.delimiter(), Some("||"));
    }

    #[test]
    fn test_no_match_policy_serde() {
        let p: NoMatchPolicy = serde_json::from_str("\"skip_entry\"").unwrap();
        assert_eq!(p, NoMatchPolicy::SkipEntry);
    }
}
