//! Mapping document model
//!
//! The serde shape of a JSON mapping document, and its compilation into
//! [`crate::mapping`] structures.
//!
//! ```json
//! {
//!   "subject": { "kind": "column", "column": 0, "prefix": "http://example.com/ds/" },
//!   "classes": ["http://www.w3.org/ns/dcat#Resource"],
//!   "constants": [
//!     { "predicate": "http://purl.org/dc/terms/isPartOf",
//!       "object": { "iri": "http://example.com/ds" } }
//!   ],
//!   "columns": [
//!     { "column": 1, "predicate": "http://purl.org/dc/terms/title",
//!       "extract": { "kind": "literal" } }
//!   ],
//!   "patterns": [
//!     { "pattern": "geometry",
//!       "args": ["subject", { "column": { "index": 2, "extract": { "kind": "literal" } } }] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tabgraph_ir::{Datatype, Term};

use crate::error::{MappingError, MappingResult};
use crate::mapping::{
    ArgSource, Capture, ColumnMappingRule, EntryOptions, ExtractionFunction, IdentifierExtraction,
    LiteralExtraction, NoMatchPolicy, PatternBinding, SubjectStrategy,
};
use crate::pattern::PatternKind;
use crate::row::RowMapper;

/// A complete mapping document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingDocument {
    pub subject: SubjectDoc,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub constants: Vec<ConstantDoc>,
    #[serde(default)]
    pub columns: Vec<ColumnDoc>,
    #[serde(default)]
    pub patterns: Vec<PatternDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SubjectDoc {
    Column {
        column: usize,
        prefix: String,
        #[serde(default = "default_true")]
        normalize: bool,
    },
    Generated {
        prefix: String,
    },
}

/// `{"iri": ...}` or `{"literal": ..., "datatype"?: ..., "language"?: ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum TermDoc {
    Iri {
        iri: String,
    },
    Literal {
        literal: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantDoc {
    pub predicate: String,
    pub object: TermDoc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDoc {
    pub column: usize,
    pub predicate: String,
    pub extract: ExtractDoc,
}

/// Both kinds accept `delimiter`, `capture` and `on_no_match`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ExtractDoc {
    Literal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delimiter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        capture: Option<String>,
        #[serde(default)]
        on_no_match: NoMatchPolicy,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Identifier {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delimiter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        capture: Option<String>,
        #[serde(default)]
        on_no_match: NoMatchPolicy,
        #[serde(default = "default_true")]
        normalize: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternDoc {
    pub pattern: String,
    pub args: Vec<ArgDoc>,
}

/// `"subject"`, `{"constant": term}`, `{"column": {"index", "extract"}}`
/// or `{"subject_path": header_column}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ArgDoc {
    Subject,
    Constant(TermDoc),
    Column { index: usize, extract: ExtractDoc },
    SubjectPath(usize),
}

fn default_true() -> bool {
    true
}

fn invalid(property: &str, message: impl Into<String>) -> MappingError {
    MappingError::InvalidValue {
        property: property.to_string(),
        message: message.into(),
    }
}

fn non_empty<'a>(property: &str, value: &'a str) -> MappingResult<&'a str> {
    if value.trim().is_empty() {
        return Err(invalid(property, "must not be empty"));
    }
    Ok(value)
}

impl MappingDocument {
    /// Validate and compile into a [`RowMapper`]
    pub fn compile(&self) -> MappingResult<RowMapper> {
        let mut mapper = RowMapper::new(self.subject.compile());

        for class in &self.classes {
            mapper = mapper.with_class(non_empty("classes", class)?);
        }
        for constant in &self.constants {
            let predicate = non_empty("constants.predicate", &constant.predicate)?;
            mapper = mapper.with_constant(predicate, constant.object.compile()?);
        }
        for column in &self.columns {
            let predicate = non_empty("columns.predicate", &column.predicate)?;
            mapper = mapper.with_rule(ColumnMappingRule::new(
                column.column,
                predicate,
                column.extract.compile()?,
            ));
        }
        for pattern in &self.patterns {
            mapper = mapper.with_pattern(pattern.compile()?);
        }

        tracing::debug!(
            classes = self.classes.len(),
            constants = self.constants.len(),
            columns = self.columns.len(),
            patterns = self.patterns.len(),
            "compiled mapping document"
        );
        Ok(mapper)
    }
}

impl SubjectDoc {
    fn compile(&self) -> SubjectStrategy {
        match self {
            SubjectDoc::Column {
                column,
                prefix,
                normalize,
            } => SubjectStrategy::Column {
                column: *column,
                prefix: prefix.clone(),
                normalize: *normalize,
            },
            SubjectDoc::Generated { prefix } => SubjectStrategy::generated(prefix.clone()),
        }
    }
}

impl TermDoc {
    pub fn compile(&self) -> MappingResult<Term> {
        match self {
            TermDoc::Iri { iri } => Ok(Term::iri(non_empty("iri", iri)?)),
            TermDoc::Literal {
                literal,
                datatype,
                language,
            } => match (datatype, language) {
                (Some(_), Some(_)) => Err(invalid(
                    "literal",
                    "datatype and language are mutually exclusive",
                )),
                (Some(dt), None) => Ok(Term::typed(
                    literal,
                    Datatype::from_iri(non_empty("datatype", dt)?),
                )),
                (None, Some(lang)) => Ok(Term::lang_string(literal, non_empty("language", lang)?)),
                (None, None) => Ok(Term::string(literal)),
            },
        }
    }
}

fn entry_options(
    delimiter: &Option<String>,
    capture: &Option<String>,
    on_no_match: NoMatchPolicy,
) -> MappingResult<EntryOptions> {
    let capture = capture.as_deref().map(Capture::new).transpose()?;
    Ok(EntryOptions {
        delimiter: delimiter.clone(),
        capture,
        on_no_match,
    })
}

impl ExtractDoc {
    pub fn compile(&self) -> MappingResult<ExtractionFunction> {
        match self {
            ExtractDoc::Literal {
                delimiter,
                capture,
                on_no_match,
                datatype,
                language,
            } => {
                if datatype.is_some() && language.is_some() {
                    return Err(invalid(
                        "extract",
                        "datatype and language are mutually exclusive",
                    ));
                }
                let datatype = match datatype {
                    Some(dt) => Datatype::from_iri(non_empty("datatype", dt)?),
                    None => Datatype::default(),
                };
                let language = match language {
                    Some(lang) => Some(non_empty("language", lang)?.to_string()),
                    None => None,
                };
                Ok(ExtractionFunction::Literal(LiteralExtraction {
                    entries: entry_options(delimiter, capture, *on_no_match)?,
                    datatype,
                    language,
                }))
            }
            ExtractDoc::Identifier {
                delimiter,
                capture,
                on_no_match,
                normalize,
                prefix,
            } => Ok(ExtractionFunction::Identifier(IdentifierExtraction {
                entries: entry_options(delimiter, capture, *on_no_match)?,
                normalize: *normalize,
                prefix: prefix.clone(),
            })),
        }
    }
}

impl PatternDoc {
    pub fn compile(&self) -> MappingResult<PatternBinding> {
        let kind = PatternKind::parse(&self.pattern)?;
        let args = self
            .args
            .iter()
            .map(ArgDoc::compile)
            .collect::<MappingResult<Vec<_>>>()?;
        PatternBinding::new(kind, args)
    }
}

impl ArgDoc {
    fn compile(&self) -> MappingResult<ArgSource> {
        Ok(match self {
            ArgDoc::Subject => ArgSource::Subject,
            ArgDoc::Constant(term) => ArgSource::Constant(term.compile()?),
            ArgDoc::Column { index, extract } => ArgSource::Column {
                column: *index,
                extract: extract.compile()?,
            },
            ArgDoc::SubjectPath(header_column) => ArgSource::SubjectPath {
                header_column: *header_column,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_subject_defaults_to_normalized() {
        let doc: SubjectDoc = parse(r#"{"kind": "column", "column": 0, "prefix": "http://ex/"}"#);
        assert_eq!(doc.compile(), SubjectStrategy::column(0, "http://ex/"));

        let doc: SubjectDoc = parse(r#"{"kind": "generated", "prefix": "http://ex/"}"#);
        assert_eq!(doc.compile(), SubjectStrategy::generated("http://ex/"));
    }

    #[test]
    fn test_term_doc() {
        let iri: TermDoc = parse(r#"{"iri": "http://ex/a"}"#);
        assert_eq!(iri.compile().unwrap(), Term::iri("http://ex/a"));

        let typed: TermDoc = parse(
            r#"{"literal": "2020", "datatype": "http://www.w3.org/2001/XMLSchema#gYear"}"#,
        );
        assert_eq!(
            typed.compile().unwrap(),
            Term::typed("2020", Datatype::xsd_g_year())
        );

        let tagged: TermDoc = parse(r#"{"literal": "chat", "language": "fr"}"#);
        assert_eq!(tagged.compile().unwrap(), Term::lang_string("chat", "fr"));

        let both: TermDoc =
            parse(r#"{"literal": "x", "datatype": "http://ex/dt", "language": "en"}"#);
        assert!(matches!(
            both.compile(),
            Err(MappingError::InvalidValue { .. })
        ));

        let empty: TermDoc = parse(r#"{"iri": " "}"#);
        assert!(empty.compile().is_err());
    }

    #[test]
    fn test_extract_doc() {
        let doc: ExtractDoc = parse(
            r#"{"kind": "literal", "delimiter": "||", "capture": "\\d{4}",
                "on_no_match": "skip_entry",
                "datatype": "http://www.w3.org/2001/XMLSchema#gYear"}"#,
        );
        let ExtractionFunction::Literal(lit) = doc.compile().unwrap() else {
            panic!("expected a literal extraction");
        };
        assert_eq!(lit.entries.delimiter(), Some("||"));
        assert_eq!(lit.entries.capture.as_ref().map(Capture::as_str), Some("\\d{4}"));
        assert_eq!(lit.entries.on_no_match, NoMatchPolicy::SkipEntry);
        assert_eq!(lit.datatype, Datatype::xsd_g_year());

        let doc: ExtractDoc = parse(r#"{"kind": "identifier", "prefix": "http://ex/p/"}"#);
        let ExtractionFunction::Identifier(id) = doc.compile().unwrap() else {
            panic!("expected an identifier extraction");
        };
        assert!(id.normalize);
        assert_eq!(id.prefix.as_deref(), Some("http://ex/p/"));
        assert_eq!(id.entries.on_no_match, NoMatchPolicy::StopRule);
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        let misspelled = [
            r#"{"kind": "literal", "delimeter": "||"}"#,
            r#"{"kind": "identifier", "prefx": "http://ex/p/"}"#,
            r#"{"kind": "literal", "on_nomatch": "skip_entry"}"#,
        ];
        for json in misspelled {
            assert!(serde_json::from_str::<ExtractDoc>(json).is_err(), "{json}");
        }

        assert!(serde_json::from_str::<ColumnDoc>(
            r#"{"column": 1, "predicate": "http://ex/p", "extract": {"kind": "literal"},
                "datatype": "http://ex/dt"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<SubjectDoc>(
            r#"{"kind": "generated", "prefix": "http://ex/", "column": 0}"#
        )
        .is_err());
        assert!(serde_json::from_str::<TermDoc>(r#"{"iri": "http://ex/a", "language": "en"}"#)
            .is_err());
        assert!(serde_json::from_str::<PatternDoc>(
            r#"{"pattern": "geometry", "args": ["subject"], "arg": []}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ArgDoc>(
            r#"{"column": {"index": 0, "extract": {"kind": "literal"}, "delimiter": ";"}}"#
        )
        .is_err());
    }

    #[test]
    fn test_bad_capture_is_rejected() {
        let doc: ExtractDoc = parse(r#"{"kind": "literal", "capture": "("}"#);
        assert!(matches!(
            doc.compile(),
            Err(MappingError::InvalidCapturePattern { .. })
        ));
    }

    #[test]
    fn test_arg_doc_shapes() {
        let args: Vec<ArgDoc> = parse(
            r#"["subject", {"constant": {"iri": "http://ex/role"}},
                {"column": {"index": 4, "extract": {"kind": "literal"}}}, {"subject_path": 2}]"#,
        );
        assert_eq!(args[0], ArgDoc::Subject);
        assert!(matches!(args[1], ArgDoc::Constant(TermDoc::Iri { .. })));
        assert!(matches!(args[2], ArgDoc::Column { index: 4, .. }));
        assert_eq!(args[3], ArgDoc::SubjectPath(2));
    }

    #[test]
    fn test_pattern_doc_validation() {
        let unknown: PatternDoc = parse(r#"{"pattern": "polygon", "args": ["subject"]}"#);
        assert!(matches!(
            unknown.compile(),
            Err(MappingError::UnknownPattern(name)) if name == "polygon"
        ));

        let short: PatternDoc = parse(r#"{"pattern": "observation", "args": ["subject"]}"#);
        assert!(matches!(
            short.compile(),
            Err(MappingError::PatternArity {
                expected: 4,
                found: 1,
                ..
            })
        ));
    }
}
