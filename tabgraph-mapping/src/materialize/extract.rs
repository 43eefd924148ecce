//! Cell extraction
//!
//! Turns one raw cell into zero or more terms according to an
//! [`ExtractionFunction`]. The steps, per entry, are:
//!
//! 1. split the cell on the delimiter (whole cell when there is none)
//! 2. drop null-sentinel entries; the rest are trimmed
//! 3. apply the capture pattern, honoring the rule's [`NoMatchPolicy`]
//! 4. wrap as a typed literal, or normalize + prefix and wrap as an IRI
//!
//! A dropped sentinel only affects its own entry. A capture miss under
//! `NoMatchPolicy::StopRule` ends extraction for the rest of the cell.

use tabgraph_ir::Term;

use super::text::{is_null_sentinel, normalize_identifier};
use crate::mapping::{
    ColumnMappingRule, EntryOptions, ExtractionFunction, IdentifierExtraction, LiteralExtraction,
    NoMatchPolicy,
};

/// Extract the terms a rule produces for one raw cell
///
/// Order follows the split order of the cell. Absence of data is an empty
/// vector, never an error.
pub fn extract(raw_text: &str, rule: &ColumnMappingRule) -> Vec<Term> {
    extract_with(raw_text, rule.extraction())
}

/// Extract terms with a bare extraction function
pub fn extract_with(raw_text: &str, function: &ExtractionFunction) -> Vec<Term> {
    let entries = surviving_entries(raw_text, function.entries());
    match function {
        ExtractionFunction::Literal(lit) => entries
            .into_iter()
            .map(|entry| literal_term(entry, lit))
            .collect(),
        ExtractionFunction::Identifier(id) => entries
            .into_iter()
            .filter_map(|entry| identifier_term(entry, id))
            .collect(),
    }
}

/// Split, null-filter and capture the entries of a cell
fn surviving_entries<'t>(raw_text: &'t str, options: &EntryOptions) -> Vec<&'t str> {
    let parts: Vec<&str> = match options.delimiter() {
        Some(delimiter) => raw_text.split(delimiter).collect(),
        None => vec![raw_text],
    };

    let mut entries = Vec::with_capacity(parts.len());
    for (index, part) in parts.into_iter().enumerate() {
        if is_null_sentinel(part) {
            tracing::trace!(index, entry = part, "dropping null entry");
            continue;
        }
        let part = part.trim();

        let part = match &options.capture {
            None => part,
            Some(capture) => match capture.first_match(part) {
                // an empty match carries no data
                Some(captured) if captured.is_empty() => continue,
                Some(captured) => captured,
                None => match options.on_no_match {
                    NoMatchPolicy::StopRule => {
                        tracing::debug!(
                            index,
                            entry = part,
                            pattern = capture.as_str(),
                            "capture pattern did not match, stopping extraction for this cell"
                        );
                        break;
                    }
                    NoMatchPolicy::SkipEntry => {
                        tracing::trace!(
                            index,
                            entry = part,
                            "capture pattern did not match, skipping entry"
                        );
                        continue;
                    }
                },
            },
        };

        entries.push(part);
    }
    entries
}

fn literal_term(entry: &str, lit: &LiteralExtraction) -> Term {
    match &lit.language {
        Some(lang) => Term::lang_string(entry, lang),
        None => Term::typed(entry, lit.datatype.clone()),
    }
}

fn identifier_term(entry: &str, id: &IdentifierExtraction) -> Option<Term> {
    let local = if id.normalize {
        normalize_identifier(entry)
    } else {
        entry.to_string()
    };
    if local.is_empty() {
        tracing::debug!(entry, "identifier is empty after normalization, dropping");
        return None;
    }
    let iri = match &id.prefix {
        Some(prefix) => format!("{prefix}{local}"),
        None => local,
    };
    Some(Term::iri(iri))
}
