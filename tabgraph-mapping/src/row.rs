//! Row mapper
//!
//! Drives the extraction and pattern layers over a table: one subject per
//! row, typed with the configured classes, linked through the constant
//! pairs, then every column rule and pattern binding applied to the row.

use rayon::prelude::*;
use tabgraph_ir::{Graph, Term, TripleSink};
use tabgraph_vocab::rdf;

use crate::error::{MappingError, MappingResult};
use crate::mapping::{ArgSource, ColumnMappingRule, PatternBinding, SubjectStrategy};
use crate::pattern::PatternKind;

/// The triples produced for one row
#[derive(Debug, Clone)]
pub struct MappedRow {
    pub subject: Term,
    pub graph: Graph,
    /// Bindings that produced no triples for this row
    pub incomplete: Vec<PatternKind>,
}

/// Totals reported by [`RowMapper::map_rows_into`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingStats {
    pub rows: usize,
    /// Rows without a usable subject
    pub skipped_rows: usize,
    pub triples: usize,
    pub incomplete_patterns: usize,
}

/// Maps table rows to triples
#[derive(Debug, Clone)]
pub struct RowMapper {
    subject: SubjectStrategy,
    classes: Vec<Term>,
    constants: Vec<(Term, Term)>,
    rules: Vec<ColumnMappingRule>,
    patterns: Vec<PatternBinding>,
}

impl RowMapper {
    pub fn new(subject: SubjectStrategy) -> Self {
        Self {
            subject,
            classes: Vec::new(),
            constants: Vec::new(),
            rules: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Type every row subject with `class`
    pub fn with_class(mut self, class: impl AsRef<str>) -> Self {
        self.classes.push(Term::iri(class));
        self
    }

    /// Add `subject predicate object` to every row
    pub fn with_constant(mut self, predicate: impl AsRef<str>, object: Term) -> Self {
        self.constants.push((Term::iri(predicate), object));
        self
    }

    pub fn with_rule(mut self, rule: ColumnMappingRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_pattern(mut self, binding: PatternBinding) -> Self {
        self.patterns.push(binding);
        self
    }

    pub fn subject_strategy(&self) -> &SubjectStrategy {
        &self.subject
    }

    pub fn rules(&self) -> &[ColumnMappingRule] {
        &self.rules
    }

    pub fn patterns(&self) -> &[PatternBinding] {
        &self.patterns
    }

    /// Map a single row
    ///
    /// Returns `Ok(None)` when the subject cell is null. Fails only when the
    /// row (or header, for subject paths) is narrower than a referenced
    /// column.
    pub fn map_row<H, S>(&self, header: &[H], row: &[S]) -> MappingResult<Option<MappedRow>>
    where
        H: AsRef<str>,
        S: AsRef<str>,
    {
        let header: Vec<&str> = header.iter().map(AsRef::as_ref).collect();
        let row: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
        self.map_cells(&header, &row)
    }

    /// Map every row into one graph
    pub fn map_rows<H, R, S>(
        &self,
        header: &[H],
        rows: impl IntoIterator<Item = R>,
    ) -> MappingResult<Graph>
    where
        H: AsRef<str>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut graph = Graph::new();
        self.map_rows_into(header, rows, &mut graph)?;
        Ok(graph)
    }

    /// Map every row, streaming each row's triples into `sink`
    ///
    /// Stops at the first structural error; rows before it have already
    /// been emitted.
    pub fn map_rows_into<H, R, S>(
        &self,
        header: &[H],
        rows: impl IntoIterator<Item = R>,
        sink: &mut impl TripleSink,
    ) -> MappingResult<MappingStats>
    where
        H: AsRef<str>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let header: Vec<&str> = header.iter().map(AsRef::as_ref).collect();
        let span = tracing::info_span!("map_rows", columns = header.len());
        let _guard = span.enter();

        let mut stats = MappingStats::default();
        for (index, row) in rows.into_iter().enumerate() {
            let row_span = tracing::debug_span!("row", index);
            let _row_guard = row_span.enter();

            let cells: Vec<&str> = row.as_ref().iter().map(AsRef::as_ref).collect();
            stats.rows += 1;
            match self.map_cells(&header, &cells)? {
                Some(mapped) => {
                    stats.triples += mapped.graph.len();
                    stats.incomplete_patterns += mapped.incomplete.len();
                    sink.emit_graph(mapped.graph);
                }
                None => stats.skipped_rows += 1,
            }
        }

        tracing::info!(
            rows = stats.rows,
            skipped = stats.skipped_rows,
            triples = stats.triples,
            incomplete_patterns = stats.incomplete_patterns,
            "mapped table"
        );
        Ok(stats)
    }

    /// Map rows in parallel
    ///
    /// Row graphs are merged in row order, so the result differs from
    /// [`map_rows`](Self::map_rows) only in blank node labels.
    pub fn map_rows_par<H, R, S>(&self, header: &[H], rows: &[R]) -> MappingResult<Graph>
    where
        H: AsRef<str>,
        R: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        let header: Vec<&str> = header.iter().map(AsRef::as_ref).collect();
        let span = tracing::info_span!("map_rows_par", columns = header.len(), rows = rows.len());
        let _guard = span.enter();

        let results: Vec<MappingResult<Option<MappedRow>>> = rows
            .par_iter()
            .map(|row| {
                let cells: Vec<&str> = row.as_ref().iter().map(AsRef::as_ref).collect();
                self.map_cells(&header, &cells)
            })
            .collect();

        let mut graph = Graph::new();
        for result in results {
            if let Some(mapped) = result? {
                graph.merge(mapped.graph);
            }
        }
        tracing::info!(rows = rows.len(), triples = graph.len(), "mapped table");
        Ok(graph)
    }

    fn map_cells(&self, header: &[&str], row: &[&str]) -> MappingResult<Option<MappedRow>> {
        self.check_width(header.len(), row.len())?;

        let subject_cell = self
            .subject
            .source_column()
            .and_then(|column| row.get(column).copied());
        let Some(subject) = self.subject.materialize(subject_cell) else {
            tracing::debug!(cell = ?subject_cell, "row has no subject; skipped");
            return Ok(None);
        };

        let mut graph = Graph::new();
        let rdf_type = Term::iri(rdf::TYPE);
        for class in &self.classes {
            graph.add_triple(subject.clone(), rdf_type.clone(), class.clone());
        }
        for (predicate, object) in &self.constants {
            graph.add_triple(subject.clone(), predicate.clone(), object.clone());
        }

        for rule in &self.rules {
            if let Some(cell) = row.get(rule.source_column()) {
                graph.merge(rule.apply(&subject, cell));
            }
        }

        let mut incomplete = Vec::new();
        for binding in &self.patterns {
            let produced = expand_binding(binding, &subject, header, row);
            if produced.is_empty() {
                incomplete.push(binding.kind());
            }
            graph.merge(produced);
        }
        if !incomplete.is_empty() {
            tracing::warn!(
                subject = %subject,
                patterns = ?incomplete,
                "pattern bindings produced no triples"
            );
        }

        Ok(Some(MappedRow {
            subject,
            graph,
            incomplete,
        }))
    }

    fn check_width(&self, header_width: usize, row_width: usize) -> MappingResult<()> {
        let out_of_range = |column: usize, width: usize| {
            (column >= width).then_some(MappingError::ColumnOutOfRange { column, width })
        };

        let row_columns = self
            .subject
            .source_column()
            .into_iter()
            .chain(self.rules.iter().map(ColumnMappingRule::source_column))
            .chain(
                self.patterns
                    .iter()
                    .flat_map(|b| b.args())
                    .filter_map(|arg| match arg {
                        ArgSource::Column { column, .. } => Some(*column),
                        _ => None,
                    }),
            );
        if let Some(err) = row_columns.filter_map(|c| out_of_range(c, row_width)).next() {
            return Err(err);
        }

        let header_columns = self
            .patterns
            .iter()
            .flat_map(|b| b.args())
            .filter_map(|arg| match arg {
                ArgSource::SubjectPath { header_column } => Some(*header_column),
                _ => None,
            });
        if let Some(err) = header_columns
            .filter_map(|c| out_of_range(c, header_width))
            .next()
        {
            return Err(err);
        }
        Ok(())
    }
}

/// Expand one binding for a row, fanning out over multi-valued arguments
fn expand_binding(
    binding: &PatternBinding,
    subject: &Term,
    header: &[&str],
    row: &[&str],
) -> Graph {
    let kind = binding.kind();
    let candidates: Vec<Vec<Term>> = binding
        .args()
        .iter()
        .map(|arg| arg.resolve(subject, header, row))
        .collect();

    if candidates.iter().any(Vec::is_empty) {
        // Reports the null parameters once and produces nothing
        let args: Vec<Option<&Term>> = candidates.iter().map(|values| values.first()).collect();
        return kind.expand(&args);
    }

    let mut graph = Graph::new();
    for combination in cartesian(&candidates) {
        let args: Vec<Option<&Term>> = combination.into_iter().map(Some).collect();
        graph.merge(kind.expand(&args));
    }
    graph
}

/// Every combination picking one value per position, leftmost varying slowest
fn cartesian(candidates: &[Vec<Term>]) -> Vec<Vec<&Term>> {
    candidates.iter().fold(vec![Vec::new()], |acc, values| {
        acc.into_iter()
            .flat_map(|prefix| {
                values.iter().map(move |value| {
                    let mut next = prefix.clone();
                    next.push(value);
                    next
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{IdentifierExtraction, LiteralExtraction};
    use tabgraph_ir::{CountingSink, Datatype};
    use tabgraph_vocab::{dcat, dcterms, prov, sdo};

    const BASE: &str = "http://example.com/dataset/example-dataset/";
    const PEOPLE: &str = "http://example.com/people/";

    fn header() -> Vec<&'static str> {
        vec!["id", "title", "created", "reviewers"]
    }

    fn mapper() -> RowMapper {
        let reviewers = ArgSource::Column {
            column: 3,
            extract: IdentifierExtraction::new()
                .with_delimiter("||")
                .with_prefix(PEOPLE)
                .into(),
        };
        RowMapper::new(SubjectStrategy::column(0, BASE))
            .with_class(dcat::RESOURCE)
            .with_constant(dcterms::IS_PART_OF, Term::iri(BASE))
            .with_rule(ColumnMappingRule::new(1, dcterms::TITLE, LiteralExtraction::new()))
            .with_rule(ColumnMappingRule::new(
                2,
                dcterms::CREATED,
                LiteralExtraction::new().with_datatype(Datatype::xsd_g_year()),
            ))
            .with_pattern(
                PatternBinding::new(
                    PatternKind::QualifiedAssociation,
                    vec![
                        ArgSource::Subject,
                        reviewers,
                        ArgSource::Constant(Term::iri("http://example.com/roles/reviewer")),
                    ],
                )
                .unwrap(),
            )
    }

    #[test]
    fn test_map_row() {
        let mapped = mapper()
            .map_row(&header(), &["1", "Rock samples", "2020", "Ann||Bo"])
            .unwrap()
            .unwrap();

        assert_eq!(mapped.subject, Term::iri(format!("{BASE}1")));
        assert!(mapped.incomplete.is_empty());
        // type + isPartOf + title + created + 2 x 4 association triples
        assert_eq!(mapped.graph.len(), 12);
        assert_eq!(mapped.graph.with_predicate(prov::QUALIFIED_ASSOCIATION).count(), 2);

        let agents: Vec<_> = mapped
            .graph
            .with_predicate(prov::AGENT)
            .map(|t| t.o.clone())
            .collect();
        assert_eq!(
            agents,
            vec![
                Term::iri(format!("{PEOPLE}Ann")),
                Term::iri(format!("{PEOPLE}Bo")),
            ]
        );
    }

    #[test]
    fn test_null_subject_skips_row() {
        let mapped = mapper()
            .map_row(&header(), &["NA", "Rock samples", "2020", "Ann"])
            .unwrap();
        assert!(mapped.is_none());
    }

    #[test]
    fn test_narrow_row_is_an_error() {
        let err = mapper().map_row(&header(), &["1", "t"]).unwrap_err();
        assert!(matches!(
            err,
            MappingError::ColumnOutOfRange { column: 2, width: 2 }
        ));
    }

    #[test]
    fn test_incomplete_patterns_are_reported() {
        let mapped = mapper()
            .map_row(&header(), &["2", "Untitled", "n.d.", "NA"])
            .unwrap()
            .unwrap();
        assert_eq!(mapped.incomplete, vec![PatternKind::QualifiedAssociation]);
        // type + isPartOf + title
        assert_eq!(mapped.graph.len(), 3);
    }

    #[test]
    fn test_map_rows_into_stats() {
        let rows = vec![
            vec!["1", "A", "2020", "Ann"],
            vec!["", "B", "2021", "Bo"],
            vec!["3", "C", "NA", ""],
        ];
        let mut sink = CountingSink::default();
        let stats = mapper().map_rows_into(&header(), &rows, &mut sink).unwrap();

        assert_eq!(stats.rows, 3);
        assert_eq!(stats.skipped_rows, 1);
        assert_eq!(stats.incomplete_patterns, 1);
        // row 1: 4 + 4, row 3: 3
        assert_eq!(stats.triples, 11);
        assert_eq!(sink.triples, 11);
    }

    #[test]
    fn test_subject_path_argument() {
        let mapper = RowMapper::new(SubjectStrategy::column(0, BASE)).with_pattern(
            PatternBinding::new(
                PatternKind::Agent,
                vec![
                    ArgSource::SubjectPath { header_column: 1 },
                    ArgSource::Constant(Term::iri(sdo::PERSON)),
                    ArgSource::Column {
                        column: 1,
                        extract: LiteralExtraction::new().into(),
                    },
                ],
            )
            .unwrap(),
        );
        let mapped = mapper
            .map_row(&["id", "Lead Author"], &["7", "Ann Lee"])
            .unwrap()
            .unwrap();
        let author = Term::iri(format!("{BASE}7/Lead-Author"));
        assert_eq!(
            mapped.graph.objects(&author, sdo::NAME).collect::<Vec<_>>(),
            vec![&Term::string("Ann Lee")]
        );
    }

    #[test]
    fn test_cartesian_order() {
        let a = vec![Term::string("a1"), Term::string("a2")];
        let b = vec![Term::string("b1"), Term::string("b2"), Term::string("b3")];
        let columns = [a, b];
        let combos = cartesian(&columns);
        assert_eq!(combos.len(), 6);
        assert_eq!(combos[0], vec![&Term::string("a1"), &Term::string("b1")]);
        assert_eq!(combos[5], vec![&Term::string("a2"), &Term::string("b3")]);
    }

    #[test]
    fn test_parallel_matches_sequential_without_blank_nodes() {
        let mapper = RowMapper::new(SubjectStrategy::column(0, BASE))
            .with_rule(ColumnMappingRule::new(1, dcterms::TITLE, LiteralExtraction::new()));
        let rows: Vec<Vec<String>> = (0..50)
            .map(|i| vec![i.to_string(), format!("title {i}")])
            .collect();

        let sequential = mapper.map_rows(&["id", "title"], &rows).unwrap();
        let parallel = mapper.map_rows_par(&["id", "title"], &rows).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 50);
    }
}
