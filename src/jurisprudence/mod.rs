//! # Jurisprudence Catalog Module
//!
//! ## Purpose
//! Search and filtering over the static catalog of Tribunal Supremo de
//! Justicia (TSJ) jurisprudence: landmark decisions across all seven
//! chambers, with subject tags, cited CRBV articles and binding-precedent
//! flags.
//!
//! ## Input/Output Specification
//! - **Input**: Chamber, article reference, subject tag, free-text query,
//!   keyword sets, date bounds, combined search parameters
//! - **Output**: Matching cases in catalog order, `SearchResult` wrappers,
//!   aggregate statistics
//! - **Determinism**: identical arguments always yield identical ordered
//!   results; no query input ever raises
//!
//! ## Key Features
//! - Chamber, article, subject, text and conjunctive keyword search
//! - Binding-precedent and hydrocarbon-domain shortcuts composed from the
//!   generic predicates
//! - Unified `execute_search` entry point with optional filters,
//!   duplicate suppression and follow-up suggestions
//! - Exhaustive per-chamber statistics (zero counts included)

mod data;

use crate::errors::{Result, SearchError};
use crate::text;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

/// Decision date format used throughout the catalog
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Terms that identify hydrocarbon-sector cases
const HYDROCARBON_TERMS: &[&str] = &[
    "hidrocarburos",
    "petróleo",
    "PDVSA",
    "empresas mixtas",
    "regalías",
    "LOH",
];

/// The seven chambers of the Tribunal Supremo de Justicia
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SalaTSJ {
    Plena,
    Constitucional,
    PoliticoAdministrativa,
    Electoral,
    CasacionCivil,
    CasacionPenal,
    CasacionSocial,
}

impl SalaTSJ {
    /// All chambers
    pub const ALL: [SalaTSJ; 7] = [
        SalaTSJ::Plena,
        SalaTSJ::Constitucional,
        SalaTSJ::PoliticoAdministrativa,
        SalaTSJ::Electoral,
        SalaTSJ::CasacionCivil,
        SalaTSJ::CasacionPenal,
        SalaTSJ::CasacionSocial,
    ];

    /// Official chamber name
    pub fn label(&self) -> &'static str {
        match self {
            SalaTSJ::Plena => "Sala Plena",
            SalaTSJ::Constitucional => "Sala Constitucional",
            SalaTSJ::PoliticoAdministrativa => "Sala Político-Administrativa",
            SalaTSJ::Electoral => "Sala Electoral",
            SalaTSJ::CasacionCivil => "Sala de Casación Civil",
            SalaTSJ::CasacionPenal => "Sala de Casación Penal",
            SalaTSJ::CasacionSocial => "Sala de Casación Social",
        }
    }
}

impl fmt::Display for SalaTSJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category of a TSJ decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoDecision {
    Sentencia,
    Auto,
    Aclaratoria,
    Ampliacion,
}

impl TipoDecision {
    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            TipoDecision::Sentencia => "Sentencia",
            TipoDecision::Auto => "Auto",
            TipoDecision::Aclaratoria => "Aclaratoria",
            TipoDecision::Ampliacion => "Ampliación",
        }
    }
}

impl fmt::Display for TipoDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A TSJ decision record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEntry {
    /// Issuing chamber
    pub sala: SalaTSJ,
    /// Docket number (expediente); unique within the catalog
    pub docket: String,
    /// Sentence number assigned by the chamber
    pub sentence_number: String,
    /// Decision date (DD-MM-YYYY)
    pub date: String,
    /// Decision category
    pub decision_type: TipoDecision,
    /// Reporting justice (ponente)
    pub ponente: String,
    /// Parties involved
    pub parties: String,
    /// Subject matter (materia)
    pub subject: String,
    /// Decision summary (resumen)
    pub summary: String,
    /// Ratio decidendi
    pub ratio_decidendi: String,
    /// Cited CRBV articles, as composite references ("Art. 49.7")
    pub crbv_articles: Vec<String>,
    /// Precedents cited by the decision
    pub cited_precedents: Vec<String>,
    /// Whether the decision is a binding precedent (vinculante)
    pub binding: bool,
    /// URL to the full decision text, when available
    pub url: Option<String>,
    /// Subject keyword tags
    pub keywords: Vec<String>,
}

impl CaseEntry {
    /// Full searchable text: subject, summary, ratio, parties, ponente, tags.
    fn full_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.subject,
            self.summary,
            self.ratio_decidendi,
            self.parties,
            self.ponente,
            self.keywords.join(" "),
        )
    }

    /// Core searchable text: subject, summary, ratio and tags.
    fn core_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.subject,
            self.summary,
            self.ratio_decidendi,
            self.keywords.join(" "),
        )
    }
}

/// Parameters for the unified search entry point
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query
    pub query: String,
    /// Restrict to a single chamber
    pub sala: Option<SalaTSJ>,
    /// Restrict to cases citing a CRBV article
    pub crbv_article: Option<String>,
    /// Restrict to a subject tag
    pub subject: Option<String>,
    /// Keep binding precedents only
    pub binding_only: bool,
    /// Restrict to hydrocarbon-sector cases
    pub hydrocarbons: bool,
}

/// Outcome of a unified search; constructed fresh per query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The original query string
    pub query: String,
    /// When the search was executed
    pub searched_at: DateTime<Utc>,
    /// Number of matching cases
    pub total: usize,
    /// Matching cases in catalog order
    pub cases: Vec<CaseEntry>,
    /// Follow-up search suggestions
    pub suggestions: Vec<String>,
}

/// Aggregate statistics over the jurisprudence catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisprudenceStatistics {
    /// Total number of cases
    pub total_cases: usize,
    /// Number of binding precedents
    pub binding_cases: usize,
    /// Case count per chamber; every chamber present, zero counts included
    pub by_sala: BTreeMap<SalaTSJ, usize>,
    /// Number of hydrocarbon-sector cases
    pub hydrocarbon_cases: usize,
}

/// The static jurisprudence catalog: an insertion-ordered case sequence
#[derive(Debug, Clone)]
pub struct JurisprudenceCatalog {
    entries: Vec<CaseEntry>,
}

impl JurisprudenceCatalog {
    /// Build a catalog from case entries, validating every entry.
    ///
    /// Fails on an empty docket, ponente or date, a date that does not
    /// parse as DD-MM-YYYY, or a duplicate docket number.
    pub fn new(entries: Vec<CaseEntry>) -> Result<Self> {
        let mut dockets = HashSet::with_capacity(entries.len());

        for entry in &entries {
            validate_entry(entry)?;
            if !dockets.insert(entry.docket.clone()) {
                return Err(SearchError::DuplicateDocket {
                    docket: entry.docket.clone(),
                });
            }
        }

        tracing::debug!("jurisprudence catalog initialized with {} cases", entries.len());
        Ok(Self { entries })
    }

    /// Number of cases in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no cases
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All cases in catalog order
    pub fn entries(&self) -> &[CaseEntry] {
        &self.entries
    }

    /// All cases issued by the given chamber, catalog order preserved.
    pub fn by_sala(&self, sala: SalaTSJ) -> Vec<&CaseEntry> {
        self.entries.iter().filter(|c| c.sala == sala).collect()
    }

    /// All cases citing the given CRBV article.
    ///
    /// The query is normalized by stripping `Art.` / `Artículo` qualifiers;
    /// a case matches when any of its stored composite references contains
    /// the normalized query as a substring. An empty reference matches
    /// nothing.
    pub fn by_crbv_article(&self, article: &str) -> Vec<&CaseEntry> {
        let needle = text::normalize_article_reference(article);
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|c| c.crbv_articles.iter().any(|art| text::contains(art, &needle)))
            .collect()
    }

    /// All cases tagged with the given subject.
    ///
    /// A case matches when any keyword tag equals the tag case-insensitively
    /// or its materia field contains it.
    pub fn by_subject(&self, tag: &str) -> Vec<&CaseEntry> {
        let needle = text::normalize(tag);
        if needle.trim().is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|c| {
                c.keywords.iter().any(|kw| text::normalize(kw) == needle)
                    || text::contains(&c.subject, tag)
            })
            .collect()
    }

    /// Case-insensitive free-text search over subject, summary, ratio
    /// decidendi, parties, ponente and tags.
    ///
    /// An empty or all-whitespace term matches nothing; an empty result is
    /// a valid outcome.
    pub fn by_text(&self, term: &str) -> Vec<&CaseEntry> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let matches: Vec<&CaseEntry> = self
            .entries
            .iter()
            .filter(|c| text::contains(&c.full_text(), term))
            .collect();
        tracing::debug!(term, matches = matches.len(), "case text search executed");
        matches
    }

    /// All cases whose text contains every one of `terms` (case-insensitive
    /// conjunctive match), catalog order preserved.
    ///
    /// An empty term set matches every case.
    pub fn by_keywords<S: AsRef<str>>(&self, terms: &[S]) -> Vec<&CaseEntry> {
        self.entries
            .iter()
            .filter(|c| text::contains_all(&c.core_text(), terms))
            .collect()
    }

    /// All binding precedents (vinculante), catalog order preserved.
    pub fn binding(&self) -> Vec<&CaseEntry> {
        self.entries.iter().filter(|c| c.binding).collect()
    }

    /// All hydrocarbon-sector cases: the generic text predicate composed
    /// with a fixed term list (oil, gas, PDVSA, mixed companies, royalties).
    pub fn hydrocarbons(&self) -> Vec<&CaseEntry> {
        self.entries
            .iter()
            .filter(|c| {
                let haystack = c.core_text();
                HYDROCARBON_TERMS.iter().any(|term| text::contains(&haystack, term))
            })
            .collect()
    }

    /// All cases decided between `from` and `to` inclusive (DD-MM-YYYY).
    ///
    /// Unparseable bounds yield an empty result; entries with unparseable
    /// dates are skipped.
    pub fn by_date_range(&self, from: &str, to: &str) -> Vec<&CaseEntry> {
        let (Ok(from), Ok(to)) = (
            NaiveDate::parse_from_str(from.trim(), DATE_FORMAT),
            NaiveDate::parse_from_str(to.trim(), DATE_FORMAT),
        ) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|c| {
                NaiveDate::parse_from_str(&c.date, DATE_FORMAT)
                    .map(|date| from <= date && date <= to)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Unified search entry point: free-text search wrapped in a
    /// [`SearchResult`]. Never fails — empty and unmatched queries produce
    /// a result with zero matches.
    pub fn execute_search(&self, query: &str) -> SearchResult {
        self.execute_search_with_params(SearchQuery {
            query: query.to_string(),
            ..SearchQuery::default()
        })
    }

    /// Unified search with optional filters.
    ///
    /// Filter precedence: hydrocarbons, then chamber, then CRBV article,
    /// then subject, then free text. The binding-only flag is applied to
    /// the filtered set. Duplicate (sala, sentence, date) triples are
    /// suppressed, keeping the first occurrence.
    pub fn execute_search_with_params(&self, params: SearchQuery) -> SearchResult {
        let candidates: Vec<&CaseEntry> = if params.hydrocarbons {
            self.hydrocarbons()
        } else if let Some(sala) = params.sala {
            self.by_sala(sala)
        } else if let Some(article) = &params.crbv_article {
            self.by_crbv_article(article)
        } else if let Some(subject) = &params.subject {
            self.by_subject(subject)
        } else {
            self.by_text(&params.query)
        };

        let mut seen = HashSet::new();
        let matches: Vec<CaseEntry> = candidates
            .into_iter()
            .filter(|c| !params.binding_only || c.binding)
            .filter(|c| seen.insert((c.sala, c.sentence_number.clone(), c.date.clone())))
            .cloned()
            .collect();

        let suggestions = build_suggestions(&matches);

        tracing::debug!(
            query = params.query.as_str(),
            matches = matches.len(),
            "jurisprudence search executed"
        );

        SearchResult {
            query: params.query,
            searched_at: Utc::now(),
            total: matches.len(),
            cases: matches,
            suggestions,
        }
    }

    /// Aggregate statistics; per-chamber counts sum to the total.
    pub fn statistics(&self) -> JurisprudenceStatistics {
        let mut by_sala: BTreeMap<SalaTSJ, usize> =
            SalaTSJ::ALL.iter().map(|&s| (s, 0)).collect();
        for entry in &self.entries {
            *by_sala.entry(entry.sala).or_default() += 1;
        }

        JurisprudenceStatistics {
            total_cases: self.entries.len(),
            binding_cases: self.binding().len(),
            by_sala,
            hydrocarbon_cases: self.hydrocarbons().len(),
        }
    }
}

fn validate_entry(entry: &CaseEntry) -> Result<()> {
    if entry.docket.trim().is_empty() {
        return Err(crate::validation_error!("docket", "docket number must not be empty"));
    }
    if entry.ponente.trim().is_empty() {
        return Err(crate::validation_error!(
            "ponente",
            format!("case '{}' has no ponente", entry.docket)
        ));
    }
    if entry.date.trim().is_empty() {
        return Err(crate::validation_error!(
            "date",
            format!("case '{}' has no decision date", entry.docket)
        ));
    }
    if NaiveDate::parse_from_str(&entry.date, DATE_FORMAT).is_err() {
        return Err(SearchError::InvalidDateFormat {
            value: entry.date.clone(),
        });
    }
    Ok(())
}

/// Follow-up suggestions: generic hints when nothing matched, related
/// subject-matter hints otherwise (up to three, in result order).
fn build_suggestions(matches: &[CaseEntry]) -> Vec<String> {
    if matches.is_empty() {
        return vec![
            "Try searching by Sala (e.g., 'Sala Constitucional')".to_string(),
            "Try searching by CRBV article (e.g., 'Art. 334')".to_string(),
            "Try searching by legal matter (e.g., 'amparo', 'hidrocarburos')".to_string(),
            "Use broader search terms".to_string(),
        ];
    }

    let mut subjects = Vec::new();
    for case in matches {
        if !subjects.contains(&case.subject) {
            subjects.push(case.subject.clone());
        }
        if subjects.len() == 3 {
            break;
        }
    }
    subjects
        .into_iter()
        .map(|subject| format!("More cases on: {subject}"))
        .collect()
}

/// The seeded jurisprudence catalog, built and validated on first access.
pub fn catalog() -> &'static JurisprudenceCatalog {
    static CATALOG: LazyLock<JurisprudenceCatalog> = LazyLock::new(|| {
        JurisprudenceCatalog::new(data::landmark_cases())
            .expect("embedded jurisprudence catalog is valid")
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(docket: &str, ponente: &str, date: &str) -> CaseEntry {
        CaseEntry {
            sala: SalaTSJ::Constitucional,
            docket: docket.into(),
            sentence_number: "1".into(),
            date: date.into(),
            decision_type: TipoDecision::Sentencia,
            ponente: ponente.into(),
            parties: "Partes".into(),
            subject: "Amparo".into(),
            summary: "Resumen".into(),
            ratio_decidendi: "Ratio".into(),
            crbv_articles: vec![],
            cited_precedents: vec![],
            binding: false,
            url: None,
            keywords: vec![],
        }
    }

    #[test]
    fn seeded_catalog_validates_and_is_populated() {
        let catalog = catalog();
        assert!(catalog.len() >= 25);
    }

    #[test]
    fn every_seeded_case_has_required_fields() {
        for case in catalog().entries() {
            assert!(!case.docket.trim().is_empty());
            assert!(!case.date.trim().is_empty());
            assert!(!case.ponente.trim().is_empty());
        }
    }

    #[test]
    fn all_chambers_are_represented() {
        let stats = catalog().statistics();
        assert_eq!(stats.by_sala.len(), SalaTSJ::ALL.len());
        for (sala, count) in &stats.by_sala {
            assert!(*count > 0, "no cases for {sala}");
        }
    }

    #[test]
    fn by_sala_returns_only_that_chamber() {
        let cases = catalog().by_sala(SalaTSJ::Constitucional);
        assert!(!cases.is_empty());
        assert!(cases.iter().all(|c| c.sala == SalaTSJ::Constitucional));
    }

    #[test]
    fn by_crbv_article_accepts_qualified_and_bare_references() {
        let catalog = catalog();
        let qualified = catalog.by_crbv_article("Art. 334");
        let bare = catalog.by_crbv_article("334");
        assert!(!qualified.is_empty());
        let qualified_dockets: Vec<&str> =
            qualified.iter().map(|c| c.docket.as_str()).collect();
        let bare_dockets: Vec<&str> = bare.iter().map(|c| c.docket.as_str()).collect();
        assert_eq!(qualified_dockets, bare_dockets);
        assert!(qualified
            .iter()
            .all(|c| c.crbv_articles.iter().any(|a| a.contains("334"))));
    }

    #[test]
    fn by_crbv_article_with_empty_reference_matches_nothing() {
        assert!(catalog().by_crbv_article("").is_empty());
        assert!(catalog().by_crbv_article("Art. ").is_empty());
    }

    #[test]
    fn by_subject_matches_tags_case_insensitively() {
        let catalog = catalog();
        let lower = catalog.by_subject("amparo");
        let upper = catalog.by_subject("AMPARO");
        assert!(!lower.is_empty());
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn by_text_finds_accented_terms() {
        let cases = catalog().by_text("petróleo");
        assert!(!cases.is_empty());
    }

    #[test]
    fn by_text_with_empty_term_matches_nothing() {
        assert!(catalog().by_text("").is_empty());
        assert!(catalog().by_text("   ").is_empty());
    }

    #[test]
    fn by_keywords_is_conjunctive() {
        let catalog = catalog();
        let both = catalog.by_keywords(&["debido", "proceso"]);
        assert!(!both.is_empty());
        for case in &both {
            let haystack = format!(
                "{} {} {} {}",
                case.subject,
                case.summary,
                case.ratio_decidendi,
                case.keywords.join(" ")
            );
            assert!(text::contains(&haystack, "debido"));
            assert!(text::contains(&haystack, "proceso"));
        }
        // Adding an unmatched term empties the result.
        assert!(catalog
            .by_keywords(&["debido", "proceso", "no-such-term-xyz"])
            .is_empty());
    }

    #[test]
    fn binding_returns_only_binding_precedents() {
        let binding = catalog().binding();
        assert!(!binding.is_empty());
        assert!(binding.iter().all(|c| c.binding));
    }

    #[test]
    fn hydrocarbons_is_non_empty_on_seeded_data() {
        let cases = catalog().hydrocarbons();
        assert!(!cases.is_empty());
        assert!(cases
            .iter()
            .any(|c| c.sala == SalaTSJ::PoliticoAdministrativa));
    }

    #[test]
    fn by_date_range_bounds_are_inclusive() {
        let catalog = catalog();
        let cases = catalog.by_date_range("01-01-2000", "31-12-2005");
        assert!(!cases.is_empty());
        for case in &cases {
            let date = NaiveDate::parse_from_str(&case.date, DATE_FORMAT).unwrap();
            assert!(date >= NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
            assert!(date <= NaiveDate::from_ymd_opt(2005, 12, 31).unwrap());
        }
    }

    #[test]
    fn by_date_range_degrades_to_empty_on_bad_input() {
        let catalog = catalog();
        assert!(catalog.by_date_range("not-a-date", "31-12-2005").is_empty());
        assert!(catalog.by_date_range("01-01-2000", "2005/12/31").is_empty());
        // Inverted bounds select nothing.
        assert!(catalog.by_date_range("31-12-2005", "01-01-2000").is_empty());
    }

    #[test]
    fn execute_search_never_fails_on_empty_or_unmatched_queries() {
        let catalog = catalog();
        for query in ["", "no-such-term-xyz"] {
            let result = catalog.execute_search(query);
            assert_eq!(result.query, query);
            assert_eq!(result.total, 0);
            assert!(result.cases.is_empty());
            assert!(!result.suggestions.is_empty());
        }
    }

    #[test]
    fn execute_search_wraps_text_matches() {
        let result = catalog().execute_search("amparo");
        assert!(result.total > 0);
        assert_eq!(result.total, result.cases.len());
        assert_eq!(result.query, "amparo");
        assert!(result.suggestions.iter().all(|s| s.starts_with("More cases on:")));
    }

    #[test]
    fn execute_search_with_binding_filter() {
        let result = catalog().execute_search_with_params(SearchQuery {
            query: "hidrocarburos".into(),
            hydrocarbons: true,
            binding_only: true,
            ..SearchQuery::default()
        });
        assert!(result.total > 0);
        assert!(result.cases.iter().all(|c| c.binding));
    }

    #[test]
    fn execute_search_with_sala_filter() {
        let result = catalog().execute_search_with_params(SearchQuery {
            sala: Some(SalaTSJ::CasacionSocial),
            ..SearchQuery::default()
        });
        assert!(result.total > 0);
        assert!(result.cases.iter().all(|c| c.sala == SalaTSJ::CasacionSocial));
    }

    #[test]
    fn execute_search_results_carry_no_duplicate_triples() {
        let result = catalog().execute_search("amparo");
        let mut seen = HashSet::new();
        for case in &result.cases {
            assert!(seen.insert((case.sala, case.sentence_number.clone(), case.date.clone())));
        }
    }

    #[test]
    fn search_results_serialize_to_json() {
        let result = catalog().execute_search("control difuso");
        let json = serde_json::to_string(&result).expect("result serializes");
        assert!(json.contains("\"query\""));
        assert!(json.contains("\"total\""));
    }

    #[test]
    fn statistics_counts_sum_to_total() {
        let catalog = catalog();
        let stats = catalog.statistics();
        assert_eq!(stats.total_cases, catalog.len());
        assert_eq!(stats.by_sala.values().sum::<usize>(), stats.total_cases);
        assert_eq!(stats.binding_cases, catalog.binding().len());
        assert_eq!(stats.hydrocarbon_cases, catalog.hydrocarbons().len());
        assert!(stats.binding_cases > 0);
        assert!(stats.hydrocarbon_cases > 0);
    }

    #[test]
    fn repeated_searches_return_identical_results() {
        let catalog = catalog();
        let first: Vec<&str> = catalog
            .by_text("debido proceso")
            .iter()
            .map(|c| c.docket.as_str())
            .collect();
        let second: Vec<&str> = catalog
            .by_text("debido proceso")
            .iter()
            .map(|c| c.docket.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_dockets_are_rejected_at_build_time() {
        let err = JurisprudenceCatalog::new(vec![
            case("00-0001", "Ponente A", "01-01-2000"),
            case("00-0001", "Ponente B", "02-01-2000"),
        ])
        .unwrap_err();
        assert!(matches!(err, SearchError::DuplicateDocket { ref docket } if docket == "00-0001"));
    }

    #[test]
    fn missing_ponente_is_rejected_at_build_time() {
        let err = JurisprudenceCatalog::new(vec![case("00-0001", "  ", "01-01-2000")])
            .unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn malformed_date_is_rejected_at_build_time() {
        let err = JurisprudenceCatalog::new(vec![case("00-0001", "Ponente", "2000-01-01")])
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidDateFormat { .. }));
    }
}
