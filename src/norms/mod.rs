//! # Norms Catalog Module
//!
//! ## Purpose
//! Lookup and search over the static catalog of Venezuelan legal norms
//! (constitution, codes, organic laws, decree-laws) with their Gaceta
//! Oficial publication history.
//!
//! ## Input/Output Specification
//! - **Input**: Catalog keys, free-text search terms, norm types
//! - **Output**: Matching entries in catalog order, aggregate statistics
//! - **Lookup**: exact key match; absence is a valid outcome, not an error
//!
//! ## Key Features
//! - Insertion-ordered entries with a key index for O(1) lookup
//! - Case-insensitive free-text search over name, notes and keywords
//! - Exhaustive per-type and per-status statistics (zero counts included)
//! - Gaceta Oficial citation formatting with reform history

mod data;

use crate::errors::{Result, SearchError};
use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

/// Types of legal norms in the Venezuelan hierarchy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NormType {
    Constitucion,
    LeyOrganica,
    LeyOrdinaria,
    Codigo,
    DecretoLey,
    Reglamento,
    Resolucion,
}

impl NormType {
    /// All norm types, in hierarchy order
    pub const ALL: [NormType; 7] = [
        NormType::Constitucion,
        NormType::LeyOrganica,
        NormType::LeyOrdinaria,
        NormType::Codigo,
        NormType::DecretoLey,
        NormType::Reglamento,
        NormType::Resolucion,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            NormType::Constitucion => "Constitución",
            NormType::LeyOrganica => "Ley Orgánica",
            NormType::LeyOrdinaria => "Ley Ordinaria",
            NormType::Codigo => "Código",
            NormType::DecretoLey => "Decreto con Rango, Valor y Fuerza de Ley",
            NormType::Reglamento => "Reglamento",
            NormType::Resolucion => "Resolución",
        }
    }
}

impl fmt::Display for NormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a norm
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NormStatus {
    Vigente,
    Derogada,
    Modificada,
    ParcialmenteDerogada,
    Suspendida,
    Desconocido,
}

impl NormStatus {
    /// All lifecycle states
    pub const ALL: [NormStatus; 6] = [
        NormStatus::Vigente,
        NormStatus::Derogada,
        NormStatus::Modificada,
        NormStatus::ParcialmenteDerogada,
        NormStatus::Suspendida,
        NormStatus::Desconocido,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            NormStatus::Vigente => "Vigente",
            NormStatus::Derogada => "Derogada",
            NormStatus::Modificada => "Modificada",
            NormStatus::ParcialmenteDerogada => "Parcialmente Derogada",
            NormStatus::Suspendida => "Suspendida",
            NormStatus::Desconocido => "Desconocido",
        }
    }
}

impl fmt::Display for NormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of Gaceta Oficial issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GacetaType {
    Ordinaria,
    Extraordinaria,
}

impl GacetaType {
    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            GacetaType::Ordinaria => "Ordinaria",
            GacetaType::Extraordinaria => "Extraordinaria",
        }
    }
}

impl fmt::Display for GacetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One publication event in the Gaceta Oficial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GacetaReference {
    /// Gaceta issue number
    pub gaceta_number: String,
    /// Ordinary or extraordinary issue
    pub gaceta_type: GacetaType,
    /// Publication date (DD-MM-YYYY)
    pub date: String,
    /// What was published
    pub description: String,
    /// Publication action ("Publicación original", "Reforma", "Enmienda")
    pub action: String,
}

/// A legal norm with its Gaceta Oficial publication data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormEntry {
    /// Unique catalog key
    pub key: String,
    /// Official norm name
    pub name: String,
    /// Norm category
    pub norm_type: NormType,
    /// Current lifecycle status
    pub status: NormStatus,
    /// Gaceta number of the original publication
    pub gaceta_number: String,
    /// Issue kind of the original publication
    pub gaceta_type: GacetaType,
    /// Original publication date (DD-MM-YYYY)
    pub publication_date: String,
    /// Recorded reforms and amendments, oldest first
    pub reforms: Vec<GacetaReference>,
    /// Free-text notes on scope and content
    pub notes: String,
    /// Subject keyword tags
    pub keywords: Vec<String>,
}

impl NormEntry {
    /// Format the canonical Gaceta Oficial citation for this norm.
    pub fn citation(&self) -> String {
        let mut citation = format!(
            "{}, Gaceta Oficial {} No. {}, {}\nVigencia: {}",
            self.name,
            self.gaceta_type.label(),
            self.gaceta_number,
            self.publication_date,
            self.status.label(),
        );

        if self.status == NormStatus::Modificada {
            if let Some(last) = self.reforms.last() {
                citation.push_str(&format!(
                    "\nÚltima reforma: {}, Gaceta No. {}",
                    last.date, last.gaceta_number
                ));
            }
        }

        citation
    }

    /// True when any searchable field contains `term` (case-insensitive).
    fn matches(&self, term: &str) -> bool {
        text::contains(&self.key, term)
            || text::contains(&self.name, term)
            || text::contains(&self.notes, term)
            || self.keywords.iter().any(|kw| text::contains(kw, term))
    }
}

/// Aggregate statistics over the norms catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormsStatistics {
    /// Total number of entries
    pub total: usize,
    /// Entry count per norm type; every type present, zero counts included
    pub by_type: BTreeMap<NormType, usize>,
    /// Entry count per lifecycle status; every status present
    pub by_status: BTreeMap<NormStatus, usize>,
    /// Number of entries with at least one recorded reform
    pub with_reforms: usize,
}

/// The static norms catalog: insertion-ordered entries plus a key index
#[derive(Debug, Clone)]
pub struct NormsCatalog {
    entries: Vec<NormEntry>,
    index: HashMap<String, usize>,
}

impl NormsCatalog {
    /// Build a catalog from entries, validating every entry.
    ///
    /// Fails on an empty key or name, or on a duplicate key.
    pub fn new(entries: Vec<NormEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            validate_entry(entry)?;
            if index.insert(entry.key.clone(), position).is_some() {
                return Err(SearchError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }

        tracing::debug!("norms catalog initialized with {} entries", entries.len());
        Ok(Self { entries, index })
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[NormEntry] {
        &self.entries
    }

    /// Exact-key lookup. Absence is a valid outcome.
    pub fn lookup(&self, key: &str) -> Option<&NormEntry> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    /// Case-insensitive free-text search over key, name, notes and keywords.
    ///
    /// Results preserve catalog order. An empty or all-whitespace term
    /// matches every entry.
    pub fn search(&self, term: &str) -> Vec<&NormEntry> {
        let term = term.trim();
        let matches: Vec<&NormEntry> = if term.is_empty() {
            self.entries.iter().collect()
        } else {
            self.entries.iter().filter(|entry| entry.matches(term)).collect()
        };
        tracing::debug!(term, matches = matches.len(), "norm search executed");
        matches
    }

    /// All entries of the given type, catalog order preserved.
    pub fn by_type(&self, norm_type: NormType) -> Vec<&NormEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.norm_type == norm_type)
            .collect()
    }

    /// Aggregate statistics; per-category counts sum to the total.
    pub fn statistics(&self) -> NormsStatistics {
        let mut by_type: BTreeMap<NormType, usize> =
            NormType::ALL.iter().map(|&t| (t, 0)).collect();
        let mut by_status: BTreeMap<NormStatus, usize> =
            NormStatus::ALL.iter().map(|&s| (s, 0)).collect();
        let mut with_reforms = 0;

        for entry in &self.entries {
            *by_type.entry(entry.norm_type).or_default() += 1;
            *by_status.entry(entry.status).or_default() += 1;
            if !entry.reforms.is_empty() {
                with_reforms += 1;
            }
        }

        NormsStatistics {
            total: self.entries.len(),
            by_type,
            by_status,
            with_reforms,
        }
    }
}

fn validate_entry(entry: &NormEntry) -> Result<()> {
    if entry.key.trim().is_empty() {
        return Err(crate::validation_error!("key", "norm key must not be empty"));
    }
    if entry.name.trim().is_empty() {
        return Err(crate::validation_error!(
            "name",
            format!("norm '{}' has an empty name", entry.key)
        ));
    }
    Ok(())
}

/// The seeded norms catalog, built and validated on first access.
pub fn catalog() -> &'static NormsCatalog {
    static CATALOG: LazyLock<NormsCatalog> = LazyLock::new(|| {
        NormsCatalog::new(data::known_norms()).expect("embedded norms catalog is valid")
    });
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, name: &str, norm_type: NormType) -> NormEntry {
        NormEntry {
            key: key.into(),
            name: name.into(),
            norm_type,
            status: NormStatus::Vigente,
            gaceta_number: "1.234".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "01-01-2000".into(),
            reforms: vec![],
            notes: String::new(),
            keywords: vec![],
        }
    }

    #[test]
    fn lookup_returns_entry_for_every_seeded_key() {
        let catalog = catalog();
        for entry in catalog.entries() {
            let found = catalog.lookup(&entry.key).expect("seeded key resolves");
            assert_eq!(found.key, entry.key);
        }
    }

    #[test]
    fn lookup_of_unknown_key_is_none() {
        assert!(catalog().lookup("no-such-norm").is_none());
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let catalog = catalog();
        let lower = catalog.search("hidrocarburos");
        let upper = catalog.search("HIDROCARBUROS");
        assert!(!lower.is_empty());
        let lower_keys: Vec<&str> = lower.iter().map(|e| e.key.as_str()).collect();
        let upper_keys: Vec<&str> = upper.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(lower_keys, upper_keys);

        // Catalog order: positions must be strictly increasing.
        let positions: Vec<usize> = lower_keys
            .iter()
            .map(|key| {
                catalog
                    .entries()
                    .iter()
                    .position(|e| e.key == *key)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_term_matches_all() {
        let catalog = catalog();
        assert_eq!(catalog.search("").len(), catalog.len());
        assert_eq!(catalog.search("   ").len(), catalog.len());
    }

    #[test]
    fn unmatched_term_yields_empty_result() {
        assert!(catalog().search("no-such-term-xyz").is_empty());
    }

    #[test]
    fn by_type_contains_every_entry_of_that_type() {
        let catalog = catalog();
        for entry in catalog.entries() {
            let of_type = catalog.by_type(entry.norm_type);
            assert!(of_type.iter().any(|e| e.key == entry.key));
            assert!(of_type.iter().all(|e| e.norm_type == entry.norm_type));
        }
    }

    #[test]
    fn statistics_counts_sum_to_total() {
        let stats = catalog().statistics();
        assert_eq!(stats.total, catalog().len());
        assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_status.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn statistics_include_zero_count_types() {
        let stats = catalog().statistics();
        assert_eq!(stats.by_type.len(), NormType::ALL.len());
        assert_eq!(stats.by_status.len(), NormStatus::ALL.len());
        // The seeded catalog carries no resoluciones; the count is still present.
        assert_eq!(stats.by_type[&NormType::Resolucion], 0);
    }

    #[test]
    fn citation_carries_name_gaceta_and_status() {
        let norm = catalog().lookup("lottt").expect("seeded norm");
        let citation = norm.citation();
        assert!(citation.contains(&norm.name));
        assert!(citation.contains(&norm.gaceta_number));
        assert!(citation.contains(norm.status.label()));
    }

    #[test]
    fn citation_of_modified_norm_names_last_reform() {
        let constitution = catalog().lookup("constitucion").expect("seeded norm");
        assert_eq!(constitution.status, NormStatus::Modificada);
        let citation = constitution.citation();
        let last = constitution.reforms.last().expect("recorded reform");
        assert!(citation.contains("Última reforma"));
        assert!(citation.contains(&last.gaceta_number));
    }

    #[test]
    fn empty_name_is_rejected_at_build_time() {
        let err = NormsCatalog::new(vec![entry("bad", "  ", NormType::Codigo)]).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn duplicate_keys_are_rejected_at_build_time() {
        let err = NormsCatalog::new(vec![
            entry("dup", "Ley A", NormType::LeyOrdinaria),
            entry("dup", "Ley B", NormType::LeyOrdinaria),
        ])
        .unwrap_err();
        assert!(matches!(err, SearchError::DuplicateKey { ref key } if key == "dup"));
    }

    #[test]
    fn statistics_serialize_to_json() {
        let stats = catalog().statistics();
        let json = serde_json::to_string(&stats).expect("statistics serialize");
        assert!(json.contains("\"total\""));
        assert!(json.contains("LeyOrganica"));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let catalog = catalog();
        let first: Vec<&str> = catalog.search("código").iter().map(|e| e.key.as_str()).collect();
        let second: Vec<&str> = catalog.search("código").iter().map(|e| e.key.as_str()).collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
