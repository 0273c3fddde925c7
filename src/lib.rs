//! # Venezuelan Legal Reference Search Engine
//!
//! ## Overview
//! This library implements an in-memory lookup and search engine over two
//! static, hand-curated Venezuelan legal reference datasets: a catalog of
//! legal norms (constitution, codes, organic laws, decree-laws) with their
//! Gaceta Oficial publication history, and a catalog of Tribunal Supremo de
//! Justicia (TSJ) jurisprudence across all seven chambers.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `norms`: Norms catalog — key lookup, free-text search, type filtering,
//!   statistics, Gaceta citation formatting
//! - `jurisprudence`: Jurisprudence catalog — chamber/article/subject/text/
//!   keyword search, binding and hydrocarbon shortcuts, the unified
//!   `execute_search` entry point, statistics
//! - `text`: Tokenization-free matching helpers (Unicode normalization,
//!   case folding, containment predicates)
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Catalog keys, search queries (text), filter parameters
//! - **Output**: Matching entries in catalog order, search results with
//!   suggestions, aggregate statistics
//! - **Guarantees**: Deterministic results, no runtime query errors; both
//!   catalogs are built once and never mutated
//!
//! ## Usage
//! ```rust
//! use venezuelan_legal_search::{jurisprudence, norms};
//!
//! let result = jurisprudence::catalog().execute_search("amparo");
//! println!("Found {} cases", result.total);
//!
//! if let Some(norm) = norms::catalog().lookup("lottt") {
//!     println!("{}", norm.citation());
//! }
//! ```

// Core modules
pub mod errors;
pub mod jurisprudence;
pub mod norms;
pub mod text;

// Re-exports for convenience
pub use errors::{Result, SearchError};
pub use jurisprudence::{
    CaseEntry, JurisprudenceCatalog, JurisprudenceStatistics, SalaTSJ, SearchQuery,
    SearchResult, TipoDecision,
};
pub use norms::{
    GacetaReference, GacetaType, NormEntry, NormStatus, NormType, NormsCatalog,
    NormsStatistics,
};
