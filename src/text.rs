//! # Text Matching Module
//!
//! ## Purpose
//! Text normalization and containment predicates shared by both catalogs.
//! Catalog text is accented Spanish, so matching normalizes to Unicode NFC
//! before case folding — "Petróleo" and "petróleo" compare equal regardless
//! of how the source text was composed.
//!
//! ## Input/Output Specification
//! - **Input**: Raw entry text and user query terms
//! - **Output**: Normalized strings, containment verdicts
//! - **Matching**: case-insensitive substring, conjunctive multi-term

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Leading `Art.` / `Artículo` qualifier on a CRBV article reference.
static ARTICLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*art(?:[ií]culo)?\.?\s*").expect("valid article pattern"));

/// Normalize text for matching: Unicode NFC followed by lowercasing.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Case-insensitive substring containment.
pub fn contains(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// True when `haystack` contains every one of `needles` (case-insensitive).
///
/// Vacuously true for an empty needle list.
pub fn contains_all<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    let haystack = normalize(haystack);
    needles
        .iter()
        .all(|needle| haystack.contains(&normalize(needle.as_ref())))
}

/// Strip the `Art.` / `Artículo` qualifier from a CRBV article reference.
///
/// `"Art. 334"`, `"Artículo 334"` and `"334"` all normalize to `"334"`.
pub fn normalize_article_reference(reference: &str) -> String {
    ARTICLE_PREFIX.replace(reference, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains("Sala Constitucional", "constitucional"));
        assert!(contains("régimen de regalías", "REGALÍAS"));
        assert!(!contains("amparo", "hidrocarburos"));
    }

    #[test]
    fn contains_all_requires_every_term() {
        assert!(contains_all("derecho al debido proceso", &["debido", "proceso"]));
        assert!(!contains_all("derecho al debido proceso", &["debido", "tributario"]));
    }

    #[test]
    fn contains_all_is_vacuously_true_for_no_terms() {
        let none: [&str; 0] = [];
        assert!(contains_all("anything", &none));
    }

    #[test]
    fn article_reference_prefixes_are_stripped() {
        assert_eq!(normalize_article_reference("Art. 334"), "334");
        assert_eq!(normalize_article_reference("Artículo 334"), "334");
        assert_eq!(normalize_article_reference("art. 49.7"), "49.7");
        assert_eq!(normalize_article_reference(" 334 "), "334");
    }
}
