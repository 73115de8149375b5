//! The filter engine: a single linear pass over the catalog.
//!
//! At nine records there is nothing to index. Keep it a pure function so the
//! reducer and the CLI share it and tests need no terminal.

use crate::catalog::Catalog;
use crate::models::{ApiRecord, CategoryFilter};

/// Filter the catalog by category and free-text query, ordered by descending
/// popularity. The sort is stable, so equal-popularity records keep their
/// catalog order.
///
/// An empty query with `CategoryFilter::All` returns the whole catalog,
/// popularity-ordered. An empty result is a valid outcome, not an error.
pub fn filter(catalog: &Catalog, query: &str, category: &CategoryFilter) -> Vec<ApiRecord> {
    let needle = query.trim().to_lowercase();

    let mut results: Vec<ApiRecord> = catalog
        .records()
        .iter()
        .filter(|record| category.matches(record))
        .filter(|record| needle.is_empty() || matches_query(record, &needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which is exactly what the tiebreak needs.
    results.sort_by(|a, b| b.metadata.popularity.cmp(&a.metadata.popularity));
    results
}

/// Case-insensitive substring match over every searchable field.
/// `needle` must already be trimmed and lowercased.
fn matches_query(record: &ApiRecord, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
        || record.use_case().to_lowercase().contains(needle)
}

/// Monotonic sequence guard for in-flight searches.
///
/// Each search is stamped with the next sequence number; a completion is
/// accepted only if it carries the latest stamp. That is the whole defence
/// against a slow stale computation overwriting a fresher result.
#[derive(Debug, Default)]
pub struct SearchSession {
    issued: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new search. Supersedes every previously issued stamp.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True only for the most recently issued stamp.
    pub fn accept(&self, seq: u64) -> bool {
        seq != 0 && seq == self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{ApiMetadata, AuthKind};

    fn record(id: &str, name: &str, category: &str, popularity: u32) -> ApiRecord {
        ApiRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            category: category.to_string(),
            tags: vec![],
            use_case: None,
            docs_url: format!("https://example.com/{}", id),
            auth: AuthKind::None,
            https: true,
            metadata: ApiMetadata {
                popularity,
                latency_ms: None,
                uptime_pct: None,
            },
        }
    }

    /// The worked example from the design discussion: gh/jp in "data",
    /// cg in "utility".
    fn example_catalog() -> Catalog {
        Catalog::from_records(vec![
            record("gh", "GitHub", "data", 90),
            record("jp", "JSONPlaceholder", "data", 70),
            record("cg", "CoinGecko", "utility", 80),
        ])
    }

    fn ids(results: &[ApiRecord]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_query_all_categories_returns_everything_by_popularity() {
        let results = filter(&example_catalog(), "", &CategoryFilter::All);
        assert_eq!(ids(&results), vec!["gh", "cg", "jp"]);
    }

    #[test]
    fn category_filter_restricts_and_keeps_popularity_order() {
        let results = filter(
            &example_catalog(),
            "",
            &CategoryFilter::Id("data".to_string()),
        );
        assert_eq!(ids(&results), vec!["gh", "jp"]);
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let results = filter(&example_catalog(), "coin", &CategoryFilter::All);
        assert_eq!(ids(&results), vec!["cg"]);

        let results = filter(&example_catalog(), "COIN", &CategoryFilter::All);
        assert_eq!(ids(&results), vec!["cg"]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let results = filter(&example_catalog(), "  github  ", &CategoryFilter::All);
        assert_eq!(ids(&results), vec!["gh"]);

        // All-whitespace is the same as empty.
        let results = filter(&example_catalog(), "   ", &CategoryFilter::All);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn query_matches_tags_and_use_case() {
        let mut tagged = record("tg", "Tagged", "data", 50);
        tagged.tags = vec!["astronomy".to_string()];
        let mut cased = record("uc", "UseCased", "data", 40);
        cased.use_case = Some("Telescope scheduling".to_string());
        let catalog = Catalog::from_records(vec![tagged, cased]);

        assert_eq!(
            ids(&filter(&catalog, "astro", &CategoryFilter::All)),
            vec!["tg"]
        );
        assert_eq!(
            ids(&filter(&catalog, "telescope", &CategoryFilter::All)),
            vec!["uc"]
        );
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let results = filter(&example_catalog(), "zzz-nothing", &CategoryFilter::All);
        assert!(results.is_empty());
    }

    #[test]
    fn equal_popularity_preserves_catalog_order() {
        let catalog = Catalog::from_records(vec![
            record("a", "Alpha", "data", 50),
            record("b", "Beta", "data", 50),
            record("c", "Gamma", "data", 50),
        ]);
        let results = filter(&catalog, "", &CategoryFilter::All);
        assert_eq!(ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn combined_category_and_query_must_both_hold() {
        let results = filter(
            &example_catalog(),
            "git",
            &CategoryFilter::Id("utility".to_string()),
        );
        assert!(results.is_empty());
    }

    #[test]
    fn session_accepts_only_latest_seq() {
        let mut session = SearchSession::new();
        let first = session.begin();
        let second = session.begin();

        assert!(!session.accept(first));
        assert!(session.accept(second));
        assert!(!session.accept(0));
        assert_eq!(session.latest(), second);
    }
}
