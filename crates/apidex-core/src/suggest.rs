//! Autocomplete suggestions: name matches from the catalog, then category
//! matches, capped at six. Pure function of its inputs.

use crate::catalog::Catalog;
use crate::models::{Category, Suggestion, SuggestionKind};

/// Hard cap on the dropdown length.
pub const MAX_SUGGESTIONS: usize = 6;

/// Suggest completions for a partial query. Empty or whitespace-only input
/// yields nothing. Catalog matches come before category matches; the combined
/// list is truncated to [`MAX_SUGGESTIONS`].
pub fn suggest(catalog: &Catalog, categories: &[Category], query: &str) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    for record in catalog.records() {
        if record.name.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Api,
                text: record.name.clone(),
            });
        }
    }

    for category in categories {
        if category.name.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Category,
                text: category.name.clone(),
            });
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_categories, Catalog};

    #[test]
    fn empty_query_yields_nothing() {
        let catalog = Catalog::builtin();
        assert!(suggest(&catalog, &builtin_categories(), "").is_empty());
        assert!(suggest(&catalog, &builtin_categories(), "   ").is_empty());
    }

    #[test]
    fn name_match_emits_api_suggestion() {
        let catalog = Catalog::builtin();
        let suggestions = suggest(&catalog, &[], "git");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Api);
        assert_eq!(suggestions[0].text, "GitHub");
    }

    #[test]
    fn category_matches_come_after_api_matches() {
        let catalog = Catalog::builtin();
        let categories = builtin_categories();
        // "media" hits no API name but the Content & Media category.
        let suggestions = suggest(&catalog, &categories, "media");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Category);

        // "data" hits The Movie Database and the Data & Information category;
        // the API comes first.
        let suggestions = suggest(&catalog, &categories, "data");
        assert!(suggestions.len() >= 2);
        assert_eq!(suggestions[0].kind, SuggestionKind::Api);
        assert!(suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Category));
    }

    #[test]
    fn never_more_than_six() {
        let catalog = Catalog::builtin();
        let categories = builtin_categories();
        // Every builtin name and category contains a vowel somewhere; "e" is
        // a wide net.
        let suggestions = suggest(&catalog, &categories, "e");
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let upper = suggest(&catalog, &[], "GITHUB");
        let lower = suggest(&catalog, &[], "github");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }
}
