//! The static API catalog and its loader.
//!
//! The built-in dataset ships with the binary; a JSON file can replace it via
//! config. Records that fail to deserialize are skipped with a warning rather
//! than failing the whole load.

use crate::models::{ApiMetadata, ApiRecord, AuthKind, Category};
use crate::{Error, Result};
use std::path::Path;

/// Immutable, ordered collection of API records with id lookup.
///
/// Order matters: it is the tiebreak for equal-popularity records, so the
/// catalog preserves insertion order instead of using a map.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<ApiRecord>,
}

impl Catalog {
    /// Build a catalog from records, dropping duplicates by id.
    pub fn from_records(records: Vec<ApiRecord>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id.clone()) {
                kept.push(record);
            } else {
                tracing::warn!(id = %record.id, "duplicate record id, keeping first");
            }
        }
        Self { records: kept }
    }

    /// Load a catalog from a JSON file: an array of record objects.
    ///
    /// A missing or unreadable file is fatal; an individual malformed record
    /// is skipped and logged so one bad entry cannot take search down.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::CatalogError(format!("cannot read {}: {}", path.display(), e)))?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

        let mut records = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<ApiRecord>(value) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(error = %e, "skipping malformed catalog record"),
            }
        }

        if records.is_empty() {
            return Err(Error::CatalogError(format!(
                "{} contained no usable records",
                path.display()
            )));
        }

        Ok(Self::from_records(records))
    }

    /// Load from `path`, falling back to the built-in catalog on failure.
    /// The error text comes back too so the UI can surface it instead of
    /// dying at startup.
    pub fn load_or_builtin(path: &Path) -> (Self, Option<String>) {
        match Self::load(path) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to built-in catalog");
                (Self::builtin(), Some(format!("Using built-in catalog: {}", e)))
            }
        }
    }

    pub fn records(&self) -> &[ApiRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ApiRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The bundled dataset. Hand-curated, popularity values are editorial.
    pub fn builtin() -> Self {
        let record = |id: &str,
                      name: &str,
                      description: &str,
                      category: &str,
                      tags: &[&str],
                      use_case: &str,
                      docs_url: &str,
                      auth: AuthKind,
                      popularity: u32,
                      latency_ms: u32| ApiRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            use_case: Some(use_case.to_string()),
            docs_url: docs_url.to_string(),
            auth,
            https: true,
            metadata: ApiMetadata {
                popularity,
                latency_ms: Some(latency_ms),
                uptime_pct: Some(99.9),
            },
        };

        Self::from_records(vec![
            record(
                "unsplash",
                "Unsplash",
                "High-resolution stock photography with search and curated collections",
                "content-media",
                &["photos", "images", "media"],
                "Hero images and placeholder photography for prototypes",
                "https://unsplash.com/documentation",
                AuthKind::ApiKey,
                85,
                120,
            ),
            record(
                "giphy",
                "Giphy",
                "GIF and sticker search across the largest animated media library",
                "content-media",
                &["gifs", "media", "entertainment"],
                "Reaction GIFs in chat and social applications",
                "https://developers.giphy.com/docs/api",
                AuthKind::ApiKey,
                78,
                150,
            ),
            record(
                "tmdb",
                "The Movie Database",
                "Community-built movie, TV and cast metadata with posters and ratings",
                "content-media",
                &["movies", "tv", "entertainment"],
                "Film discovery apps and watchlist tooling",
                "https://developer.themoviedb.org/docs",
                AuthKind::ApiKey,
                81,
                180,
            ),
            record(
                "github",
                "GitHub",
                "Repositories, issues, pull requests and user data for the largest code host",
                "data-information",
                &["git", "developer", "code"],
                "Developer dashboards and contribution analytics",
                "https://docs.github.com/rest",
                AuthKind::OAuth,
                95,
                90,
            ),
            record(
                "restcountries",
                "REST Countries",
                "Country facts: names, capitals, currencies, languages and flags",
                "data-information",
                &["geography", "countries", "reference"],
                "Country pickers and locale-aware forms",
                "https://restcountries.com",
                AuthKind::None,
                72,
                110,
            ),
            record(
                "wikipedia",
                "Wikipedia",
                "Article summaries, full text and page metadata from the free encyclopedia",
                "data-information",
                &["knowledge", "reference", "articles"],
                "In-app reference lookups and article previews",
                "https://www.mediawiki.org/wiki/API:Main_page",
                AuthKind::None,
                88,
                140,
            ),
            record(
                "jsonplaceholder",
                "JSONPlaceholder",
                "Fake REST endpoints for posts, comments, users and todos",
                "utility-service",
                &["testing", "mock", "prototyping"],
                "Frontend prototyping before a real backend exists",
                "https://jsonplaceholder.typicode.com",
                AuthKind::None,
                90,
                80,
            ),
            record(
                "openweathermap",
                "OpenWeatherMap",
                "Current weather, forecasts and historical data for any coordinates",
                "utility-service",
                &["weather", "forecast", "geo"],
                "Weather widgets and location-aware scheduling",
                "https://openweathermap.org/api",
                AuthKind::ApiKey,
                86,
                130,
            ),
            record(
                "coingecko",
                "CoinGecko",
                "Cryptocurrency prices, market charts and exchange listings",
                "utility-service",
                &["crypto", "finance", "markets"],
                "Price tickers and portfolio trackers",
                "https://docs.coingecko.com",
                AuthKind::None,
                80,
                160,
            ),
        ])
    }
}

/// The fixed category enumeration. Counts are part of the enumeration by
/// design, not recomputed from the catalog.
pub fn builtin_categories() -> Vec<Category> {
    let category = |id: &str, name: &str, description: &str, count: usize| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        count,
    };

    vec![
        category(
            "content-media",
            "Content & Media",
            "APIs for content, media, and entertainment data",
            3,
        ),
        category(
            "data-information",
            "Data & Information",
            "APIs providing factual data and reference information",
            3,
        ),
        category(
            "utility-service",
            "Utility & Service",
            "APIs for utility functions and enhanced experiences",
            3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.records().iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn builtin_categories_cover_every_record() {
        let catalog = Catalog::builtin();
        let categories = builtin_categories();
        for record in catalog.records() {
            assert!(
                categories.iter().any(|c| c.id == record.category),
                "record {} references unknown category {}",
                record.id,
                record.category
            );
        }
    }

    #[test]
    fn category_counts_match_catalog() {
        let catalog = Catalog::builtin();
        for category in builtin_categories() {
            let actual = catalog
                .records()
                .iter()
                .filter(|r| r.category == category.id)
                .count();
            assert_eq!(actual, category.count, "count drifted for {}", category.id);
        }
    }

    #[test]
    fn bad_catalog_path_falls_back_to_builtin_with_message() {
        let (catalog, message) =
            Catalog::load_or_builtin(std::path::Path::new("/no/such/catalog.json"));
        assert_eq!(catalog, Catalog::builtin());
        let message = message.expect("fallback must explain itself");
        assert!(message.contains("Catalog unavailable"), "got: {}", message);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let mut records = Catalog::builtin().records().to_vec();
        let mut dup = records[0].clone();
        dup.name = "Impostor".to_string();
        records.push(dup);

        let catalog = Catalog::from_records(records);
        assert_eq!(catalog.len(), Catalog::builtin().len());
        assert_ne!(catalog.records()[0].name, "Impostor");
    }
}
