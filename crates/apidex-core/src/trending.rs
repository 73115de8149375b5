//! Trending APIs for the browse view. The list is editorial: a fixed,
//! ordered slate of ids resolved against whatever catalog is loaded.

use crate::catalog::Catalog;
use crate::models::ApiRecord;

/// Editorial trending slate, in display order.
pub const TRENDING_IDS: [&str; 5] = [
    "jsonplaceholder",
    "github",
    "restcountries",
    "openweathermap",
    "coingecko",
];

/// Resolve the trending slate against the catalog, preserving slate order.
/// Ids missing from the catalog are skipped; a swapped-in catalog is not
/// required to carry the whole slate.
pub fn trending(catalog: &Catalog) -> Vec<ApiRecord> {
    TRENDING_IDS
        .iter()
        .filter_map(|id| catalog.get(id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_resolves_full_slate() {
        let records = trending(&Catalog::builtin());
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, TRENDING_IDS);
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let catalog = Catalog::from_records(
            Catalog::builtin()
                .records()
                .iter()
                .filter(|r| r.id != "github")
                .cloned()
                .collect(),
        );
        let records = trending(&catalog);
        assert_eq!(records.len(), TRENDING_IDS.len() - 1);
        assert!(records.iter().all(|r| r.id != "github"));
    }
}
