//! Session-local favorites. Copy-on-write so the owning state can rely on
//! cheap change detection: toggling returns a new set, never mutates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of favorited record ids. BTreeSet keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesSet(BTreeSet<String>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership, returning the updated set. The receiver is
    /// untouched; double toggle is the identity.
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        Self(next)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let empty = FavoritesSet::new();
        let with = empty.toggle("github");
        assert!(with.contains("github"));
        assert_eq!(with.len(), 1);

        let without = with.toggle("github");
        assert!(!without.contains("github"));
        assert!(without.is_empty());
    }

    #[test]
    fn double_toggle_is_identity() {
        let base = FavoritesSet::new().toggle("a").toggle("b");
        assert_eq!(base.toggle("c").toggle("c"), base);
        assert_eq!(base.toggle("a").toggle("a"), base);
    }

    #[test]
    fn toggle_does_not_mutate_receiver() {
        let base = FavoritesSet::new();
        let _derived = base.toggle("github");
        assert!(base.is_empty());
    }
}
