//! Pairwise recipe table.

use serde::Serialize;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;

/// Separator between the two names of a canonical pair key.
pub const PAIR_SEPARATOR: char = '+';

/// Canonical key for an unordered pair of element names.
///
/// The two names are sorted by string order and joined with `+`, so
/// `PairKey::new("Water", "Fire") == PairKey::new("Fire", "Water")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Canonicalize a pair of names.
    pub fn new(a: &str, b: &str) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut key = String::with_capacity(lo.len() + hi.len() + 1);
        key.push_str(lo);
        key.push(PAIR_SEPARATOR);
        key.push_str(hi);
        Self(key)
    }

    /// The joined key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable-after-build mapping from pair key to result element name.
///
/// Keys are never overwritten: the first insertion for a pair wins.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RecipeBook {
    recipes: BTreeMap<PairKey, String>,
}

impl RecipeBook {
    /// Create an empty recipe book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a recipe if the pair is unused. Returns whether it was added.
    pub(crate) fn insert(&mut self, key: PairKey, result: impl Into<String>) -> bool {
        match self.recipes.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(result.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Result of combining two elements, in either order.
    pub fn combine(&self, a: &str, b: &str) -> Option<&str> {
        self.get(&PairKey::new(a, b))
    }

    /// Result stored for a canonical key.
    pub fn get(&self, key: &PairKey) -> Option<&str> {
        self.recipes.get(key).map(String::as_str)
    }

    /// Whether a canonical key is present.
    pub fn contains(&self, key: &PairKey) -> bool {
        self.recipes.contains_key(key)
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &str)> {
        self.recipes.iter().map(|(k, v)| (k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("Water", "Fire"), PairKey::new("Fire", "Water"));
        assert_eq!(PairKey::new("Water", "Fire").as_str(), "Fire+Water");
        assert_eq!(PairKey::new("Air", "Air").as_str(), "Air+Air");
    }

    #[test]
    fn pair_key_sorts_uppercase_before_lowercase() {
        assert_eq!(PairKey::new("b", "C").as_str(), "C+b");
    }

    #[test]
    fn insert_never_overwrites() {
        let mut book = RecipeBook::new();
        assert!(book.insert(PairKey::new("Fire", "Water"), "Steam"));
        assert!(!book.insert(PairKey::new("Water", "Fire"), "Fog"));

        assert_eq!(book.len(), 1);
        assert_eq!(book.combine("Water", "Fire"), Some("Steam"));
    }

    #[test]
    fn missing_pair_is_none() {
        let book = RecipeBook::new();
        assert!(book.is_empty());
        assert_eq!(book.combine("Fire", "Air"), None);
    }

    #[test]
    fn serializes_as_key_map() {
        let mut book = RecipeBook::new();
        book.insert(PairKey::new("Fire", "Fire"), "Ember");
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"Fire+Fire":"Ember"}"#);
    }
}
