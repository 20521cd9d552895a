//! Elements and the insertion-ordered element registry.

use crate::emoji::emoji_for;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Where an element came from during universe construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// One of the four starting elements.
    Base,
    /// Produced by the name synthesizer.
    Generated,
    /// Result of a curated base-pair recipe.
    Natural,
    /// Result of a bulk-filled recipe.
    Product,
}

impl Category {
    /// Lowercase label used in saves and listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Generated => "generated",
            Category::Natural => "natural",
            Category::Product => "product",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named element of the universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Unique display name, also the element key.
    pub name: String,
    /// Glyph derived from the name.
    pub emoji: &'static str,
    /// Construction origin.
    pub category: Category,
}

impl Element {
    /// Create an element, deriving its emoji from the name.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        let name = name.into();
        let emoji = emoji_for(&name);
        Self {
            name,
            emoji,
            category,
        }
    }
}

/// Elements keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: Vec<Element>,
    name_to_index: HashMap<String, usize>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element unless the name is taken. Returns whether it was added.
    pub(crate) fn insert(&mut self, name: impl Into<String>, category: Category) -> bool {
        let name = name.into();
        if self.name_to_index.contains_key(&name) {
            return false;
        }
        self.name_to_index.insert(name.clone(), self.elements.len());
        self.elements.push(Element::new(name, category));
        true
    }

    /// Look up an element by name.
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.name_to_index
            .get(name)
            .and_then(|&idx| self.elements.get(idx))
    }

    /// Whether an element with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Position of an element in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Element at an insertion-order position.
    pub fn at(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Element names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|e| e.name.as_str())
    }

    /// Number of elements in a category.
    pub fn count_in(&self, category: Category) -> usize {
        self.elements
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}

impl Serialize for ElementRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
