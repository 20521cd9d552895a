//! Gallery view: every element with rarity, drop chance and lock status.

use crate::rarity::{rarity_of, Rarity};
use crate::state::GameState;
use elemcraft_core::{Category, Universe};
use serde::Serialize;

/// One gallery row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryEntry {
    /// Element name.
    pub name: String,
    /// Element emoji.
    pub emoji: &'static str,
    /// Construction origin.
    pub category: Category,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Share of the universe's total rarity weight, in percent.
    pub drop_percent: f64,
    /// Whether the player has discovered it.
    pub unlocked: bool,
}

fn total_weight(universe: &Universe) -> f64 {
    universe
        .elements()
        .names()
        .map(|name| rarity_of(name).weight())
        .sum()
}

/// Drop chance of `name` relative to every element of the universe, in percent.
pub fn drop_percent(universe: &Universe, name: &str) -> f64 {
    let total = total_weight(universe);
    if total == 0.0 {
        return 0.0;
    }
    rarity_of(name).weight() / total * 100.0
}

/// Elements whose name contains `filter` (case-insensitive), in universe order.
pub fn gallery(universe: &Universe, state: &GameState, filter: &str) -> Vec<GalleryEntry> {
    let total = total_weight(universe);
    let needle = filter.to_lowercase();
    universe
        .elements()
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .map(|e| {
            let rarity = rarity_of(&e.name);
            GalleryEntry {
                name: e.name.clone(),
                emoji: e.emoji,
                category: e.category,
                rarity,
                drop_percent: if total == 0.0 {
                    0.0
                } else {
                    rarity.weight() / total * 100.0
                },
                unlocked: state.is_discovered(&e.name),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemcraft_core::UniverseConfig;

    fn universe() -> Universe {
        Universe::generate(&UniverseConfig {
            generated_total: 20,
            recipe_target: 10,
            ..UniverseConfig::default()
        })
    }

    #[test]
    fn drop_percentages_sum_to_hundred() {
        let universe = universe();
        let entries = gallery(&universe, &GameState::new(), "");
        assert_eq!(entries.len(), universe.elements().len());
        let sum: f64 = entries.iter().map(|e| e.drop_percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn base_elements_are_unlocked_and_most_likely() {
        let universe = universe();
        let entries = gallery(&universe, &GameState::new(), "fire");
        let fire = entries.iter().find(|e| e.name == "Fire").unwrap();
        assert!(fire.unlocked);
        assert_eq!(fire.rarity, Rarity::Common);
        assert!(drop_percent(&universe, "Fire") > drop_percent(&universe, "Steam"));
    }

    #[test]
    fn filter_matches_substring() {
        let universe = universe();
        let entries = gallery(&universe, &GameState::new(), "STEA");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Steam");
        assert!(!entries[0].unlocked);
    }
}
