//! Player state and the operations that mutate it.
//!
//! Every operation validates before it mutates, so an error never leaves a
//! partial change behind and a new discovery updates `discovered` and `coins`
//! together.

use crate::error::GameError;
use elemcraft_core::{Universe, BASE_ELEMENTS};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use tracing::info;

/// Coins granted for crafting an element for the first time.
pub const DISCOVERY_REWARD: u64 = 10;

/// Coins granted when a purchase unlocks an undiscovered element.
pub const PURCHASE_BONUS: u64 = 10;

/// Result of a successful craft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CraftOutcome {
    /// The result was unlocked by this craft.
    Discovered {
        /// Resulting element.
        name: String,
        /// Coins granted.
        reward: u64,
    },
    /// The result was already discovered; no reward.
    Repeated {
        /// Resulting element.
        name: String,
    },
}

impl CraftOutcome {
    /// Name of the crafted element.
    pub fn name(&self) -> &str {
        match self {
            CraftOutcome::Discovered { name, .. } | CraftOutcome::Repeated { name } => name,
        }
    }

    /// Whether the craft unlocked a new element.
    pub fn is_new(&self) -> bool {
        matches!(self, CraftOutcome::Discovered { .. })
    }
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    /// Purchased element.
    pub name: String,
    /// Coins deducted.
    pub price: u64,
    /// Whether the element was appended to the inventory.
    pub added_to_inventory: bool,
    /// Whether the purchase unlocked the element.
    pub discovered: bool,
    /// Bonus coins granted for the unlock.
    pub bonus: u64,
}

/// Discovery progress over a universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Discovered element count.
    pub discovered: usize,
    /// Elements in the universe.
    pub total: usize,
    /// Rounded percentage.
    pub percent: u32,
}

/// Persisted form of [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Discovered element names.
    #[serde(default, deserialize_with = "null_as_default")]
    pub discovered: Vec<String>,
    /// Held element names, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Vec<String>,
    /// Coin balance.
    #[serde(default, deserialize_with = "null_as_default")]
    pub coins: u64,
    /// Seed of the universe the state belongs to.
    pub seed: u32,
}

// Missing and `null` fields both load as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Discovered set, inventory and coins of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    discovered: BTreeSet<String>,
    inventory: Vec<String>,
    coins: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial state: base elements discovered and held, no coins.
    pub fn new() -> Self {
        Self {
            discovered: BASE_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            inventory: BASE_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            coins: 0,
        }
    }

    /// Restore from a snapshot. Base elements are always discovered.
    pub fn from_snapshot(saved: SavedState) -> Self {
        let mut discovered: BTreeSet<String> = saved.discovered.into_iter().collect();
        discovered.extend(BASE_ELEMENTS.iter().map(|s| s.to_string()));
        Self {
            discovered,
            inventory: saved.inventory,
            coins: saved.coins,
        }
    }

    /// Snapshot for persistence.
    pub fn snapshot(&self, seed: u32) -> SavedState {
        SavedState {
            discovered: self.discovered.iter().cloned().collect(),
            inventory: self.inventory.clone(),
            coins: self.coins,
            seed,
        }
    }

    /// Combine two elements.
    ///
    /// The result is always appended to the inventory. A first-time result is
    /// discovered and rewards [`DISCOVERY_REWARD`] coins.
    pub fn craft(
        &mut self,
        universe: &Universe,
        a: &str,
        b: &str,
    ) -> Result<CraftOutcome, GameError> {
        let result = universe
            .recipes()
            .combine(a, b)
            .ok_or_else(|| GameError::NoRecipe {
                a: a.to_string(),
                b: b.to_string(),
            })?
            .to_string();

        self.inventory.push(result.clone());
        if self.discovered.insert(result.clone()) {
            self.coins = self.coins.saturating_add(DISCOVERY_REWARD);
            info!(element = %result, coins = self.coins, "new discovery");
            Ok(CraftOutcome::Discovered {
                name: result,
                reward: DISCOVERY_REWARD,
            })
        } else {
            Ok(CraftOutcome::Repeated { name: result })
        }
    }

    /// Craft the first two entries of a selection.
    pub fn craft_selection<S: AsRef<str>>(
        &mut self,
        universe: &Universe,
        selection: &[S],
    ) -> Result<CraftOutcome, GameError> {
        match selection {
            [a, b, ..] => self.craft(universe, a.as_ref(), b.as_ref()),
            _ => Err(GameError::InsufficientSelection {
                selected: selection.len(),
            }),
        }
    }

    /// Buy an element for `price` coins.
    ///
    /// The element joins the inventory only if it is not already held. An
    /// undiscovered element is unlocked and grants [`PURCHASE_BONUS`].
    pub fn purchase(&mut self, name: &str, price: u64) -> Result<PurchaseReceipt, GameError> {
        if self.coins < price {
            return Err(GameError::InsufficientFunds {
                needed: price,
                available: self.coins,
            });
        }

        self.coins -= price;
        let added_to_inventory = !self.inventory.iter().any(|held| held == name);
        if added_to_inventory {
            self.inventory.push(name.to_string());
        }
        let discovered = self.discovered.insert(name.to_string());
        let bonus = if discovered { PURCHASE_BONUS } else { 0 };
        self.coins = self.coins.saturating_add(bonus);
        info!(element = name, price, bonus, coins = self.coins, "purchase");

        Ok(PurchaseReceipt {
            name: name.to_string(),
            price,
            added_to_inventory,
            discovered,
            bonus,
        })
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Coin balance.
    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Held elements in acquisition order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Discovered element names in sorted order.
    pub fn discovered(&self) -> impl Iterator<Item = &str> {
        self.discovered.iter().map(String::as_str)
    }

    /// Number of discovered elements.
    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    /// Whether an element has been discovered.
    pub fn is_discovered(&self, name: &str) -> bool {
        self.discovered.contains(name)
    }

    /// Held elements whose name contains `filter`, ignoring case.
    pub fn inventory_matching(&self, filter: &str) -> Vec<&str> {
        let needle = filter.to_lowercase();
        self.inventory
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Discovery progress against a universe.
    pub fn progress(&self, universe: &Universe) -> Progress {
        let total = universe.elements().len();
        let discovered = self.discovered.len();
        let percent = if total == 0 {
            0
        } else {
            (discovered as f64 / total as f64 * 100.0).round() as u32
        };
        Progress {
            discovered,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elemcraft_core::UniverseConfig;

    fn universe() -> Universe {
        Universe::generate(&UniverseConfig {
            generated_total: 30,
            recipe_target: 40,
            ..UniverseConfig::default()
        })
    }

    #[test]
    fn initial_state() {
        let state = GameState::new();
        assert_eq!(state.inventory(), ["Fire", "Water", "Earth", "Air"]);
        assert_eq!(state.discovered_count(), 4);
        assert_eq!(state.coins(), 0);
    }

    #[test]
    fn first_craft_discovers_and_rewards() {
        let universe = universe();
        let mut state = GameState::new();

        let outcome = state.craft(&universe, "Fire", "Fire").unwrap();
        assert_eq!(
            outcome,
            CraftOutcome::Discovered {
                name: "Ember".into(),
                reward: DISCOVERY_REWARD
            }
        );
        assert!(state.is_discovered("Ember"));
        assert_eq!(state.coins(), 10);

        let again = state.craft(&universe, "Fire", "Fire").unwrap();
        assert_eq!(again, CraftOutcome::Repeated { name: "Ember".into() });
        assert_eq!(state.coins(), 10);
        assert_eq!(state.inventory().iter().filter(|n| *n == "Ember").count(), 2);
    }

    #[test]
    fn craft_is_order_independent() {
        let universe = universe();
        let mut state = GameState::new();
        assert_eq!(state.craft(&universe, "Water", "Fire").unwrap().name(), "Steam");
        assert_eq!(state.craft(&universe, "Fire", "Water").unwrap().name(), "Steam");
    }

    #[test]
    fn missing_recipe_changes_nothing() {
        let universe = universe();
        let mut state = GameState::new();
        let before = state.clone();

        let err = state.craft(&universe, "Fire", "Nothing").unwrap_err();
        assert!(matches!(err, GameError::NoRecipe { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn short_selection_is_rejected() {
        let universe = universe();
        let mut state = GameState::new();
        let before = state.clone();

        let err = state.craft_selection(&universe, &["Fire"]).unwrap_err();
        assert_eq!(err, GameError::InsufficientSelection { selected: 1 });
        let empty: [&str; 0] = [];
        assert!(state.craft_selection(&universe, &empty).is_err());
        assert_eq!(state, before);

        let outcome = state
            .craft_selection(&universe, &["Air", "Air", "Fire"])
            .unwrap();
        assert_eq!(outcome.name(), "Breeze");
    }

    #[test]
    fn purchase_with_exact_funds() {
        let mut state = GameState::from_snapshot(SavedState {
            discovered: vec![],
            inventory: vec![],
            coins: 45,
            seed: 0,
        });

        let receipt = state.purchase("Mud", 45).unwrap();
        assert!(receipt.discovered);
        assert!(receipt.added_to_inventory);
        assert_eq!(receipt.bonus, PURCHASE_BONUS);
        assert_eq!(state.coins(), 10);

        let receipt = state.purchase("Mud", 10).unwrap();
        assert!(!receipt.discovered);
        assert!(!receipt.added_to_inventory);
        assert_eq!(state.coins(), 0);
        assert_eq!(state.inventory(), ["Mud"]);
    }

    #[test]
    fn purchase_without_funds_changes_nothing() {
        let mut state = GameState::new();
        let before = state.clone();
        let err = state.purchase("Mud", 30).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                needed: 30,
                available: 0
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn reset_restores_initial_state() {
        let universe = universe();
        let mut state = GameState::new();
        state.craft(&universe, "Earth", "Water").unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn snapshot_round_trip_keeps_base_discovered() {
        let saved = SavedState {
            discovered: vec!["Steam".into()],
            inventory: vec!["Steam".into(), "Fire".into()],
            coins: 20,
            seed: 7,
        };
        let state = GameState::from_snapshot(saved);
        assert!(state.is_discovered("Fire"));
        assert!(state.is_discovered("Steam"));

        let snapshot = state.snapshot(7);
        assert_eq!(snapshot.inventory, ["Steam", "Fire"]);
        assert_eq!(snapshot.coins, 20);
        assert_eq!(snapshot.discovered.len(), 5);
    }

    #[test]
    fn saved_state_json_shape() {
        let json = serde_json::to_value(GameState::new().snapshot(424242)).unwrap();
        assert_eq!(json["coins"], 0);
        assert_eq!(json["seed"], 424242);
        assert_eq!(json["inventory"][0], "Fire");
        assert_eq!(json["discovered"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn inventory_filter_ignores_case() {
        let state = GameState::new();
        assert_eq!(state.inventory_matching("AR"), ["Earth"]);
        assert_eq!(state.inventory_matching("").len(), 4);
    }

    #[test]
    fn progress_rounds_percentage() {
        let universe = universe();
        let state = GameState::new();
        let progress = state.progress(&universe);
        assert_eq!(progress.discovered, 4);
        assert_eq!(progress.total, universe.elements().len());
        let expected = (400.0 / progress.total as f64).round() as u32;
        assert_eq!(progress.percent, expected);
    }

    #[test]
    fn coin_balance_saturates() {
        let universe = universe();
        let mut state = GameState::from_snapshot(SavedState {
            discovered: vec![],
            inventory: vec![],
            coins: u64::MAX,
            seed: universe.seed(),
        });

        let outcome = state.craft(&universe, "Fire", "Fire").unwrap();
        assert!(matches!(outcome, CraftOutcome::Discovered { .. }));
        assert_eq!(state.coins(), u64::MAX);

        let receipt = state.purchase("Steam", 0).unwrap();
        assert_eq!(receipt.bonus, PURCHASE_BONUS);
        assert_eq!(state.coins(), u64::MAX);
    }

    #[test]
    fn null_fields_load_as_empty() {
        let saved: SavedState = serde_json::from_str(
            r#"{"discovered":null,"inventory":null,"coins":null,"seed":424242}"#,
        )
        .unwrap();
        assert_eq!(saved.coins, 0);
        assert!(saved.inventory.is_empty());
        assert_eq!(GameState::from_snapshot(saved).discovered_count(), 4);

        let sparse: SavedState = serde_json::from_str(r#"{"seed":7}"#).unwrap();
        assert_eq!(sparse.seed, 7);
        assert!(sparse.discovered.is_empty());
    }
}
