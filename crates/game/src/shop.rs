//! Shop listings and prices.

use crate::rarity::{name_len, rarity_of, Rarity};
use crate::state::GameState;
use elemcraft_core::{is_base, Universe};
use serde::Serialize;

/// Number of listings shown at once.
pub const DEFAULT_SHOP_SIZE: usize = 20;

/// Cheapest possible price.
pub const MIN_PRICE: u64 = 30;

/// Price of an element: `max(30, round(10 + 14 / weight + len % 60))`.
pub fn price_for(name: &str) -> u64 {
    let weight = rarity_of(name).weight();
    let raw = 10.0 + (1.0 / weight) * 14.0 + (name_len(name) % 60) as f64;
    MIN_PRICE.max(raw.round() as u64)
}

/// One element offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Element name.
    pub name: String,
    /// Element emoji.
    pub emoji: &'static str,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Price in coins.
    pub price: u64,
    /// Whether the player can pay for it now.
    pub affordable: bool,
}

/// First `limit` undiscovered, non-base elements in universe order.
pub fn listings(universe: &Universe, state: &GameState, limit: usize) -> Vec<Listing> {
    universe
        .elements()
        .iter()
        .filter(|e| !is_base(&e.name) && !state.is_discovered(&e.name))
        .take(limit)
        .map(|e| {
            let price = price_for(&e.name);
            Listing {
                name: e.name.clone(),
                emoji: e.emoji,
                rarity: rarity_of(&e.name),
                price,
                affordable: state.coins() >= price,
            }
        })
        .collect()
}
