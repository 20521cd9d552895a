#![warn(missing_docs)]
//! Deterministic universe generation for elemcraft.
//!
//! Everything here is a pure function of a 32-bit seed: the element set, the
//! emoji assigned to each name and the pair-to-result recipe table.

mod backdrop;
mod element;
mod emoji;
mod names;
mod recipe;
mod rng;
mod universe;

pub use backdrop::{Backdrop, Circle};
pub use element::{Category, Element, ElementRegistry};
pub use emoji::{emoji_for, name_hash, EMOJI_POOL, NAME_HASH_FACTOR};
pub use names::{
    synthesize_name, synthesize_product_name, PREFIXES, PRODUCT_HEADS, PRODUCT_TAILS, ROOTS,
    SUFFIXES,
};
pub use recipe::{PairKey, RecipeBook, PAIR_SEPARATOR};
pub use rng::Mulberry32;
pub use universe::{BuildStats, Universe, UniverseConfig, SEED_RECIPES};

/// Seed of the reference universe.
pub const DEFAULT_SEED: u32 = 424_242;

/// The four starting elements, in starting-inventory order.
pub const BASE_ELEMENTS: [&str; 4] = ["Fire", "Water", "Earth", "Air"];

/// Whether `name` is one of the four base elements.
pub fn is_base(name: &str) -> bool {
    BASE_ELEMENTS.contains(&name)
}
