//! Element name synthesis from fixed word pools.
//!
//! Draw order is fixed (prefix, root, suffix for generated names; head, tail
//! for products). Reordering the draws changes every name in the universe.

use crate::rng::Mulberry32;

/// Leading word of a generated element name.
pub static PREFIXES: &[&str] = &[
    "Aqua", "Pyro", "Geo", "Aero", "Luna", "Solar", "Chron", "Cyber", "Bio", "Electro", "Nova",
    "Proto", "Meta", "Neo", "Iron", "Crystal", "Obsidian", "Glass", "Shadow", "Star",
];

/// Middle word of a generated element name.
pub static ROOTS: &[&str] = &[
    "Shard", "Core", "Seed", "Flux", "Engine", "Sprout", "Golem", "Essence", "Vessel", "Matrix",
    "Field", "Node", "Bloom", "Cloud", "Echo", "Forge", "Glass", "Alloy", "Blade", "Crown",
];

/// Trailing tag of a generated element name.
pub static SUFFIXES: &[&str] = &[
    "Prime", "Alpha", "MkI", "X", "Plus", "II", "III", "Lite", "9000", "V", "Omega", "Nova",
    "Essence",
];

/// First word of a crafted product name.
pub static PRODUCT_HEADS: &[&str] = &[
    "Crystal", "Nova", "Core", "Essence", "Beacon", "Alloy", "Matrix", "Bloom",
];

/// Second word of a crafted product name.
pub static PRODUCT_TAILS: &[&str] = &["Gem", "Heart", "Node", "Vessel", "Shard", "Lens", "Field"];

fn draw(rng: &mut Mulberry32, pool: &'static [&'static str]) -> &'static str {
    pool[rng.index(pool.len())]
}

/// Build a generated element name: `{prefix}{root}-{suffix}-{index}`.
///
/// `index` is the 1-based generation index, which keeps names unique even when
/// the three words repeat.
pub fn synthesize_name(rng: &mut Mulberry32, index: usize) -> String {
    let prefix = draw(rng, PREFIXES);
    let root = draw(rng, ROOTS);
    let suffix = draw(rng, SUFFIXES);
    format!("{prefix}{root}-{suffix}-{index}")
}

/// Build a product name for a bulk recipe: `{head} {tail} {counter}`.
pub fn synthesize_product_name(rng: &mut Mulberry32, counter: usize) -> String {
    let head = draw(rng, PRODUCT_HEADS);
    let tail = draw(rng, PRODUCT_TAILS);
    format!("{head} {tail} {counter}")
}
