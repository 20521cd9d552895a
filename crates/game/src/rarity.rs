//! Name-length rarity tiers.
//!
//! Rarity is a pure function of the name, deliberately independent of the
//! element's category.

use elemcraft_core::is_base;
use serde::Serialize;
use std::fmt;

/// Names shorter than this (in UTF-16 units) are Uncommon.
pub const UNCOMMON_MAX_LEN: usize = 14;

/// Names shorter than this (in UTF-16 units) are Rare; longer are Legendary.
pub const RARE_MAX_LEN: usize = 24;

/// Display and pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rarity {
    /// Base elements.
    Common,
    /// Short names.
    Uncommon,
    /// Medium names.
    Rare,
    /// Long names.
    Legendary,
}

impl Rarity {
    /// Relative drop weight.
    pub fn weight(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 0.6,
            Rarity::Rare => 0.25,
            Rarity::Legendary => 0.05,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Name length as counted for rarity and pricing (UTF-16 units).
pub fn name_len(name: &str) -> usize {
    name.encode_utf16().count()
}

/// Rarity tier of an element name.
pub fn rarity_of(name: &str) -> Rarity {
    if is_base(name) {
        return Rarity::Common;
    }
    match name_len(name) {
        len if len < UNCOMMON_MAX_LEN => Rarity::Uncommon,
        len if len < RARE_MAX_LEN => Rarity::Rare,
        _ => Rarity::Legendary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_names_are_common() {
        for name in ["Fire", "Water", "Earth", "Air"] {
            assert_eq!(rarity_of(name), Rarity::Common);
        }
    }

    #[test]
    fn thresholds() {
        assert_eq!(rarity_of("Steam"), Rarity::Uncommon);
        assert_eq!(rarity_of(&"x".repeat(13)), Rarity::Uncommon);
        assert_eq!(rarity_of(&"x".repeat(14)), Rarity::Rare);
        assert_eq!(rarity_of(&"x".repeat(23)), Rarity::Rare);
        assert_eq!(rarity_of(&"x".repeat(24)), Rarity::Legendary);
        assert_eq!(rarity_of("GeoEngine-MkI-1"), Rarity::Rare);
    }

    #[test]
    fn base_name_lookalikes_use_length() {
        assert_eq!(rarity_of("fire"), Rarity::Uncommon);
    }

    #[test]
    fn weights_decrease_with_tier() {
        assert!(Rarity::Common.weight() > Rarity::Uncommon.weight());
        assert!(Rarity::Uncommon.weight() > Rarity::Rare.weight());
        assert!(Rarity::Rare.weight() > Rarity::Legendary.weight());
    }
}
