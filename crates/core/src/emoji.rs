//! Name-derived emoji.

/// Ordered emoji pool. Order is part of the reproducibility contract.
pub const EMOJI_POOL: [&str; 36] = [
    "🔥", "💧", "🌍", "💨", "✨", "⚡", "🌿", "🪨", "🌪️", "❄️", "🌙", "☀️", "⚛️", "🌊", "🔮", "🧪",
    "🔧", "⚙️", "💡", "📚", "🎵", "🍎", "🍞", "🍖", "🚀", "🏰", "🏝️", "🏙️", "💎", "🪐", "🤖", "👻",
    "🐉", "🧬", "🪄", "🥚",
];

/// Multiplier used when folding a name into its hash.
pub const NAME_HASH_FACTOR: u32 = 31;

/// Fold a name's UTF-16 code units into a 32-bit hash (`acc * 31 + unit`, wrapping).
pub fn name_hash(name: &str) -> u32 {
    name.encode_utf16().fold(0u32, |acc, unit| {
        acc.wrapping_mul(NAME_HASH_FACTOR)
            .wrapping_add(u32::from(unit))
    })
}

/// Emoji for an element name. Pure: no RNG involvement.
pub fn emoji_for(name: &str) -> &'static str {
    EMOJI_POOL[(name_hash(name) % EMOJI_POOL.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_elements_have_pinned_emoji() {
        assert_eq!(emoji_for("Fire"), EMOJI_POOL[30]);
        assert_eq!(emoji_for("Water"), EMOJI_POOL[11]);
        assert_eq!(emoji_for("Earth"), EMOJI_POOL[2]);
        assert_eq!(emoji_for("Air"), EMOJI_POOL[26]);
        assert_eq!(emoji_for("Steam"), EMOJI_POOL[32]);
    }

    #[test]
    fn empty_name_maps_to_first_entry() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(emoji_for(""), EMOJI_POOL[0]);
    }

    #[test]
    fn hash_folds_utf16_units() {
        // "é" is one UTF-16 unit (0xE9) but two UTF-8 bytes.
        assert_eq!(name_hash("é"), 0xE9);
        // Astral characters contribute their surrogate pair.
        assert_eq!(name_hash("🔥"), 0xD83D * 31 + 0xDD25);
    }

    #[test]
    fn hash_wraps_on_long_names() {
        let long = "Z".repeat(64);
        let expected = long
            .bytes()
            .fold(0u64, |acc, b| (acc * 31 + u64::from(b)) % (1 << 32));
        assert_eq!(u64::from(name_hash(&long)), expected);
    }
}
