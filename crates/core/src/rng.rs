//! Mulberry32 pseudo-random stream.
//!
//! Every generated name, emoji-bearing element and recipe in a universe is a
//! function of this stream, so the algorithm below is frozen: changing a
//! constant or the draw order reshuffles the whole universe for a given seed.
//!
//! All arithmetic wraps on `u32`:
//!
//! ```text
//! state = state + 0x6D2B79F5
//! t = state
//! t = (t ^ (t >> 15)) * (t | 1)
//! t = t ^ (t + (t ^ (t >> 7)) * (t | 61))
//! out = (t ^ (t >> 14)) / 2^32
//! ```

/// Seeded generator producing a reproducible stream of values in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Constant added to the state before each draw.
    pub const INCREMENT: u32 = 0x6D2B_79F5;

    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance the stream and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Draw an index in `0..len` as `floor(next * len)`.
    ///
    /// Always consumes exactly one draw. Returns 0 for `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Pick one entry uniformly. Consumes one draw unless `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.index(items.len());
        items.get(idx)
    }

    /// Draw a value in `[min, min + span)`.
    pub fn span(&mut self, min: f64, span: f64) -> f64 {
        min + self.next_f64() * span
    }
}
