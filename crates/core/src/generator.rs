//! Shape generator - seeded random shape sequence with usage statistics
//!
//! Every draw is an independent, uniform pick over the seven shape types.
//! There is no bag and no repeat protection. The RNG is a small LCG so that
//! the same seed always reproduces the same game.

use serde::{Serialize, Serializer};

use crate::types::ShapeType;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking a modulus, since the
    /// low bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// How many times each shape type has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStatistics {
    counts: [u32; ShapeType::COUNT],
}

impl ShapeStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one shape type
    pub fn get(&self, kind: ShapeType) -> u32 {
        self.counts[kind.index()]
    }

    /// Total shapes generated
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(type, count)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeType, u32)> + '_ {
        ShapeType::ALL.iter().map(move |&k| (k, self.counts[k.index()]))
    }

    fn record(&mut self, kind: ShapeType) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(1);
    }
}

impl Serialize for ShapeStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(kind, count)| (kind.as_str(), count)))
    }
}

/// Produces the shape sequence for one game.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    rng: SimpleRng,
    statistics: ShapeStatistics,
}

impl ShapeGenerator {
    /// Create a generator with the given seed and empty statistics
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            statistics: ShapeStatistics::new(),
        }
    }

    /// Draw the next shape type and count it
    pub fn next(&mut self) -> ShapeType {
        let idx = self.rng.next_range(ShapeType::COUNT as u32) as usize;
        let kind = ShapeType::ALL[idx];
        self.statistics.record(kind);
        kind
    }

    /// Snapshot of the per-type counts
    pub fn statistics(&self) -> ShapeStatistics {
        self.statistics
    }

    /// Current RNG state (seeds the next game so sequences do not repeat)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
