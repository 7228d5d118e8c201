//! Seeded input generation for demo runs.
//!
//! The surfaces let a user ask for a random array or wall layout instead of
//! typing one. Generation is driven by a deterministic PRNG seeded with a
//! `u64`: given the same seed, the same inputs come back, which keeps
//! generated scenarios shareable and bug reports reproducible.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stepviz_core::{GridConfig, Pos};

/// Wall probability per cell when the caller does not choose one.
pub const DEFAULT_WALL_DENSITY: f64 = 0.2;

/// Generated sort values lie in `10..310`, the range the bar display was
/// scaled for.
const VALUE_RANGE: std::ops::Range<u64> = 10..310;

/// Deterministic generator for demo arrays and wall layouts.
pub struct InputGen {
    rng: ChaCha8Rng,
}

impl InputGen {
    pub fn from_seed(seed: u64) -> Self {
        InputGen {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A sort input of `len` values in `10..310`.
    pub fn values(&mut self, len: usize) -> Vec<u64> {
        (0..len).map(|_| self.rng.gen_range(VALUE_RANGE)).collect()
    }

    /// A wall layout over the grid: each cell independently becomes a wall
    /// with probability `density`, except the start and end cells.
    pub fn walls(&mut self, config: GridConfig, start: Pos, end: Pos, density: f64) -> Vec<Pos> {
        let mut walls = Vec::new();
        for row in 0..config.rows {
            for col in 0..config.cols {
                let pos = Pos::new(row, col);
                if pos == start || pos == end {
                    continue;
                }
                if self.rng.gen::<f64>() < density {
                    walls.push(pos);
                }
            }
        }
        walls
    }
}

/// A seed derived from the wall clock, for callers that did not pass one.
pub fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
