//! Level selection for new nodes.
//!
//! A node's level decides how many express lanes it joins. Levels follow a
//! geometric distribution with p = 1/2: half the nodes live only at level 0,
//! a quarter reach level 1, and so on, which keeps the expected height at
//! O(log n).

use rand::RngCore;
use rand::rngs::SmallRng;

/// Source of levels for newly inserted nodes.
///
/// Implementations must return a level in `0..=max_level`. The list rejects
/// anything larger with [`Error::LevelCapacity`](crate::Error::LevelCapacity).
pub trait LevelGenerator {
    fn pick_level(&mut self, max_level: usize) -> usize;
}

/// Geometric level sampler over any random bit source.
#[derive(Debug, Clone)]
pub struct Geometric<R = SmallRng> {
    rng: R,
}

impl<R: RngCore> Geometric<R> {
    pub fn new(rng: R) -> Self {
        Geometric { rng }
    }
}

impl<R: RngCore> LevelGenerator for Geometric<R> {
    fn pick_level(&mut self, max_level: usize) -> usize {
        // Count set bits upward from the least significant one.
        let bits = self.rng.next_u32();
        (bits.trailing_ones() as usize).min(max_level)
    }
}

/// Always picks level 0, degrading the list to a singly linked list.
///
/// Every operation becomes O(n). Useful for exercising the level-0 paths in
/// isolation and as a baseline in benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat;

impl LevelGenerator for Flat {
    fn pick_level(&mut self, _max_level: usize) -> usize {
        0
    }
}
