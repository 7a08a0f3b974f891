//! Construction-time settings.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::Error;
use crate::error::Result;
use crate::level::Geometric;

/// Hard ceiling on the number of levels. The sentinel is allocated with this
/// many links, so the highest usable level index is `MAX_LEVELS - 1`.
pub const MAX_LEVELS: usize = 32;

/// Settings for a [`SkipList`](crate::SkipList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of levels the sentinel is allocated with, `1..=MAX_LEVELS`.
    pub max_levels: usize,
    /// Seed for the default level generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_levels: MAX_LEVELS,
            seed: None,
        }
    }
}

impl Config {
    /// A default config with a fixed seed, for reproducible level shapes.
    pub fn seeded(seed: u64) -> Config {
        Config {
            seed: Some(seed),
            ..Config::default()
        }
    }

    /// Builder-style setter for `max_levels`.
    pub fn max_levels(mut self, max_levels: usize) -> Config {
        self.max_levels = max_levels;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_levels == 0 || self.max_levels > MAX_LEVELS {
            return Err(Error::InvalidConfig(format!(
                "max_levels must be in 1..={}, got {}",
                MAX_LEVELS, self.max_levels
            )));
        }
        Ok(())
    }

    /// The geometric generator this config describes.
    pub fn generator(&self) -> Geometric<SmallRng> {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Geometric::new(rng)
    }
}
