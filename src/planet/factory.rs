//! Random planet generation for populating containers

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use super::Planet;
use crate::container::Container;

/// Errors raised while configuring a [`PlanetFactory`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// A range parameter would leave nothing to sample from.
    #[error("invalid factory configuration: {0}")]
    InvalidConfiguration(String),
}

/// Parameters controlling random planet generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Gas giants get `0..max_gas_moons` moons.
    pub max_gas_moons: u32,
    /// Terrestrial planets get `0..max_terrestrial_moons` moons.
    pub max_terrestrial_moons: u32,
    /// Generated names carry a number in `0..name_range`.
    pub name_range: u32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_gas_moons: 100,
            max_terrestrial_moons: 5,
            name_range: 100,
        }
    }
}

impl FactoryConfig {
    /// Fix the seed for deterministic output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the exclusive upper bound on gas giant moons.
    pub fn with_max_gas_moons(mut self, max: u32) -> Self {
        self.max_gas_moons = max;
        self
    }

    /// Set the exclusive upper bound on terrestrial moons.
    pub fn with_max_terrestrial_moons(mut self, max: u32) -> Self {
        self.max_terrestrial_moons = max;
        self
    }

    /// Set the exclusive upper bound on name numbers.
    pub fn with_name_range(mut self, range: u32) -> Self {
        self.name_range = range;
        self
    }

    /// Reject ranges that are empty.
    pub fn validate(&self) -> Result<(), FactoryError> {
        let ranges = [
            ("max_gas_moons", self.max_gas_moons),
            ("max_terrestrial_moons", self.max_terrestrial_moons),
            ("name_range", self.name_range),
        ];
        for (field, value) in ranges {
            if value == 0 {
                return Err(FactoryError::InvalidConfiguration(format!(
                    "{field} must be > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Produces planets of a uniformly chosen kind.
#[derive(Debug)]
pub struct PlanetFactory {
    config: FactoryConfig,
    rng: StdRng,
}

impl PlanetFactory {
    /// Build a factory from a validated configuration.
    pub fn new(config: FactoryConfig) -> Result<Self, FactoryError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Factory with default ranges and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: FactoryConfig::default().with_seed(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Create one planet: a gas giant, a terrestrial planet, or a moonless
    /// ocean world, each with probability 1/3.
    pub fn create_random(&mut self) -> Planet {
        let number = self.rng.gen_range(0..self.config.name_range);
        let planet = match self.rng.gen_range(0..3u8) {
            0 => {
                let moons = self.rng.gen_range(0..self.config.max_gas_moons);
                Planet::gas_giant(format!("Giant {number}"), moons)
            }
            1 => {
                let moons = self.rng.gen_range(0..self.config.max_terrestrial_moons);
                Planet::terrestrial(format!("Terrestrial {number}"), moons)
            }
            _ => Planet::ocean_world(format!("Ocean {number}"), 0),
        };
        debug!(%planet, "created random planet");
        planet
    }

    /// Add up to `count` random planets to `container`.
    ///
    /// Stops at the first rejected add (a saturated fixed container) and
    /// returns how many planets were stored.
    pub fn populate<C>(&mut self, container: &mut C, count: usize) -> usize
    where
        C: Container<Item = Planet> + ?Sized,
    {
        let mut stored = 0;
        for _ in 0..count {
            if let Err(err) = container.add(self.create_random()) {
                debug!(%err, stored, requested = count, "population stopped early");
                break;
            }
            stored += 1;
        }
        stored
    }
}
