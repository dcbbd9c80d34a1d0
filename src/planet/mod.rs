//! Planets: the item type the cursor framework traverses
//!
//! The traversal core only ever asks an item two questions, captured by
//! [`Celestial`]: how many moons it has, and which [`PlanetKind`] it is.
//! Both are pure queries on data fixed at construction. Domain actions
//! (evolving, colliding) are deliberately absent: no decorator needs them.

mod factory;
mod kind;

pub use factory::{FactoryConfig, FactoryError, PlanetFactory};
pub use kind::PlanetKind;

use std::fmt;

/// Capability set the filtering decorators rely on.
pub trait Celestial {
    /// Number of moons orbiting the body.
    fn moons(&self) -> u32;

    /// Variant tag assigned at construction.
    fn kind(&self) -> PlanetKind;
}

impl<T: Celestial + ?Sized> Celestial for &T {
    fn moons(&self) -> u32 {
        (**self).moons()
    }

    fn kind(&self) -> PlanetKind {
        (**self).kind()
    }
}

impl<T: Celestial + ?Sized> Celestial for Box<T> {
    fn moons(&self) -> u32 {
        (**self).moons()
    }

    fn kind(&self) -> PlanetKind {
        (**self).kind()
    }
}

/// A named planet with a moon count and a kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    name: String,
    moons: u32,
    kind: PlanetKind,
}

impl Planet {
    /// Create a planet of any kind.
    pub fn new(name: impl Into<String>, moons: u32, kind: PlanetKind) -> Self {
        Self {
            name: name.into(),
            moons,
            kind,
        }
    }

    /// Create a gas giant.
    pub fn gas_giant(name: impl Into<String>, moons: u32) -> Self {
        Self::new(name, moons, PlanetKind::Gas)
    }

    /// Create a terrestrial planet.
    pub fn terrestrial(name: impl Into<String>, moons: u32) -> Self {
        Self::new(name, moons, PlanetKind::Terrestrial)
    }

    /// Create an ocean world.
    pub fn ocean_world(name: impl Into<String>, moons: u32) -> Self {
        Self::new(name, moons, PlanetKind::Ocean)
    }

    /// Planet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of moons.
    pub fn moons(&self) -> u32 {
        self.moons
    }

    /// Kind tag.
    pub fn kind(&self) -> PlanetKind {
        self.kind
    }

    /// Multi-line description. Untyped bodies ([`PlanetKind::Other`]) only
    /// report their name.
    pub fn describe(&self) -> String {
        match self.kind {
            PlanetKind::Other => format!("Planet: {}", self.name),
            _ => format!("Planet: {}\nMoons: {}", self.name, self.moons),
        }
    }
}

impl Celestial for Planet {
    fn moons(&self) -> u32 {
        Planet::moons(self)
    }

    fn kind(&self) -> PlanetKind {
        Planet::kind(self)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} moons)", self.name, self.kind, self.moons)
    }
}
