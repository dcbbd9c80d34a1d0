//! # Planetarium: cursor traversal over planet catalogues
//!
//! A uniform external-iteration protocol ([`Cursor`]) shared by
//! heterogeneous containers, composable filtering decorators, and an adapter
//! that drives any native sequence through the same protocol.
//!
//! ## Layering
//!
//! 1. **Containers** own planets and hand out base cursors
//! 2. **Decorators** wrap a cursor and skip items a filter rejects
//! 3. **Adapters** expose a borrowed native sequence as a cursor
//!
//! Client code only ever drives the outermost cursor.
//!
//! ## Usage Example
//!
//! ```
//! use planetarium::{Container, Cursor, DynamicContainer, Planet, PlanetKind};
//! use planetarium::cursor::{collect_items, EvenMoons, OnlyKind};
//!
//! let mut catalogue = DynamicContainer::new();
//! catalogue.add(Planet::gas_giant("Jupiter", 79)).unwrap();
//! catalogue.add(Planet::gas_giant("Saturn", 146)).unwrap();
//! catalogue.add(Planet::terrestrial("Mars", 2)).unwrap();
//!
//! let mut cursor = catalogue
//!     .cursor()
//!     .filtered(OnlyKind(PlanetKind::Gas))
//!     .filtered(EvenMoons);
//! let names: Vec<&str> = collect_items(&mut cursor).iter().map(|p| p.name()).collect();
//! assert_eq!(names, ["Saturn"]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod container; // Owning stores and their base cursors
pub mod cursor;    // Protocol, decorators, adapter
pub mod planet;    // Item type and random factory

// Re-exports for convenience
pub use container::{Container, ContainerError, DynamicContainer, FixedContainer};
pub use cursor::{Cursor, FilterCursor, SequenceAdapter};
pub use planet::{Celestial, FactoryConfig, FactoryError, Planet, PlanetFactory, PlanetKind};

use thiserror::Error;
use tracing::info;

/// Which store a survey populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// [`FixedContainer`] with the default capacity.
    Fixed,
    /// [`DynamicContainer`].
    Dynamic,
}

/// One decorator layer applied during a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyFilter {
    /// Keep planets with an even moon count.
    EvenMoons,
    /// Keep planets with an odd moon count.
    OddMoons,
    /// Keep planets of one kind.
    Kind(PlanetKind),
}

impl SurveyFilter {
    /// Wrap `inner` in the decorator for this filter.
    pub fn wrap<'a>(
        self,
        inner: Box<dyn Cursor<Item = &'a Planet> + 'a>,
    ) -> Box<dyn Cursor<Item = &'a Planet> + 'a> {
        match self {
            SurveyFilter::EvenMoons => Box::new(cursor::even_moons(inner)),
            SurveyFilter::OddMoons => Box::new(cursor::odd_moons(inner)),
            SurveyFilter::Kind(kind) => Box::new(cursor::only_kind(inner, kind)),
        }
    }
}

/// Configuration for a survey run
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Store to populate.
    pub store: StoreKind,

    /// Number of planets requested from the factory.
    pub count: usize,

    /// Decorators, innermost first.
    pub filters: Vec<SurveyFilter>,

    /// Planet generation parameters.
    pub factory: FactoryConfig,
}

impl SurveyConfig {
    /// Survey of `count` random planets in `store`, no filters.
    pub fn new(store: StoreKind, count: usize) -> Self {
        Self {
            store,
            count,
            filters: Vec::new(),
            factory: FactoryConfig::default(),
        }
    }

    /// Append a decorator layer.
    pub fn with_filter(mut self, filter: SurveyFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Fix the factory seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.factory = self.factory.with_seed(seed);
        self
    }
}

/// Outcome of a survey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyReport {
    /// Planets requested.
    pub requested: usize,

    /// Planets the store accepted.
    pub stored: usize,

    /// Every stored planet, in insertion order.
    pub catalogue: Vec<Planet>,

    /// Planets exposed by the outermost cursor, in traversal order.
    pub matches: Vec<Planet>,
}

impl SurveyReport {
    /// Planets rejected by a saturated store.
    pub fn dropped(&self) -> usize {
        self.requested - self.stored
    }
}

/// Errors that can occur during a survey
#[derive(Error, Debug)]
pub enum SurveyError {
    /// Factory configuration was rejected.
    #[error(transparent)]
    Factory(#[from] FactoryError),
}

/// Populates a store and drives a decorated cursor over it
#[derive(Debug)]
pub struct Survey {
    config: SurveyConfig,
}

impl Survey {
    /// Create a new survey
    pub fn new(config: SurveyConfig) -> Self {
        Self { config }
    }

    /// Populate the configured store, then traverse it through every
    /// configured decorator.
    pub fn run(&self) -> Result<SurveyReport, SurveyError> {
        let mut factory = PlanetFactory::new(self.config.factory.clone())?;
        let report = match self.config.store {
            StoreKind::Fixed => {
                let mut store: FixedContainer<Planet> = FixedContainer::new();
                self.traverse(&mut store, &mut factory)
            }
            StoreKind::Dynamic => {
                let mut store = DynamicContainer::new();
                self.traverse(&mut store, &mut factory)
            }
        };
        info!(
            store = ?self.config.store,
            requested = report.requested,
            stored = report.stored,
            matches = report.matches.len(),
            "survey complete"
        );
        Ok(report)
    }

    fn traverse<C>(&self, store: &mut C, factory: &mut PlanetFactory) -> SurveyReport
    where
        C: Container<Item = Planet>,
    {
        let stored = factory.populate(store, self.config.count);

        let catalogue = cursor::collect_items(&mut store.cursor())
            .into_iter()
            .cloned()
            .collect();

        let mut outer = self
            .config
            .filters
            .iter()
            .fold(store.cursor(), |inner, filter| filter.wrap(inner));
        let matches = cursor::collect_items(&mut outer)
            .into_iter()
            .cloned()
            .collect();

        SurveyReport {
            requested: self.config.count,
            stored,
            catalogue,
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_survey_saturates() {
        let report = Survey::new(SurveyConfig::new(StoreKind::Fixed, 15).with_seed(1))
            .run()
            .unwrap();
        assert_eq!(report.stored, container::DEFAULT_CAPACITY);
        assert_eq!(report.dropped(), 5);
        assert_eq!(report.catalogue, report.matches);
    }

    #[test]
    fn test_filters_narrow_matches() {
        let config = SurveyConfig::new(StoreKind::Dynamic, 40)
            .with_seed(3)
            .with_filter(SurveyFilter::Kind(PlanetKind::Gas))
            .with_filter(SurveyFilter::EvenMoons);
        let report = Survey::new(config).run().unwrap();
        assert_eq!(report.stored, 40);
        assert!(report
            .matches
            .iter()
            .all(|p| p.kind() == PlanetKind::Gas && p.moons() % 2 == 0));
    }
}
