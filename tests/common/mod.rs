//! Shared builders for integration tests

#![allow(dead_code)]

use planetarium::{Container, DynamicContainer, FixedContainer, Planet, PlanetKind};

/// Terrestrial planets named `P<index>` carrying the given moon counts.
pub fn planets_with_moons(moons: &[u32]) -> Vec<Planet> {
    moons
        .iter()
        .enumerate()
        .map(|(idx, &m)| Planet::terrestrial(format!("P{idx}"), m))
        .collect()
}

/// One planet of each concrete kind per entry of `moons`, cycling
/// gas -> terrestrial -> ocean.
pub fn mixed_planets(moons: &[u32]) -> Vec<Planet> {
    let kinds = [PlanetKind::Gas, PlanetKind::Terrestrial, PlanetKind::Ocean];
    moons
        .iter()
        .enumerate()
        .map(|(idx, &m)| Planet::new(format!("M{idx}"), m, kinds[idx % kinds.len()]))
        .collect()
}

pub fn fixed_of(planets: &[Planet]) -> FixedContainer<Planet> {
    let mut container = FixedContainer::new();
    for planet in planets {
        container.add(planet.clone()).expect("within capacity");
    }
    container
}

pub fn dynamic_of(planets: &[Planet]) -> DynamicContainer<Planet> {
    planets.iter().cloned().collect()
}

pub fn names<'a>(planets: impl IntoIterator<Item = &'a Planet>) -> Vec<&'a str> {
    planets.into_iter().map(Planet::name).collect()
}

pub fn moon_counts<'a>(planets: impl IntoIterator<Item = &'a Planet>) -> Vec<u32> {
    planets.into_iter().map(Planet::moons).collect()
}
