//! Basic walkthrough: fill both stores, then traverse them through cursors,
//! decorators and the adapter.

use planetarium::cursor::{collect_items, even_moons, only_kind};
use planetarium::{
    Container, Cursor, DynamicContainer, FixedContainer, Planet, PlanetFactory, PlanetKind,
    SequenceAdapter,
};

fn main() -> anyhow::Result<()> {
    let mut factory = PlanetFactory::seeded(2024);
    let mut fixed: FixedContainer<Planet> = FixedContainer::new();
    let mut dynamic = DynamicContainer::new();

    for _ in 0..3 {
        fixed.add(factory.create_random())?;
        dynamic.add(factory.create_random())?;
    }
    dynamic.add(Planet::gas_giant("Jupiter", 79))?;
    dynamic.add(Planet::gas_giant("Saturn", 146))?;

    println!("Fixed store:");
    let mut cursor = fixed.cursor();
    cursor.first();
    while let Some(planet) = cursor.current() {
        println!("  {planet}");
        cursor.next();
    }

    println!("Dynamic store, gas giants with an even moon count:");
    let mut filtered = even_moons(only_kind(dynamic.cursor(), PlanetKind::Gas));
    for planet in collect_items(&mut filtered) {
        println!("  {planet}");
    }

    println!("Dynamic store through the sequence adapter:");
    for planet in SequenceAdapter::new(dynamic.as_slice()).items() {
        println!("  {}", planet.describe().replace('\n', ", "));
    }

    Ok(())
}
