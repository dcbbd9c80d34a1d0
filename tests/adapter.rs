//! Sequence adapter equivalence with base cursors

mod common;

use std::collections::VecDeque;

use common::*;
use planetarium::cursor::{collect_items, odd_moons};
use planetarium::{Container, Cursor, Planet, PlanetKind, SequenceAdapter};

#[test]
fn test_adapter_matches_base_cursor() {
    let a = Planet::gas_giant("a", 1);
    let b = Planet::terrestrial("b", 2);
    let c = Planet::ocean_world("c", 0);
    let store = dynamic_of(&[a.clone(), b.clone(), c.clone()]);

    let via_cursor = collect_items(&mut store.cursor());
    let via_adapter = collect_items(&mut SequenceAdapter::new(store.as_slice()));

    assert_eq!(via_cursor, via_adapter);
    assert_eq!(via_adapter, [&a, &b, &c]);
}

#[test]
fn test_adapter_yields_borrows_not_copies() {
    let store = dynamic_of(&planets_with_moons(&[5, 6]));
    let mut adapter = SequenceAdapter::new(&store);
    adapter.first();
    let current = adapter.current().expect("non-empty sequence");
    assert!(std::ptr::eq(current, &store.as_slice()[0]));
}

#[test]
fn test_adapter_lifecycle() {
    let planets = planets_with_moons(&[1, 2]);
    let mut adapter = SequenceAdapter::new(&planets);
    assert!(adapter.is_done());

    adapter.first();
    adapter.first();
    assert_eq!(adapter.current().map(Planet::name), Some("P0"));
    adapter.next();
    adapter.next();
    assert!(adapter.is_done());
    adapter.next();
    assert!(adapter.current().is_none());

    adapter.first();
    assert_eq!(adapter.current().map(Planet::name), Some("P0"));
}

#[test]
fn test_adapter_under_decorator() {
    let queue: VecDeque<Planet> = mixed_planets(&[1, 2, 3, 4]).into_iter().collect();
    let mut cursor = odd_moons(SequenceAdapter::new(&queue));
    let odd = collect_items(&mut cursor);
    assert_eq!(names(odd.iter().copied()), ["M0", "M2"]);
    assert_eq!(odd[1].kind(), PlanetKind::Ocean);
}
