//! Container contract: ordering, capacity, indexing and clearing

mod common;

use common::*;
use planetarium::container::DEFAULT_CAPACITY;
use planetarium::cursor::collect_items;
use planetarium::{Container, ContainerError, Cursor, DynamicContainer, FixedContainer, Planet};

#[test]
fn test_insertion_order_preserved() {
    let planets = planets_with_moons(&[7, 1, 4]);
    let fixed = fixed_of(&planets);
    let dynamic = dynamic_of(&planets);

    for idx in 0..planets.len() {
        assert_eq!(fixed.get(idx), Ok(&planets[idx]));
        assert_eq!(dynamic.get(idx), Ok(&planets[idx]));
    }
    assert_eq!(fixed.len(), 3);
    assert_eq!(dynamic.len(), 3);
}

#[test]
fn test_fixed_capacity_drop_is_observable() {
    let mut container: FixedContainer<Planet> = FixedContainer::new();
    for planet in planets_with_moons(&[0; DEFAULT_CAPACITY]) {
        container.add(planet).expect("within capacity");
    }

    let overflow = container.add(Planet::gas_giant("Overflow", 3));
    assert_eq!(
        overflow,
        Err(ContainerError::CapacityExceeded {
            capacity: DEFAULT_CAPACITY
        })
    );
    assert_eq!(container.len(), DEFAULT_CAPACITY);
    assert!(names(collect_items(&mut container.cursor())).iter().all(|n| *n != "Overflow"));
}

#[test]
fn test_custom_capacity() {
    let mut container: FixedContainer<Planet, 3> = FixedContainer::new();
    let results: Vec<_> = planets_with_moons(&[1, 2, 3, 4])
        .into_iter()
        .map(|p| container.add(p))
        .collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
    assert!(results[3].is_err());
    assert_eq!(container.capacity(), 3);
}

#[test]
fn test_get_out_of_range() {
    let dynamic = dynamic_of(&planets_with_moons(&[1, 2]));
    assert_eq!(
        dynamic.get(2),
        Err(ContainerError::IndexOutOfRange { index: 2, len: 2 })
    );

    let fixed: FixedContainer<Planet> = FixedContainer::new();
    let err = fixed.get(0).unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range for container of length 0");
}

#[test]
fn test_clear_releases_everything() {
    let planets = planets_with_moons(&[2, 3, 5]);
    let mut fixed = fixed_of(&planets);
    let mut dynamic = dynamic_of(&planets);

    fixed.clear();
    dynamic.clear();

    assert_eq!(fixed.len(), 0);
    assert!(dynamic.is_empty());

    let mut cursor = fixed.cursor();
    cursor.first();
    assert!(cursor.is_done());
    let mut cursor = dynamic.cursor();
    cursor.first();
    assert!(cursor.current().is_none());
}

#[test]
fn test_clear_drops_owned_items() {
    use std::rc::Rc;

    let tracker = Rc::new(());
    let mut fixed: FixedContainer<Rc<()>> = FixedContainer::new();
    let mut dynamic = DynamicContainer::new();
    for _ in 0..3 {
        fixed.add(Rc::clone(&tracker)).unwrap();
        dynamic.add(Rc::clone(&tracker)).unwrap();
    }
    assert_eq!(Rc::strong_count(&tracker), 7);

    fixed.clear();
    assert_eq!(Rc::strong_count(&tracker), 4);
    drop(dynamic);
    assert_eq!(Rc::strong_count(&tracker), 1);
}

#[test]
fn test_rejected_item_is_dropped() {
    use std::rc::Rc;

    let tracker = Rc::new(());
    let mut fixed: FixedContainer<Rc<()>, 1> = FixedContainer::new();
    fixed.add(Rc::clone(&tracker)).unwrap();
    assert!(fixed.add(Rc::clone(&tracker)).is_err());
    assert_eq!(Rc::strong_count(&tracker), 2);
}
