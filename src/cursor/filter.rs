//! Filtering decorators
//!
//! A [`FilterCursor`] owns exactly one inner cursor and hides every item its
//! [`ItemFilter`] rejects. The skip loop runs after `first` and after each
//! `next`, so the decorator only ever rests on an accepted item or on DONE.
//! Wrapping one decorator in another intersects their filters.

use std::fmt;

use tracing::trace;

use super::Cursor;
use crate::planet::{Celestial, PlanetKind};

/// Predicate deciding whether a decorator exposes an item.
pub trait ItemFilter<T> {
    /// True when `item` should be exposed.
    fn accepts(&self, item: &T) -> bool;
}

/// Accepts items with an even number of moons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenMoons;

impl<T: Celestial> ItemFilter<T> for EvenMoons {
    fn accepts(&self, item: &T) -> bool {
        item.moons() % 2 == 0
    }
}

/// Accepts items with an odd number of moons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OddMoons;

impl<T: Celestial> ItemFilter<T> for OddMoons {
    fn accepts(&self, item: &T) -> bool {
        item.moons() % 2 == 1
    }
}

/// Accepts items tagged with one particular [`PlanetKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnlyKind(pub PlanetKind);

impl<T: Celestial> ItemFilter<T> for OnlyKind {
    fn accepts(&self, item: &T) -> bool {
        item.kind() == self.0
    }
}

/// Ad-hoc filter backed by a closure.
#[derive(Clone, Copy)]
pub struct FnFilter<F>(pub F);

impl<T, F> ItemFilter<T> for FnFilter<F>
where
    F: Fn(&T) -> bool,
{
    fn accepts(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFilter").finish_non_exhaustive()
    }
}

/// Decorator narrowing an inner cursor to the items a filter accepts.
#[derive(Debug)]
pub struct FilterCursor<C, F> {
    inner: C,
    filter: F,
    /// Set by `first`; the inner cursor's own position is ignored until then.
    positioned: bool,
}

/// Decorator exposing only items with an even moon count.
pub type EvenMoonsCursor<C> = FilterCursor<C, EvenMoons>;
/// Decorator exposing only items with an odd moon count.
pub type OddMoonsCursor<C> = FilterCursor<C, OddMoons>;
/// Decorator exposing only items of one kind.
pub type OnlyKindCursor<C> = FilterCursor<C, OnlyKind>;

impl<C, F> FilterCursor<C, F>
where
    C: Cursor,
    F: ItemFilter<C::Item>,
{
    /// Take ownership of `inner`; it is dropped together with the decorator.
    ///
    /// The decorator starts DONE, like any other cursor, until `first`,
    /// even when `inner` is already positioned.
    pub fn new(inner: C, filter: F) -> Self {
        Self {
            inner,
            filter,
            positioned: false,
        }
    }

    /// Filter applied at each positioning step.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Give back the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn skip_rejected(&mut self) {
        let mut skipped = 0usize;
        while let Some(item) = self.inner.current() {
            if self.filter.accepts(&item) {
                break;
            }
            self.inner.next();
            skipped += 1;
        }
        if skipped > 0 {
            trace!(skipped, done = self.inner.is_done(), "filter skipped rejected items");
        }
    }
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: ItemFilter<C::Item>,
{
    type Item = C::Item;

    fn first(&mut self) {
        self.inner.first();
        self.positioned = true;
        self.skip_rejected();
    }

    fn next(&mut self) {
        if self.is_done() {
            return;
        }
        self.inner.next();
        self.skip_rejected();
    }

    fn is_done(&self) -> bool {
        !self.positioned || self.inner.is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        if !self.positioned {
            return None;
        }
        self.inner.current()
    }
}

/// Wrap `inner` so that only items with an even moon count are exposed.
pub fn even_moons<C>(inner: C) -> EvenMoonsCursor<C>
where
    C: Cursor,
    EvenMoons: ItemFilter<C::Item>,
{
    FilterCursor::new(inner, EvenMoons)
}

/// Wrap `inner` so that only items with an odd moon count are exposed.
pub fn odd_moons<C>(inner: C) -> OddMoonsCursor<C>
where
    C: Cursor,
    OddMoons: ItemFilter<C::Item>,
{
    FilterCursor::new(inner, OddMoons)
}

/// Wrap `inner` so that only items of `kind` are exposed.
pub fn only_kind<C>(inner: C, kind: PlanetKind) -> OnlyKindCursor<C>
where
    C: Cursor,
    OnlyKind: ItemFilter<C::Item>,
{
    FilterCursor::new(inner, OnlyKind(kind))
}
