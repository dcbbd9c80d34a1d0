//! External-iteration protocol shared by every traversal object
//!
//! A [`Cursor`] is either POSITIONED on a current item or DONE.
//! Freshly built cursors are DONE until [`Cursor::first`] is called;
//! `first` is the only way back from DONE, `next` the only way into it.
//!
//! Decorators ([`FilterCursor`]) and adapters ([`SequenceAdapter`]) are
//! cursors themselves, so client code drives the outermost one without
//! knowing how deep the wrapping goes.

mod adapter;
mod filter;

pub use adapter::SequenceAdapter;
pub use filter::{
    even_moons, odd_moons, only_kind, EvenMoons, EvenMoonsCursor, FilterCursor, FnFilter,
    ItemFilter, OddMoons, OddMoonsCursor, OnlyKind, OnlyKindCursor,
};

/// Uniform cursor protocol over containers, sequences and decorators.
pub trait Cursor {
    /// Item yielded at each position.
    type Item;

    /// Reset to the first position. An empty sequence leaves the cursor DONE.
    ///
    /// Idempotent: calling it twice in a row is the same as calling it once.
    fn first(&mut self);

    /// Advance by one position.
    ///
    /// Calling this on a DONE cursor is a checked no-op.
    fn next(&mut self);

    /// True iff there is no current item.
    fn is_done(&self) -> bool;

    /// Current item, or `None` when DONE.
    fn current(&self) -> Option<Self::Item>;

    /// Wrap this cursor in a filtering decorator that takes ownership of it.
    fn filtered<F>(self, filter: F) -> FilterCursor<Self, F>
    where
        Self: Sized,
        F: ItemFilter<Self::Item>,
    {
        FilterCursor::new(self, filter)
    }

    /// Turn the cursor into a standard iterator.
    ///
    /// The iterator calls [`Cursor::first`] on its first step, so any earlier
    /// positioning is discarded.
    fn items(self) -> Items<Self>
    where
        Self: Sized,
    {
        Items {
            cursor: self,
            started: false,
        }
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn next(&mut self) {
        (**self).next()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn next(&mut self) {
        (**self).next()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }
}

/// Standard-library iterator over a cursor, created by [`Cursor::items`].
#[derive(Debug)]
pub struct Items<C> {
    cursor: C,
    started: bool,
}

impl<C: Cursor> Iterator for Items<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.cursor.next();
        } else {
            self.cursor.first();
            self.started = true;
        }
        self.cursor.current()
    }
}

/// Reset `cursor` and drain it into a vector, in traversal order.
pub fn collect_items<C: Cursor + ?Sized>(cursor: &mut C) -> Vec<C::Item> {
    let mut items = Vec::new();
    cursor.first();
    while let Some(item) = cursor.current() {
        items.push(item);
        cursor.next();
    }
    items
}
