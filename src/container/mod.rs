//! Owning item stores that hand out base cursors
//!
//! Two interchangeable stores share the [`Container`] contract:
//! - [`FixedContainer`]: preallocated slots, rejects adds past capacity
//! - [`DynamicContainer`]: growable, always accepts
//!
//! Both own their items (moved in on `add`, dropped on `clear`) and preserve
//! insertion order. Cursors borrow the container, so it cannot be modified
//! while a traversal is live.

mod dynamic;
mod fixed;

pub use dynamic::{DynamicContainer, DynamicCursor};
pub use fixed::{FixedContainer, FixedCursor, DEFAULT_CAPACITY};

use thiserror::Error;

use crate::cursor::Cursor;

/// Errors reported by container operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Fixed container is full; the offered item was dropped.
    #[error("container full at capacity {capacity}, item dropped")]
    CapacityExceeded {
        /// Maximum number of items the container holds.
        capacity: usize,
    },

    /// Positional access outside `0..len`.
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Length of the container at the time of access.
        len: usize,
    },
}

/// Ordered, owning item store.
pub trait Container {
    /// Stored item type.
    type Item;

    /// Number of items held.
    fn len(&self) -> usize;

    /// True when no items are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`, in insertion order.
    fn get(&self, index: usize) -> Result<&Self::Item, ContainerError>;

    /// Take ownership of `item` and append it.
    fn add(&mut self, item: Self::Item) -> Result<(), ContainerError>;

    /// Drop every held item and reset to empty.
    fn clear(&mut self);

    /// New base cursor over the items, DONE until `first` is called.
    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a Self::Item> + 'a>;
}
