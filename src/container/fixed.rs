//! Fixed-capacity store backed by a preallocated slot array

use tracing::{debug, warn};

use super::{Container, ContainerError};
use crate::cursor::Cursor;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// Store with `N` preallocated slots.
///
/// Adds past capacity drop the item and return
/// [`ContainerError::CapacityExceeded`].
#[derive(Debug)]
pub struct FixedContainer<T, const N: usize = DEFAULT_CAPACITY> {
    /// Slots `0..count` are occupied, the rest are `None`.
    slots: [Option<T>; N],
    count: usize,
}

impl<T, const N: usize> FixedContainer<T, N> {
    /// Empty container with all slots free.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            count: 0,
        }
    }

    /// Maximum number of items.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// True when further adds will be rejected.
    pub fn is_full(&self) -> bool {
        self.count >= N
    }
}

impl<T, const N: usize> Default for FixedContainer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Container for FixedContainer<T, N> {
    type Item = T;

    fn len(&self) -> usize {
        self.count
    }

    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        let out_of_range = ContainerError::IndexOutOfRange {
            index,
            len: self.count,
        };
        if index >= self.count {
            return Err(out_of_range);
        }
        self.slots[index].as_ref().ok_or(out_of_range)
    }

    fn add(&mut self, item: T) -> Result<(), ContainerError> {
        if self.is_full() {
            warn!(capacity = N, "fixed container full, dropping item");
            return Err(ContainerError::CapacityExceeded { capacity: N });
        }
        self.slots[self.count] = Some(item);
        self.count += 1;
        debug!(len = self.count, capacity = N, "item added to fixed container");
        Ok(())
    }

    fn clear(&mut self) {
        let released = self.count;
        for slot in &mut self.slots[..self.count] {
            *slot = None;
        }
        self.count = 0;
        debug!(released, "fixed container cleared");
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a T> + 'a> {
        Box::new(FixedCursor::new(self))
    }
}

/// Index-based cursor over a [`FixedContainer`].
#[derive(Debug)]
pub struct FixedCursor<'a, T, const N: usize> {
    container: &'a FixedContainer<T, N>,
    /// `None` until the first `first()` call.
    index: Option<usize>,
}

impl<'a, T, const N: usize> FixedCursor<'a, T, N> {
    /// Cursor over `container`, DONE until `first`.
    pub fn new(container: &'a FixedContainer<T, N>) -> Self {
        Self {
            container,
            index: None,
        }
    }
}

impl<'a, T, const N: usize> Cursor for FixedCursor<'a, T, N> {
    type Item = &'a T;

    fn first(&mut self) {
        self.index = Some(0);
    }

    fn next(&mut self) {
        if !self.is_done() {
            self.index = self.index.map(|i| i + 1);
        }
    }

    fn is_done(&self) -> bool {
        self.index.map_or(true, |i| i >= self.container.len())
    }

    fn current(&self) -> Option<&'a T> {
        self.index.and_then(|i| self.container.get(i).ok())
    }
}
