//! Growable store backed by a vector

use std::slice;

use tracing::debug;

use super::{Container, ContainerError};
use crate::cursor::Cursor;

/// Store that accepts every add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicContainer<T> {
    items: Vec<T>,
}

impl<T> DynamicContainer<T> {
    /// Empty container.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Empty container with room for `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Native sequence view, suitable for [`crate::cursor::SequenceAdapter`].
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Native iterator over the items.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for DynamicContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicContainer<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Container for DynamicContainer<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.items.get(index).ok_or(ContainerError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    fn add(&mut self, item: T) -> Result<(), ContainerError> {
        self.items.push(item);
        debug!(len = self.items.len(), "item added to dynamic container");
        Ok(())
    }

    fn clear(&mut self) {
        let released = self.items.len();
        self.items.clear();
        debug!(released, "dynamic container cleared");
    }

    fn cursor<'a>(&'a self) -> Box<dyn Cursor<Item = &'a T> + 'a> {
        Box::new(DynamicCursor::new(self))
    }
}

/// Cursor over a [`DynamicContainer`], positioned by a native slice iterator.
///
/// The remaining slice of the iterator is the position marker: its head is
/// the current item and an empty remainder means DONE.
#[derive(Debug)]
pub struct DynamicCursor<'a, T> {
    container: &'a DynamicContainer<T>,
    position: slice::Iter<'a, T>,
}

impl<'a, T> DynamicCursor<'a, T> {
    /// Cursor over `container`, DONE until `first`.
    pub fn new(container: &'a DynamicContainer<T>) -> Self {
        Self {
            container,
            position: Default::default(),
        }
    }
}

impl<'a, T> Cursor for DynamicCursor<'a, T> {
    type Item = &'a T;

    fn first(&mut self) {
        self.position = self.container.iter();
    }

    fn next(&mut self) {
        // exhausted slice iterators stay exhausted
        self.position.next();
    }

    fn is_done(&self) -> bool {
        self.position.as_slice().is_empty()
    }

    fn current(&self) -> Option<&'a T> {
        self.position.as_slice().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_always_succeeds() {
        let mut container = DynamicContainer::with_capacity(1);
        for i in 0..25usize {
            assert!(container.add(i).is_ok());
        }
        assert_eq!(container.len(), 25);
        assert_eq!(container.as_slice().last(), Some(&24));
    }

    #[test]
    fn test_cursor_walks_and_stops() {
        let container: DynamicContainer<char> = "xyz".chars().collect();
        let mut cursor = DynamicCursor::new(&container);
        assert!(cursor.is_done());

        cursor.first();
        cursor.first();
        assert_eq!(cursor.current(), Some(&'x'));
        cursor.next();
        cursor.next();
        assert_eq!(cursor.current(), Some(&'z'));
        cursor.next();
        assert!(cursor.is_done());
        cursor.next();
        assert_eq!(cursor.current(), None);
    }
}
