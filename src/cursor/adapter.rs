//! Adapter exposing a native sequence through the cursor protocol
//!
//! Anything whose shared reference is [`IntoIterator`] (vectors, slices,
//! arrays, `VecDeque`, `BTreeSet`, our own containers) can be driven as a
//! [`Cursor`]. The adapter borrows the sequence; the borrow checker keeps the
//! sequence alive and unmodified for as long as the adapter exists.

use std::fmt;

use super::Cursor;

/// Cursor over the native traversal of a borrowed sequence.
pub struct SequenceAdapter<'a, S: ?Sized>
where
    &'a S: IntoIterator,
{
    sequence: &'a S,
    rest: Option<<&'a S as IntoIterator>::IntoIter>,
    current: Option<<&'a S as IntoIterator>::Item>,
}

impl<'a, S: ?Sized> SequenceAdapter<'a, S>
where
    &'a S: IntoIterator,
{
    /// Borrow `sequence`. The adapter is DONE until `first` is called.
    pub fn new(sequence: &'a S) -> Self {
        Self {
            sequence,
            rest: None,
            current: None,
        }
    }

    /// The borrowed sequence.
    pub fn sequence(&self) -> &'a S {
        self.sequence
    }
}

impl<'a, S: ?Sized> Cursor for SequenceAdapter<'a, S>
where
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: Clone,
{
    type Item = <&'a S as IntoIterator>::Item;

    fn first(&mut self) {
        let mut native = IntoIterator::into_iter(self.sequence);
        self.current = native.next();
        self.rest = Some(native);
    }

    fn next(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.current = self.rest.as_mut().and_then(|native| native.next());
    }

    fn is_done(&self) -> bool {
        self.current.is_none()
    }

    fn current(&self) -> Option<Self::Item> {
        self.current.clone()
    }
}

impl<'a, S> fmt::Debug for SequenceAdapter<'a, S>
where
    S: ?Sized + fmt::Debug,
    &'a S: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceAdapter")
            .field("sequence", &self.sequence)
            .field("done", &self.current.is_none())
            .finish()
    }
}
