//! Pull-based cursor capabilities.
//!
//! [`Cursor`] is the minimal iteration capability: peek with `has_next`,
//! consume with `next`. [`Resettable`] refines it with a rewind operation.
//! Concrete producers are independent types implementing these traits, not a
//! dispatch hierarchy.

use crate::error::Result;

/// A stateful pull cursor over a sequence of values.
pub trait Cursor {
    /// The value type produced by this cursor.
    type Item;

    /// Returns `true` if `next` would produce a value.
    ///
    /// A pure peek: calling it any number of times does not consume anything.
    fn has_next(&self) -> bool;

    /// Consumes and returns the next value.
    ///
    /// Calling `next` when `has_next` is false is a contract violation and
    /// reports [`SifterError::Exhausted`](crate::SifterError::Exhausted)
    /// rather than producing an unspecified value.
    fn next(&mut self) -> Result<Self::Item>;

    /// Bridges this cursor to a standard [`Iterator`] that pulls values
    /// until `has_next` is false.
    ///
    /// # Example
    ///
    /// ```
    /// use sifter::{Cursor, RangeCursor};
    ///
    /// let values: Vec<i64> = RangeCursor::new(0, 3, 1).drain().collect();
    /// assert_eq!(values, vec![0, 1, 2]);
    /// ```
    fn drain(self) -> CursorDrain<Self>
    where
        Self: Sized,
    {
        CursorDrain { cursor: self }
    }
}

/// A cursor that can rewind to its initial position.
pub trait Resettable: Cursor {
    /// Rewinds the cursor so iteration restarts from the beginning.
    fn reset(&mut self);
}

/// Adapter exposing a [`Cursor`] as a standard [`Iterator`].
///
/// Stops at the first point where `has_next` is false, so the underlying
/// `next` is never called in violation of the cursor contract. For cursors
/// with no terminal state, combine with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct CursorDrain<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for CursorDrain<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cursor.has_next() {
            self.cursor.next().ok()
        } else {
            None
        }
    }
}
