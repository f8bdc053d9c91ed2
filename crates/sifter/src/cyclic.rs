//! Infinite wrap-around cursor over a resettable source.

use crate::cursor::{Cursor, Resettable};
use crate::error::Result;

/// Cycles over a [`Resettable`] source indefinitely.
///
/// Owns the wrapped source by value, so the cycle can never outlive what it
/// wraps. `has_next` is constantly `true`; when the source runs out, `next`
/// resets it and draws from the start again.
///
/// The wrapped source must produce at least one value per cycle. A source
/// that is still exhausted right after `reset` makes `next` report
/// [`SifterError::Exhausted`](crate::SifterError::Exhausted) instead of
/// looping forever.
///
/// # Example
///
/// ```
/// use sifter::{CyclicCursor, Cursor, RangeCursor};
///
/// let values: Vec<i64> = CyclicCursor::new(RangeCursor::new(1, 8, 2))
///     .drain()
///     .take(6)
///     .collect();
/// assert_eq!(values, vec![1, 3, 5, 7, 1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CyclicCursor<C> {
    inner: C,
}

impl<C: Resettable> CyclicCursor<C> {
    /// Wraps a resettable source, taking ownership of it.
    pub fn new(inner: C) -> Self {
        CyclicCursor { inner }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Resettable> Cursor for CyclicCursor<C> {
    type Item = C::Item;

    /// Always `true`: a cycle has no terminal state.
    fn has_next(&self) -> bool {
        true
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.inner.has_next() {
            self.inner.reset();
        }
        self.inner.next()
    }
}
