//! Bounded arithmetic range cursor.

use crate::cursor::{Cursor, Resettable};
use crate::error::{Result, SifterError};

/// Produces `start, start + step, ...` while the value stays below `end`.
///
/// # Example
///
/// ```
/// use sifter::{Cursor, RangeCursor};
///
/// let cursor = RangeCursor::new(1, 8, 2);
/// assert_eq!(cursor.drain().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct RangeCursor {
    start: i64,
    end: i64,
    step: i64,
    cur: i64,
}

impl RangeCursor {
    /// Creates a cursor over `[start, end)` advancing by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive. A zero or negative step could never
    /// reach `end`, so it is rejected up front (as [`Iterator::step_by`]
    /// rejects zero) rather than left to loop forever.
    pub fn new(start: i64, end: i64, step: i64) -> Self {
        assert!(step > 0, "step must be positive");
        RangeCursor {
            start,
            end,
            step,
            cur: start,
        }
    }
}

impl Cursor for RangeCursor {
    type Item = i64;

    fn has_next(&self) -> bool {
        self.cur < self.end
    }

    fn next(&mut self) -> Result<i64> {
        if !self.has_next() {
            return Err(SifterError::Exhausted);
        }
        let value = self.cur;
        self.cur += self.step;
        Ok(value)
    }
}

impl Resettable for RangeCursor {
    fn reset(&mut self) {
        self.cur = self.start;
    }
}
