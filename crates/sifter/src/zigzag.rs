//! Round-robin merge cursor over multiple sequences.

use std::collections::VecDeque;

use crate::cursor::Cursor;
use crate::error::{Result, SifterError};

/// Interleaves several inner sequences in round-robin order.
///
/// The cursor owns a copy of the sequences plus a FIFO queue holding one
/// `(row, col)` position per non-empty row that still has values. Each `next`
/// dequeues the oldest position, yields its value, and re-enqueues the
/// advanced position at the back while its row has elements left. Empty rows
/// never enter the rotation; the cursor is terminal once the queue empties.
///
/// # Example
///
/// ```
/// use sifter::{Cursor, ZigzagCursor};
///
/// let cursor = ZigzagCursor::new(vec![vec![1, 8, 2], vec![], vec![2, 3], vec![1, 8, 9, 9]]);
/// assert_eq!(cursor.drain().collect::<Vec<_>>(), vec![1, 2, 1, 8, 3, 8, 2, 9, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct ZigzagCursor<T> {
    rows: Vec<Vec<T>>,
    queue: VecDeque<(usize, usize)>,
}

impl<T: Clone> ZigzagCursor<T> {
    /// Creates a cursor over the given sequences.
    ///
    /// Rotation order is the order of the non-empty rows.
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        let queue = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.is_empty())
            .map(|(i, _)| (i, 0))
            .collect();
        ZigzagCursor { rows, queue }
    }
}

impl<T: Clone> Cursor for ZigzagCursor<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        !self.queue.is_empty()
    }

    fn next(&mut self) -> Result<T> {
        let (row, col) = self.queue.pop_front().ok_or(SifterError::Exhausted)?;
        let value = self.rows[row][col].clone();
        if col + 1 < self.rows[row].len() {
            self.queue.push_back((row, col + 1));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_robin_order_skipping_empty_rows() {
        let cursor = ZigzagCursor::new(vec![vec![1, 8, 2], vec![], vec![2, 3], vec![1, 8, 9, 9]]);
        let values: Vec<i64> = cursor.drain().collect();
        assert_eq!(values, vec![1, 2, 1, 8, 3, 8, 2, 9, 9]);
    }

    #[test]
    fn single_row_yields_in_order() {
        let cursor = ZigzagCursor::new(vec![vec![4, 5, 6]]);
        assert_eq!(cursor.drain().collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn all_rows_empty_is_terminal() {
        let mut cursor: ZigzagCursor<i64> = ZigzagCursor::new(vec![vec![], vec![]]);
        assert!(!cursor.has_next());
        assert!(matches!(cursor.next(), Err(SifterError::Exhausted)));
    }

    #[test]
    fn no_rows_is_terminal() {
        let cursor: ZigzagCursor<i64> = ZigzagCursor::new(Vec::new());
        assert!(!cursor.has_next());
    }

    #[test]
    fn uneven_rows_drop_out_of_rotation() {
        let cursor = ZigzagCursor::new(vec![vec![1], vec![10, 20, 30]]);
        assert_eq!(cursor.drain().collect::<Vec<_>>(), vec![1, 10, 20, 30]);
    }

    #[test]
    fn next_after_exhaustion_reports_error() {
        let mut cursor = ZigzagCursor::new(vec![vec![1]]);
        assert_eq!(cursor.next().unwrap(), 1);
        assert!(matches!(cursor.next(), Err(SifterError::Exhausted)));
    }

    #[test]
    fn works_with_clone_only_items() {
        let cursor = ZigzagCursor::new(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(cursor.drain().collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }
}
