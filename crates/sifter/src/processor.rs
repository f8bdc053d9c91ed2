//! Record sequence owner supporting filter, sort, and page operations.

use std::cmp::Ordering;

use crate::error::{Result, SifterError};
use crate::ordering::{compare_by_key, Dir};
use crate::predicate::Predicate;
use crate::value::Value;

/// Owns a mutable record sequence and applies filter/sort/page operations.
///
/// `filter_records` and the sort methods mutate the owned sequence in place
/// and return `&mut Self` for fluent chaining; `get_page` is a read-only
/// query that does not touch processor state.
///
/// A processor owns its state exclusively; sharing one instance across
/// threads without external synchronization is the caller's responsibility.
///
/// # Example
///
/// ```
/// use sifter::{Predicate, RecordProcessor};
///
/// let mut processor = RecordProcessor::new(vec![4i64, 1, 3, 2, 5]);
/// let odd = Predicate::new(|n: &i64| n % 2 == 1);
///
/// processor.filter_records(&odd).sort(|a, b| a.cmp(b));
/// assert_eq!(processor.records(), &[1, 3, 5]);
/// assert_eq!(processor.get_page(2, 1), &[3, 5]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordProcessor<T> {
    records: Vec<T>,
}

impl<T> RecordProcessor<T> {
    /// Creates a processor owning the given records.
    pub fn new(records: Vec<T>) -> Self {
        RecordProcessor { records }
    }

    /// Creates a processor owning a copy of the given records.
    pub fn from_slice(records: &[T]) -> Self
    where
        T: Clone,
    {
        RecordProcessor {
            records: records.to_vec(),
        }
    }

    /// Keeps only the records matching the predicate, preserving their
    /// relative order. Evaluates the predicate once per record.
    pub fn filter_records(&mut self, predicate: &Predicate<T>) -> &mut Self
    where
        T: 'static,
    {
        self.records.retain(|record| predicate.test(record));
        self
    }

    /// Sorts the owned records in place with the given comparator.
    ///
    /// The sort is stable: records comparing equal keep their pre-sort
    /// relative order.
    pub fn sort<F>(&mut self, mut comparator: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.records.sort_by(|a, b| comparator(a, b));
        self
    }

    /// Sorts the owned records by a [`Value`]-producing key in the given
    /// direction. Incomparable keys are treated as equal, so such records
    /// keep their relative order.
    pub fn sort_by_key<K>(&mut self, key: K, dir: Dir) -> &mut Self
    where
        K: Fn(&T) -> Value,
    {
        self.records
            .sort_by(|a, b| compare_by_key(a, b, &key, dir));
        self
    }

    /// Returns up to `page_size` records starting at `offset`.
    ///
    /// The page is positional: it equals `records[offset..offset + page_size]`
    /// clamped to the sequence length, so a page near the end may be shorter
    /// than `page_size` and a page past the end is empty.
    pub fn get_page(&self, page_size: usize, offset: usize) -> &[T] {
        let len = self.records.len();
        let start = offset.min(len);
        let end = offset.saturating_add(page_size).min(len);
        &self.records[start..end]
    }

    /// Like [`get_page`](Self::get_page), but returns an owned copy.
    pub fn page_cloned(&self, page_size: usize, offset: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.get_page(page_size, offset).to_vec()
    }

    /// Returns the record at `index`, or a distinguished out-of-range error.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.records.get(index).ok_or(SifterError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Returns the number of owned records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records remain.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the current record sequence.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consumes the processor and returns the owned records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}
