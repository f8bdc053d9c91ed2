//! Composable boolean predicates over records.
//!
//! A [`Predicate`] wraps a test closure behind shared ownership, so composite
//! predicates built with [`Predicate::and`] and [`Predicate::or`] own their
//! children and can outlive the call site that combined them. Composites are
//! themselves predicates and nest arbitrarily.

use std::sync::Arc;

use regex::Regex;

use crate::error::Result;

/// A boolean test over one record.
///
/// Predicates are immutable once constructed and cheap to clone (clones share
/// the wrapped closure). Evaluating a predicate has no side effects on the
/// record.
///
/// # Example
///
/// ```
/// use sifter::Predicate;
///
/// let even = Predicate::new(|n: &i64| n % 2 == 0);
/// let small = Predicate::new(|n: &i64| *n < 10);
///
/// let even_and_small = even.and(&small);
/// assert!(even_and_small.test(&4));
/// assert!(!even_and_small.test(&12));
/// ```
pub struct Predicate<T> {
    test: Arc<dyn Fn(&T) -> bool>,
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> std::fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: 'static> Predicate<T> {
    /// Wraps a test closure in a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Predicate {
            test: Arc::new(test),
        }
    }

    /// A predicate that matches every record.
    pub fn always() -> Self {
        Predicate::new(|_| true)
    }

    /// Builds a predicate matching a string field against a regex pattern.
    ///
    /// The selector extracts the field to match. Returns an error if the
    /// pattern is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use sifter::Predicate;
    ///
    /// let user_id = Predicate::regex(|s: &String| s.as_str(), r"^u\d+$").unwrap();
    /// assert!(user_id.test(&"u3".to_string()));
    /// assert!(!user_id.test(&"admin".to_string()));
    /// ```
    pub fn regex<F>(selector: F, pattern: &str) -> Result<Self>
    where
        F: Fn(&T) -> &str + 'static,
    {
        let regex = Regex::new(pattern)?;
        Ok(Predicate::new(move |record: &T| {
            regex.is_match(selector(record))
        }))
    }

    /// Applies the wrapped test to a record.
    pub fn test(&self, record: &T) -> bool {
        (self.test)(record)
    }

    /// Builds a predicate matching when both children match.
    ///
    /// Short-circuits: `other` is not evaluated when `self` is false.
    /// The new predicate owns clones of both children.
    pub fn and(&self, other: &Predicate<T>) -> Predicate<T> {
        let a = self.clone();
        let b = other.clone();
        Predicate::new(move |record: &T| a.test(record) && b.test(record))
    }

    /// Builds a predicate matching when either child matches.
    ///
    /// Short-circuits: `other` is not evaluated when `self` is true.
    /// The new predicate owns clones of both children.
    pub fn or(&self, other: &Predicate<T>) -> Predicate<T> {
        let a = self.clone();
        let b = other.clone();
        Predicate::new(move |record: &T| a.test(record) || b.test(record))
    }

    /// Builds a predicate matching when this one does not.
    pub fn negate(&self) -> Predicate<T> {
        let inner = self.clone();
        Predicate::new(move |record: &T| !inner.test(record))
    }
}
