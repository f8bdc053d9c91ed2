//! Sort direction and key-based comparison helpers.

use std::cmp::Ordering;

use crate::value::Value;

/// Direction for a key-based sort. Defaults to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl Dir {
    /// Orients a raw key comparison: `Desc` reverses it, `Asc` leaves it as is.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Lowercase name, as it would appear in a query string.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two records by a [`Value`]-producing key function.
///
/// Incomparable keys (cross-type pairs, NaN) are treated as equal, so a sort
/// using this comparison never panics and leaves such records in their
/// relative order.
pub fn compare_by_key<T, K>(a: &T, b: &T, key: &K, dir: Dir) -> Ordering
where
    K: Fn(&T) -> Value,
{
    match key(a).compare(&key(b)) {
        Some(ordering) => dir.apply(ordering),
        None => Ordering::Equal,
    }
}
