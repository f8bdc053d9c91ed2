//! Sifter - composable predicates, record processing, and pull cursors.
//!
//! Sifter is a small toolkit for querying in-memory record collections:
//!
//! - [`Predicate`]: a boolean test over one record, composable with
//!   short-circuiting [`and`](Predicate::and) / [`or`](Predicate::or) into
//!   arbitrarily nested trees. Composites own their children, so a predicate
//!   tree can always outlive the call site that built it.
//! - [`RecordProcessor`]: owns a record sequence and chains in-place
//!   filtering and sorting with positional paging.
//! - [`Cursor`] family: a minimal pull-based iteration capability
//!   (`has_next`/`next`) with a [`Resettable`] refinement and three
//!   producers — a bounded [`RangeCursor`], an infinite [`CyclicCursor`]
//!   wrapping a resettable source, and a round-robin [`ZigzagCursor`] over
//!   multiple sequences.
//!
//! # Quick Start
//!
//! ```rust
//! use sifter::{Predicate, RecordProcessor};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Payment {
//!     payee: String,
//!     amount: i64,
//! }
//!
//! let payments = vec![
//!     Payment { payee: "u2".into(), amount: 120 },
//!     Payment { payee: "u3".into(), amount: 10 },
//!     Payment { payee: "u3".into(), amount: 30 },
//! ];
//!
//! let to_u3 = Predicate::new(|p: &Payment| p.payee == "u3");
//! let large = Predicate::new(|p: &Payment| p.amount >= 100);
//!
//! let mut processor = RecordProcessor::new(payments);
//! processor
//!     .filter_records(&to_u3.or(&large))
//!     .sort(|a, b| a.amount.cmp(&b.amount));
//!
//! let page = processor.get_page(2, 0);
//! assert_eq!(page[0].amount, 10);
//! assert_eq!(page[1].amount, 30);
//! ```
//!
//! # Cursors
//!
//! ```rust
//! use sifter::{Cursor, CyclicCursor, RangeCursor, ZigzagCursor};
//!
//! // Bounded arithmetic range
//! let odds: Vec<i64> = RangeCursor::new(1, 8, 2).drain().collect();
//! assert_eq!(odds, vec![1, 3, 5, 7]);
//!
//! // Infinite cycle over a resettable source
//! let looped: Vec<i64> = CyclicCursor::new(RangeCursor::new(1, 8, 2))
//!     .drain()
//!     .take(6)
//!     .collect();
//! assert_eq!(looped, vec![1, 3, 5, 7, 1, 3]);
//!
//! // Round-robin merge of several sequences
//! let merged: Vec<i64> = ZigzagCursor::new(vec![vec![1, 2], vec![9]]).drain().collect();
//! assert_eq!(merged, vec![1, 9, 2]);
//! ```
//!
//! # Failure semantics
//!
//! All failures are local, synchronous, and reported to the immediate
//! caller through [`SifterError`]: a bad regex pattern when building a
//! predicate, an out-of-range index on
//! [`RecordProcessor::get`], a typed read of the wrong [`Value`] variant,
//! and `next` on an exhausted cursor. Nothing is retried internally.
//!
//! # Threading
//!
//! Everything here is single-threaded and synchronous. Each processor and
//! cursor instance owns its state exclusively; using one instance from
//! multiple threads without external synchronization is unsupported.

mod cursor;
mod cyclic;
mod error;
mod ordering;
mod predicate;
mod processor;
mod range;
mod value;
mod zigzag;

// Re-export public API
pub use cursor::{Cursor, CursorDrain, Resettable};
pub use cyclic::CyclicCursor;
pub use error::{Result, SifterError};
pub use ordering::{compare_by_key, Dir};
pub use predicate::Predicate;
pub use processor::RecordProcessor;
pub use range::RangeCursor;
pub use value::Value;
pub use zigzag::ZigzagCursor;
