//! Named segmented buffers: one allocation, many disjoint views.
//!
//! `loam` carves a single contiguous allocation into independently-named,
//! fixed-length, non-overlapping segments, so that logically distinct arrays
//! (say, the price levels and the results of a numeric pipeline) share one
//! allocation for locality while remaining individually addressable through
//! a type-safe name rather than a numeric offset.
//!
//! # Architecture
//!
//! ```text
//! SegmentedBuffer<T, N>
//! ├── Vec<T>               one allocation, sized at construction, never resized
//! └── SegmentLayout<N>     immutable boundary table (prefix sums of lengths)
//!         └── N: SegmentName    exhaustive enum, one variant per segment
//! ```
//!
//! The layout is computed once at construction from an ordered list of
//! `(name, length)` specifications and never changes. After that, resolving
//! a name to its view is an O(1) table lookup; asking for a name outside the
//! declared set is a type error, not a runtime failure.
//!
//! All storage is plain zero-initialised `Vec` — no `MaybeUninit`, no
//! `unsafe` anywhere in the crate.
//!
//! # Quick start
//!
//! ```rust
//! use loam::{SegmentName, SegmentSpec, SegmentedBuffer};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Book {
//!     Levels,
//!     Results,
//! }
//!
//! impl SegmentName for Book {
//!     const ALL: &'static [Self] = &[Book::Levels, Book::Results];
//!
//!     fn index(self) -> usize {
//!         match self {
//!             Book::Levels => 0,
//!             Book::Results => 1,
//!         }
//!     }
//! }
//!
//! let mut buf = SegmentedBuffer::<f64, Book>::new(&[
//!     SegmentSpec::new(Book::Levels, 10),
//!     SegmentSpec::new(Book::Results, 20),
//! ])
//! .unwrap();
//!
//! assert_eq!(buf.total_len(), 30);
//! buf.get_mut(Book::Levels)[0] = 1.0;
//! buf.get_mut(Book::Results)[19] = 2.95;
//! assert_eq!(buf.get(Book::Levels)[0], 1.0);
//! assert_eq!(buf.get(Book::Results)[19], 2.95);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod layout;
pub mod name;
pub mod spec;

// Public re-exports for the primary API surface.
pub use buffer::SegmentedBuffer;
pub use error::LayoutError;
pub use layout::SegmentLayout;
pub use name::SegmentName;
pub use spec::SegmentSpec;
