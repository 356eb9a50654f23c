//! Layout and construction error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while validating a segment configuration or
/// constructing a buffer.
///
/// Every variant is raised before the backing allocation is touched, except
/// [`LayoutError::AllocationFailed`], which is raised when the allocation
/// itself is refused. A failed construction never leaves a partially-built
/// buffer behind.
///
/// Requesting an undeclared segment is not represented here: names are
/// exhaustive enums, so that mistake is a type error at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The declared name set lists the same name at two positions.
    DuplicateName {
        /// Debug rendering of the offending name.
        name: String,
        /// First position of the name in declared order.
        first: usize,
        /// Second position of the name in declared order.
        second: usize,
    },
    /// A name's `index()` disagrees with its position in the declared order.
    NameIndexMismatch {
        /// Debug rendering of the offending name.
        name: String,
        /// Value returned by `SegmentName::index`.
        index: usize,
        /// Position of the name in `SegmentName::ALL`.
        position: usize,
    },
    /// The number of supplied specifications differs from the declared
    /// name count.
    SpecCountMismatch {
        /// Number of declared names.
        expected: usize,
        /// Number of specifications supplied.
        supplied: usize,
    },
    /// The specification at `position` names a different segment than the
    /// declared order requires.
    SpecOrderMismatch {
        /// Position of the offending specification.
        position: usize,
        /// Debug rendering of the name declared at this position.
        expected: String,
        /// Debug rendering of the name that was supplied.
        supplied: String,
    },
    /// The sum of segment lengths overflows `usize`.
    TotalLenOverflow {
        /// Debug rendering of the segment whose length overflowed the sum.
        name: String,
        /// Running total before this segment.
        running_total: usize,
        /// Length requested for this segment.
        requested: usize,
    },
    /// The single backing allocation was refused by the allocator.
    AllocationFailed {
        /// Number of elements requested.
        elements: usize,
        /// Equivalent size in bytes.
        bytes: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName {
                name,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate segment name {name} declared at positions {first} and {second}"
                )
            }
            Self::NameIndexMismatch {
                name,
                index,
                position,
            } => {
                write!(
                    f,
                    "segment name {name} reports index {index} but is declared at position {position}"
                )
            }
            Self::SpecCountMismatch { expected, supplied } => {
                write!(
                    f,
                    "expected {expected} segment specifications, got {supplied}"
                )
            }
            Self::SpecOrderMismatch {
                position,
                expected,
                supplied,
            } => {
                write!(
                    f,
                    "specification at position {position} names {supplied}, expected {expected}"
                )
            }
            Self::TotalLenOverflow {
                name,
                running_total,
                requested,
            } => {
                write!(
                    f,
                    "total length overflows usize at segment {name}: {running_total} + {requested}"
                )
            }
            Self::AllocationFailed { elements, bytes } => {
                write!(f, "allocation of {elements} elements ({bytes} bytes) failed")
            }
        }
    }
}

impl Error for LayoutError {}
