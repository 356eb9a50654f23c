//! The [`SegmentName`] trait: typed, ordered segment identities.

use std::fmt;

/// A typed name selecting one segment of a buffer.
///
/// Implemented on an exhaustive `enum` with one variant per segment. The
/// compiler guarantees variant distinctness, and exhaustiveness means a
/// buffer can only ever be asked for a segment it actually has — there is
/// no runtime "unknown name" path.
///
/// Declaration order is the memory layout: segment `i` of the buffer is the
/// one named by `ALL[i]`.
///
/// # Contract
///
/// `ALL` lists every value of the type exactly once, and
/// `index(ALL[i]) == i` for every position. Both halves of the contract are
/// checked once per construction, before any allocation; a violating
/// implementation is rejected with a configuration error.
///
/// # Example
///
/// ```
/// use loam::SegmentName;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Channel {
///     Levels,
///     Results,
/// }
///
/// impl SegmentName for Channel {
///     const ALL: &'static [Self] = &[Channel::Levels, Channel::Results];
///
///     fn index(self) -> usize {
///         match self {
///             Channel::Levels => 0,
///             Channel::Results => 1,
///         }
///     }
/// }
///
/// assert_eq!(Channel::Results.index(), 1);
/// ```
pub trait SegmentName: Copy + Eq + fmt::Debug + 'static {
    /// Every name of this set, in declared order.
    const ALL: &'static [Self];

    /// Position of this name within [`SegmentName::ALL`].
    fn index(self) -> usize;
}
