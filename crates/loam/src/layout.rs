//! Boundary-table construction and name-to-range resolution.
//!
//! [`SegmentLayout`] turns an ordered list of [`SegmentSpec`]s into the
//! prefix sums of their lengths. The table is immutable after construction
//! and no mutating accessor exists, so the disjointness of the resulting
//! ranges cannot be broken from outside.

use std::marker::PhantomData;
use std::ops::Range;

use smallvec::SmallVec;

use crate::error::LayoutError;
use crate::name::SegmentName;
use crate::spec::SegmentSpec;

/// Inline capacity of the boundary table.
///
/// Configurations with more segments spill to the heap transparently.
const INLINE_SEGMENTS: usize = 8;

/// The boundary table of a segmented buffer.
///
/// Stores one cumulative end offset per declared name, in declared order:
/// `ends[i]` is the exclusive end of segment `i`, and its start is
/// `ends[i - 1]` (or 0 for the first segment). The resulting ranges are
/// pairwise disjoint and jointly cover `[0, total_len())` with no gaps.
///
/// Uses `SmallVec` so that typical configurations (a handful of segments)
/// keep their metadata inline rather than in a second heap allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentLayout<N: SegmentName> {
    /// `ends[i]` is the end offset (exclusive) of segment `i`.
    ends: SmallVec<[usize; INLINE_SEGMENTS]>,
    _names: PhantomData<N>,
}

impl<N: SegmentName> SegmentLayout<N> {
    /// Build the boundary table from one specification per declared name.
    ///
    /// Specifications must be supplied in declared order — order is the
    /// memory layout. Validation happens before anything else: the name
    /// set's own contract first, then the supplied list against it.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DuplicateName`] / [`LayoutError::NameIndexMismatch`]
    ///   if the `SegmentName` implementation violates its contract.
    /// - [`LayoutError::SpecCountMismatch`] / [`LayoutError::SpecOrderMismatch`]
    ///   if the supplied specifications are not exactly the declared names
    ///   in declared order.
    /// - [`LayoutError::TotalLenOverflow`] if the summed lengths overflow
    ///   `usize`.
    pub fn new(specs: &[SegmentSpec<N>]) -> Result<Self, LayoutError> {
        validate_name_set::<N>()?;

        let declared = N::ALL;
        if specs.len() != declared.len() {
            return Err(LayoutError::SpecCountMismatch {
                expected: declared.len(),
                supplied: specs.len(),
            });
        }

        let mut ends: SmallVec<[usize; INLINE_SEGMENTS]> =
            SmallVec::with_capacity(declared.len());
        let mut total = 0usize;
        for (position, (spec, declared_name)) in specs.iter().zip(declared).enumerate() {
            if spec.name() != *declared_name {
                return Err(LayoutError::SpecOrderMismatch {
                    position,
                    expected: format!("{declared_name:?}"),
                    supplied: format!("{:?}", spec.name()),
                });
            }
            total = match total.checked_add(spec.len()) {
                Some(t) => t,
                None => {
                    return Err(LayoutError::TotalLenOverflow {
                        name: format!("{:?}", spec.name()),
                        running_total: total,
                        requested: spec.len(),
                    })
                }
            };
            ends.push(total);
        }

        Ok(Self {
            ends,
            _names: PhantomData,
        })
    }

    /// Element range `[start, end)` of the segment `name`. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `N` violates the [`SegmentName`] contract with a name that
    /// is absent from `ALL` (such a name cannot exist for a conforming
    /// implementation).
    pub fn range(&self, name: N) -> Range<usize> {
        self.range_at(name.index())
    }

    /// Element range of the segment at `position` in declared order.
    ///
    /// # Panics
    ///
    /// Panics if `position >= segment_count()`.
    pub fn range_at(&self, position: usize) -> Range<usize> {
        let start = if position == 0 {
            0
        } else {
            self.ends[position - 1]
        };
        start..self.ends[position]
    }

    /// Total number of elements across all segments.
    pub fn total_len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Number of declared segments.
    pub fn segment_count(&self) -> usize {
        self.ends.len()
    }

    /// Iterate over `(name, range)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (N, Range<usize>)> + '_ {
        N::ALL
            .iter()
            .enumerate()
            .map(|(position, name)| (*name, self.range_at(position)))
    }
}

/// Check the [`SegmentName`] contract for `N`: pairwise-distinct entries in
/// `ALL` and a position-consistent `index()`.
///
/// Runs once per construction, before any allocation. Name sets are small,
/// so the pairwise scan is O(n²) over a handful of entries.
fn validate_name_set<N: SegmentName>() -> Result<(), LayoutError> {
    let declared = N::ALL;

    for (first, a) in declared.iter().enumerate() {
        for (offset, b) in declared[first + 1..].iter().enumerate() {
            if a == b {
                return Err(LayoutError::DuplicateName {
                    name: format!("{a:?}"),
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }

    for (position, name) in declared.iter().enumerate() {
        if name.index() != position {
            return Err(LayoutError::NameIndexMismatch {
                name: format!("{name:?}"),
                index: name.index(),
                position,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Triple {
        X,
        Y,
        Z,
    }

    impl SegmentName for Triple {
        const ALL: &'static [Self] = &[Triple::X, Triple::Y, Triple::Z];

        fn index(self) -> usize {
            match self {
                Triple::X => 0,
                Triple::Y => 1,
                Triple::Z => 2,
            }
        }
    }

    /// Zero-variant name set: a buffer with no segments at all.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Void {}

    impl SegmentName for Void {
        const ALL: &'static [Self] = &[];

        fn index(self) -> usize {
            match self {}
        }
    }

    /// Deliberately broken: `ALL` lists the same variant twice.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Doubled {
        A,
    }

    impl SegmentName for Doubled {
        const ALL: &'static [Self] = &[Doubled::A, Doubled::A];

        fn index(self) -> usize {
            match self {
                Doubled::A => 0,
            }
        }
    }

    /// Deliberately broken: `index()` swaps the declared positions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Swapped {
        A,
        B,
    }

    impl SegmentName for Swapped {
        const ALL: &'static [Self] = &[Swapped::A, Swapped::B];

        fn index(self) -> usize {
            match self {
                Swapped::A => 1,
                Swapped::B => 0,
            }
        }
    }

    fn triple_specs(x: usize, y: usize, z: usize) -> [SegmentSpec<Triple>; 3] {
        [
            SegmentSpec::new(Triple::X, x),
            SegmentSpec::new(Triple::Y, y),
            SegmentSpec::new(Triple::Z, z),
        ]
    }

    #[test]
    fn ends_are_prefix_sums() {
        let layout = SegmentLayout::new(&triple_specs(10, 20, 5)).unwrap();
        assert_eq!(layout.range(Triple::X), 0..10);
        assert_eq!(layout.range(Triple::Y), 10..30);
        assert_eq!(layout.range(Triple::Z), 30..35);
        assert_eq!(layout.total_len(), 35);
        assert_eq!(layout.segment_count(), 3);
    }

    #[test]
    fn zero_len_segment_yields_empty_range() {
        let layout = SegmentLayout::new(&triple_specs(10, 0, 5)).unwrap();
        let range = layout.range(Triple::Y);
        assert_eq!(range, 10..10);
        assert!(range.is_empty());
        assert_eq!(layout.total_len(), 15);
    }

    #[test]
    fn empty_name_set_is_legal() {
        let layout = SegmentLayout::<Void>::new(&[]).unwrap();
        assert_eq!(layout.total_len(), 0);
        assert_eq!(layout.segment_count(), 0);
        assert_eq!(layout.iter().count(), 0);
    }

    #[test]
    fn iter_walks_declared_order() {
        let layout = SegmentLayout::new(&triple_specs(1, 2, 3)).unwrap();
        let collected: Vec<_> = layout.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Triple::X, 0..1),
                (Triple::Y, 1..3),
                (Triple::Z, 3..6),
            ]
        );
    }

    #[test]
    fn missing_spec_is_rejected() {
        let result = SegmentLayout::<Triple>::new(&[
            SegmentSpec::new(Triple::X, 10),
            SegmentSpec::new(Triple::Y, 20),
        ]);
        assert_eq!(
            result.unwrap_err(),
            LayoutError::SpecCountMismatch {
                expected: 3,
                supplied: 2,
            }
        );
    }

    #[test]
    fn out_of_order_specs_are_rejected() {
        let result = SegmentLayout::<Triple>::new(&[
            SegmentSpec::new(Triple::Y, 20),
            SegmentSpec::new(Triple::X, 10),
            SegmentSpec::new(Triple::Z, 5),
        ]);
        assert!(matches!(
            result,
            Err(LayoutError::SpecOrderMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn repeated_spec_is_rejected() {
        let result = SegmentLayout::<Triple>::new(&[
            SegmentSpec::new(Triple::X, 10),
            SegmentSpec::new(Triple::X, 20),
            SegmentSpec::new(Triple::Z, 5),
        ]);
        assert!(matches!(
            result,
            Err(LayoutError::SpecOrderMismatch { position: 1, .. })
        ));
    }

    #[test]
    fn duplicate_declared_name_is_rejected() {
        let result = SegmentLayout::<Doubled>::new(&[
            SegmentSpec::new(Doubled::A, 10),
            SegmentSpec::new(Doubled::A, 20),
        ]);
        assert_eq!(
            result.unwrap_err(),
            LayoutError::DuplicateName {
                name: "A".to_string(),
                first: 0,
                second: 1,
            }
        );
    }

    #[test]
    fn inconsistent_index_is_rejected() {
        let result = SegmentLayout::<Swapped>::new(&[
            SegmentSpec::new(Swapped::A, 10),
            SegmentSpec::new(Swapped::B, 20),
        ]);
        assert!(matches!(
            result,
            Err(LayoutError::NameIndexMismatch { position: 0, .. })
        ));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let result = SegmentLayout::<Triple>::new(&[
            SegmentSpec::new(Triple::X, usize::MAX),
            SegmentSpec::new(Triple::Y, 1),
            SegmentSpec::new(Triple::Z, 0),
        ]);
        assert!(matches!(result, Err(LayoutError::TotalLenOverflow { .. })));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn total_is_sum_of_lengths(
                x in 0usize..10_000,
                y in 0usize..10_000,
                z in 0usize..10_000,
            ) {
                let layout = SegmentLayout::new(&triple_specs(x, y, z)).unwrap();
                prop_assert_eq!(layout.total_len(), x + y + z);
            }

            #[test]
            fn range_lengths_match_requests(
                x in 0usize..10_000,
                y in 0usize..10_000,
                z in 0usize..10_000,
            ) {
                let layout = SegmentLayout::new(&triple_specs(x, y, z)).unwrap();
                prop_assert_eq!(layout.range(Triple::X).len(), x);
                prop_assert_eq!(layout.range(Triple::Y).len(), y);
                prop_assert_eq!(layout.range(Triple::Z).len(), z);
            }

            #[test]
            fn ranges_are_contiguous_and_cover(
                x in 0usize..10_000,
                y in 0usize..10_000,
                z in 0usize..10_000,
            ) {
                let layout = SegmentLayout::new(&triple_specs(x, y, z)).unwrap();
                let mut cursor = 0;
                for (_, range) in layout.iter() {
                    prop_assert_eq!(range.start, cursor);
                    cursor = range.end;
                }
                prop_assert_eq!(cursor, layout.total_len());
            }
        }
    }
}
