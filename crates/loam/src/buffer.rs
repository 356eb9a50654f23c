//! The segmented buffer: one allocation, named disjoint views.

use crate::error::LayoutError;
use crate::layout::SegmentLayout;
use crate::name::SegmentName;
use crate::spec::SegmentSpec;

/// A single contiguous allocation carved into named, fixed-length,
/// non-overlapping segments.
///
/// Storage is allocated once at construction and never grows, shrinks, or
/// moves for the lifetime of the buffer. Each declared name resolves to a
/// disjoint sub-slice of that storage via the immutable boundary table, so
/// logically distinct arrays share one allocation for locality while staying
/// individually addressable.
///
/// The buffer is move-only: ownership transfers with Rust moves and there is
/// no `Clone`, so the allocation is never duplicated implicitly. A deep copy
/// is available as the separately named [`SegmentedBuffer::duplicate`],
/// keeping the second allocation visible at the call site.
///
/// Elements are `Copy + Default`: plain zero-initialised storage with no
/// per-element construction or destruction, and no `unsafe` anywhere.
///
/// Disjoint segments of one buffer may be read concurrently without
/// synchronisation; concurrent access to the *same* segment is the caller's
/// problem to coordinate. The type is `Send`/`Sync` exactly when `T` is.
#[derive(Debug)]
pub struct SegmentedBuffer<T, N: SegmentName> {
    /// Backing storage for every segment. Length equals `layout.total_len()`.
    data: Vec<T>,
    /// Immutable boundary table.
    layout: SegmentLayout<N>,
}

impl<T: Copy + Default, N: SegmentName> SegmentedBuffer<T, N> {
    /// Construct a buffer from one specification per declared name, in
    /// declared order.
    ///
    /// Validates the configuration first, then performs the single backing
    /// allocation, default-initialised. A configuration with zero segments,
    /// or whose lengths are all zero, allocates nothing.
    ///
    /// # Errors
    ///
    /// Configuration errors from [`SegmentLayout::new`], or
    /// [`LayoutError::AllocationFailed`] if the allocator refuses the
    /// request. On any error no buffer exists and no memory is retained.
    pub fn new(specs: &[SegmentSpec<N>]) -> Result<Self, LayoutError> {
        let layout = SegmentLayout::new(specs)?;
        let data = alloc_elements(layout.total_len())?;
        Ok(Self { data, layout })
    }

    /// Read-only view of the segment `name`. O(1).
    pub fn get(&self, name: N) -> &[T] {
        &self.data[self.layout.range(name)]
    }

    /// Mutable view of the segment `name`. O(1).
    pub fn get_mut(&mut self, name: N) -> &mut [T] {
        let range = self.layout.range(name);
        &mut self.data[range]
    }

    /// Total element count across all segments.
    pub fn total_len(&self) -> usize {
        self.layout.total_len()
    }

    /// Number of declared segments.
    pub fn segment_count(&self) -> usize {
        self.layout.segment_count()
    }

    /// The boundary table backing this buffer.
    pub fn layout(&self) -> &SegmentLayout<N> {
        &self.layout
    }

    /// Memory footprint of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }

    /// Iterate over `(name, view)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (N, &[T])> + '_ {
        self.layout
            .iter()
            .map(|(name, range)| (name, &self.data[range]))
    }

    /// Explicit deep copy: a new buffer with identical layout and contents.
    ///
    /// This is the only way to duplicate a buffer — `Clone` is deliberately
    /// absent so a second allocation never happens behind the caller's back.
    ///
    /// # Errors
    ///
    /// [`LayoutError::AllocationFailed`] if the allocator refuses the new
    /// allocation.
    pub fn duplicate(&self) -> Result<Self, LayoutError> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| alloc_failed::<T>(self.data.len()))?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            data,
            layout: self.layout.clone(),
        })
    }
}

/// Allocate `len` default-initialised elements in one fallible request.
///
/// `try_reserve_exact` keeps allocation failure an error rather than an
/// abort; the subsequent `resize` fills the already-reserved capacity and
/// cannot reallocate. Zero elements short-circuits to `Vec::new`, which
/// does not touch the allocator.
fn alloc_elements<T: Copy + Default>(len: usize) -> Result<Vec<T>, LayoutError> {
    if len == 0 {
        return Ok(Vec::new());
    }
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| alloc_failed::<T>(len))?;
    data.resize(len, T::default());
    Ok(data)
}

fn alloc_failed<T>(elements: usize) -> LayoutError {
    LayoutError::AllocationFailed {
        elements,
        bytes: elements.saturating_mul(std::mem::size_of::<T>()),
    }
}
