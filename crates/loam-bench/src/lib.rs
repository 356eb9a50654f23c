//! Benchmark fixtures for the loam segmented buffer.
//!
//! Provides a reference four-segment configuration shaped like a small
//! numeric pipeline (inputs, weights, scratch, outputs) so the benches
//! measure realistic layouts rather than degenerate single-segment ones.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam::{LayoutError, SegmentName, SegmentSpec, SegmentedBuffer};

/// Segment names of the reference pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    /// Raw input samples.
    Inputs,
    /// Model coefficients.
    Weights,
    /// Intermediate working space.
    Scratch,
    /// Final results.
    Outputs,
}

impl SegmentName for Lane {
    const ALL: &'static [Self] = &[Lane::Inputs, Lane::Weights, Lane::Scratch, Lane::Outputs];

    fn index(self) -> usize {
        match self {
            Lane::Inputs => 0,
            Lane::Weights => 1,
            Lane::Scratch => 2,
            Lane::Outputs => 3,
        }
    }
}

/// Specifications for a pipeline buffer with `cells` elements per lane.
pub fn lane_specs(cells: usize) -> [SegmentSpec<Lane>; 4] {
    [
        SegmentSpec::new(Lane::Inputs, cells),
        SegmentSpec::new(Lane::Weights, cells),
        SegmentSpec::new(Lane::Scratch, cells),
        SegmentSpec::new(Lane::Outputs, cells),
    ]
}

/// Build the reference pipeline buffer with `cells` elements per lane.
pub fn lane_buffer(cells: usize) -> Result<SegmentedBuffer<f32, Lane>, LayoutError> {
    SegmentedBuffer::new(&lane_specs(cells))
}
