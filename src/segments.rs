//! Maximal runs of ones, as half-open index intervals.

use log::trace;

use crate::bits::{BinarySequence, Bit};

// =============================================================================
// Segment
// =============================================================================

/// A maximal run of ones covering `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Zeros separating this segment from a later one.
    pub fn gap_to(&self, next: &Segment) -> usize {
        next.start - self.end
    }
}

// =============================================================================
// Extraction
// =============================================================================

/// Splits `sequence` into its maximal one-runs, left to right, in one pass.
pub fn extract_segments(sequence: &BinarySequence) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run_start = None;

    for (i, bit) in sequence.iter().enumerate() {
        match (bit, run_start) {
            (Bit::One, None) => run_start = Some(i),
            (Bit::Zero, Some(start)) => {
                segments.push(Segment { start, end: i });
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        segments.push(Segment {
            start,
            end: sequence.len(),
        });
    }

    trace!(
        "extracted {} segments from {} bits",
        segments.len(),
        sequence.len()
    );
    segments
}

/// Rebuilds a sequence of length `len` from its segments; every uncovered index is zero.
pub fn reconstruct(segments: &[Segment], len: usize) -> BinarySequence {
    let mut bits = vec![Bit::Zero; len];
    for segment in segments {
        for bit in bits.iter_mut().take(segment.end).skip(segment.start) {
            *bit = Bit::One;
        }
    }
    BinarySequence::from(bits)
}

pub fn longest_segment(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::len).max().unwrap_or(0)
}

// =============================================================================
// Tests
// =============================================================================
