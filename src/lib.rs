//! Longest run of ones reachable by flipping at most `k` zeros.
//!
//! The input is split into maximal one-runs ([`segments`]) and a window sweep
//! ([`window`]) finds the longest stretch holding no more than `k` zeros.

pub mod bits;
pub mod error;
pub mod scenario;
pub mod segments;
pub mod window;

pub use bits::{BinarySequence, Bit, Budget};
pub use error::{InvalidArgument, RunError, ScenarioError};
pub use scenario::{Outcome, Scenario, ScenarioFile, Verdict};
pub use segments::{extract_segments, longest_segment, reconstruct, Segment};
pub use window::{longest_achievable_run, max_window, max_window_over_segments};
