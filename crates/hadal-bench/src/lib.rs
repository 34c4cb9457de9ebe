//! Benchmark profiles and fixtures for the Hadal runtime.
//!
//! Provides the vector sizes and seeded input pairs the bench binaries
//! share, so kernel and buffer benchmarks stay comparable run to run.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hadal_test_utils::seeded_vec;

/// Grid sizes exercised by the kernel benchmarks: small (fits L1),
/// medium (fits L2), large (memory-bound).
pub const GRID_SIZES: [usize; 3] = [1_024, 65_536, 1_048_576];

/// Worker counts exercised by the parallel dispatch benchmarks.
pub const WORKER_COUNTS: [usize; 3] = [2, 4, 8];

/// Deterministic input pair for a binary kernel benchmark.
pub fn input_pair(len: usize) -> (Vec<f64>, Vec<f64>) {
    (seeded_vec(0xA11CE, len), seeded_vec(0xB0B, len))
}
