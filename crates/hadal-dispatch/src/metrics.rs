//! Per-dispatch metrics.

/// What a successful dispatch actually executed.
///
/// Returned by both dispatchers so callers can confirm chunking and
/// worker fan-out without instrumenting the kernels themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchMetrics {
    /// Output elements produced (the grid length).
    pub elems: usize,
    /// Chunks the grid was split into.
    pub chunks: usize,
    /// Worker threads used (1 for serial dispatch).
    pub workers: usize,
}
