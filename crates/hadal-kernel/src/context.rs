//! Per-invocation view passed to [`Kernel::apply`](crate::Kernel::apply).

use smallvec::SmallVec;

/// The chunk-local view a kernel executes against.
///
/// Input and output slices are already narrowed to the chunk the
/// dispatcher assigned to this invocation, and are guaranteed
/// equal-length by dispatch validation. [`offset`](Self::offset) gives
/// the chunk's position in the full grid for kernels whose output
/// depends on the absolute index.
pub struct KernelContext<'a> {
    inputs: SmallVec<[&'a [f64]; 2]>,
    output: &'a mut [f64],
    offset: usize,
}

impl<'a> KernelContext<'a> {
    /// Construct a context for one chunk.
    ///
    /// Typically called by a dispatcher, not by kernels directly. Tests
    /// construct one from plain slices.
    pub fn new(inputs: &[&'a [f64]], output: &'a mut [f64], offset: usize) -> Self {
        Self {
            inputs: SmallVec::from_slice(inputs),
            output,
            offset,
        }
    }

    /// Input slice `idx`, narrowed to this chunk.
    ///
    /// # Panics
    /// Panics if `idx >= arity`; dispatch validation makes that
    /// unreachable for registered kernels.
    pub fn input(&self, idx: usize) -> &'a [f64] {
        self.inputs[idx]
    }

    /// Number of input slices.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Output slice, narrowed to this chunk.
    pub fn output(&mut self) -> &mut [f64] {
        self.output
    }

    /// This chunk's starting index in the full grid.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Chunk length in elements.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Returns `true` for an empty chunk.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}
