//! Worker-pool dispatch over scoped threads.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use hadal_core::{DispatchError, Grid1D, KernelError};
use hadal_kernel::{Kernel, KernelContext};
use smallvec::SmallVec;

use crate::metrics::DispatchMetrics;
use crate::validate::{check_finite, validate};

/// Fans the grid out across `workers` scoped threads.
///
/// The grid is split into at most `workers` contiguous chunks; each
/// chunk gets its own thread, its own disjoint sub-slice of the output,
/// and chunk-narrowed views of the inputs. There is no shared mutable
/// state between invocations and therefore no locking — kernels are
/// order-independent by contract, so the result is bit-identical to a
/// serial run.
///
/// Kernel errors are funneled back over a channel; a panicking worker
/// surfaces as [`DispatchError::WorkerPanicked`] instead of tearing
/// down the caller.
///
/// # Examples
///
/// ```
/// use hadal_dispatch::ParallelDispatcher;
/// use hadal_kernels::Hadamard;
///
/// let a: Vec<f64> = (0..1000).map(f64::from).collect();
/// let b = vec![2.0; 1000];
/// let mut out = vec![0.0; 1000];
/// let metrics = ParallelDispatcher::new(4)
///     .dispatch(&Hadamard, &[&a, &b], &mut out)
///     .unwrap();
/// assert_eq!(out[999], 1998.0);
/// assert!(metrics.chunks <= 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParallelDispatcher {
    workers: usize,
    check_finite: bool,
}

impl ParallelDispatcher {
    /// Create a dispatcher with the given worker count.
    ///
    /// `workers == 0` is normalized to 1.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            check_finite: false,
        }
    }

    /// Configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Enable or disable output sentinel checking (see
    /// [`SerialDispatcher::with_finite_check`](crate::SerialDispatcher::with_finite_check)).
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.check_finite = enabled;
        self
    }

    /// Run `kernel` over `output.len()` grid indices across the worker
    /// threads.
    ///
    /// Validates arity and lengths first. A zero-length grid succeeds
    /// without spawning anything.
    pub fn dispatch(
        &self,
        kernel: &dyn Kernel,
        inputs: &[&[f64]],
        output: &mut [f64],
    ) -> Result<DispatchMetrics, DispatchError> {
        validate(kernel, inputs, output)?;

        let grid = Grid1D::new(output.len());
        if grid.is_empty() {
            return Ok(DispatchMetrics {
                elems: 0,
                chunks: 0,
                workers: self.workers,
            });
        }

        let chunk_len = grid.chunk_len_for(self.workers);
        let n_chunks = grid.chunks(chunk_len).len();
        let (err_tx, err_rx) = crossbeam_channel::unbounded::<KernelError>();

        let run = catch_unwind(AssertUnwindSafe(|| {
            thread::scope(|scope| {
                // grid.chunks and chunks_mut use the same chunk length,
                // so ranges and output sub-slices pair up one-to-one.
                for (range, out_chunk) in grid.chunks(chunk_len).zip(output.chunks_mut(chunk_len)) {
                    let chunk_inputs: SmallVec<[&[f64]; 2]> =
                        inputs.iter().map(|input| &input[range.clone()]).collect();
                    let tx = err_tx.clone();
                    scope.spawn(move || {
                        let mut ctx = KernelContext::new(&chunk_inputs, out_chunk, range.start);
                        if let Err(reason) = kernel.apply(&mut ctx) {
                            let _ = tx.send(reason);
                        }
                    });
                }
            });
        }));
        drop(err_tx);

        if run.is_err() {
            return Err(DispatchError::WorkerPanicked);
        }
        if let Some(reason) = err_rx.try_iter().next() {
            return Err(DispatchError::KernelFailed {
                name: kernel.name().to_string(),
                reason,
            });
        }

        if self.check_finite {
            check_finite(output)?;
        }

        Ok(DispatchMetrics {
            elems: grid.len(),
            chunks: n_chunks,
            workers: self.workers,
        })
    }
}
