//! Single-threaded dispatch.

use hadal_core::{DispatchError, Grid1D};
use hadal_kernel::{Kernel, KernelContext};

use crate::metrics::DispatchMetrics;
use crate::validate::{check_finite, validate};

/// Runs a kernel over the whole grid in one invocation.
///
/// The baseline dispatcher: validation, one chunk covering `[0, n)`,
/// done. A zero-length grid succeeds without invoking the kernel.
///
/// # Examples
///
/// ```
/// use hadal_dispatch::SerialDispatcher;
/// use hadal_kernels::Hadamard;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let mut out = [0.0; 3];
/// let metrics = SerialDispatcher::new()
///     .dispatch(&Hadamard, &[&a, &b], &mut out)
///     .unwrap();
/// assert_eq!(out, [4.0, 10.0, 18.0]);
/// assert_eq!(metrics.chunks, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialDispatcher {
    check_finite: bool,
}

impl SerialDispatcher {
    /// Create a serial dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable output sentinel checking.
    ///
    /// When enabled, a dispatch whose output contains NaN or an
    /// infinity fails with [`DispatchError::NonFinite`] naming the
    /// first offending index.
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.check_finite = enabled;
        self
    }

    /// Run `kernel` over `output.len()` grid indices.
    ///
    /// Validates arity and lengths first; the kernel never sees
    /// mismatched slices.
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
                workers: 1,
            });
        }

        let mut ctx = KernelContext::new(inputs, output, 0);
        kernel.apply(&mut ctx).map_err(|reason| DispatchError::KernelFailed {
            name: kernel.name().to_string(),
            reason,
        })?;
        drop(ctx);

        if self.check_finite {
            check_finite(output)?;
        }

        Ok(DispatchMetrics {
            elems: grid.len(),
            chunks: 1,
            workers: 1,
        })
    }
}
