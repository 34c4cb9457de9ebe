//! Affine transform of a vector.

use hadal_core::KernelError;
use hadal_kernel::{Kernel, KernelContext};

/// Affine map kernel: `out[i] = scale * a[i] + offset`.
///
/// Generalizes [`Scale`](crate::Scale) with a constant offset; with
/// `scale = 1.0` it is a constant shift.
#[derive(Debug, Clone, Copy)]
pub struct AffineMap {
    scale: f64,
    offset: f64,
}

impl AffineMap {
    /// Create an affine map with the given scale and offset.
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }
}

impl Kernel for AffineMap {
    fn name(&self) -> &str {
        "affine"
    }

    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let a = ctx.input(0);
        let (scale, offset) = (self.scale, self.offset);
        for (out, &x) in ctx.output().iter_mut().zip(a) {
            *out = scale * x + offset;
        }
        Ok(())
    }
}
