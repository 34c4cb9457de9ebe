//! Elementwise vector subtraction.

use hadal_core::KernelError;
use hadal_kernel::{Kernel, KernelContext};

/// Elementwise difference kernel: `out[i] = a[i] - b[i]`.
///
/// Input order matters: input 0 is the minuend, input 1 the subtrahend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sub;

impl Kernel for Sub {
    fn name(&self) -> &str {
        "sub"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let a = ctx.input(0);
        let b = ctx.input(1);
        for (out, (&x, &y)) in ctx.output().iter_mut().zip(a.iter().zip(b)) {
            *out = x - y;
        }
        Ok(())
    }
}
