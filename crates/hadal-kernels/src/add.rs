//! Elementwise vector addition.

use hadal_core::KernelError;
use hadal_kernel::{Kernel, KernelContext};

/// Elementwise sum kernel: `out[i] = a[i] + b[i]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Kernel for Add {
    fn name(&self) -> &str {
        "add"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let a = ctx.input(0);
        let b = ctx.input(1);
        for (out, (&x, &y)) in ctx.output().iter_mut().zip(a.iter().zip(b)) {
            *out = x + y;
        }
        Ok(())
    }
}
