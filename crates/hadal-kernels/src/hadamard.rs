//! Elementwise (Hadamard) product of two vectors.

use hadal_core::KernelError;
use hadal_kernel::{Kernel, KernelContext};

/// The Hadamard product kernel: `out[i] = a[i] * b[i]`.
///
/// The canonical two-input elementwise kernel. Multiplication is
/// commutative, so swapping the inputs produces an identical result;
/// the output for index `i` depends on nothing but `a[i]` and `b[i]`,
/// so any chunking or execution order of the grid is equivalent.
///
/// # Examples
///
/// ```
/// use hadal_kernel::{Kernel, KernelContext};
/// use hadal_kernels::Hadamard;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let mut out = [0.0; 3];
/// let mut ctx = KernelContext::new(&[&a, &b], &mut out, 0);
/// Hadamard.apply(&mut ctx).unwrap();
/// drop(ctx);
/// assert_eq!(out, [4.0, 10.0, 18.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hadamard;

impl Kernel for Hadamard {
    fn name(&self) -> &str {
        "hadamard"
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let a = ctx.input(0);
        let b = ctx.input(1);
        for (out, (&x, &y)) in ctx.output().iter_mut().zip(a.iter().zip(b)) {
            *out = x * y;
        }
        Ok(())
    }
}
