//! Scalar multiplication of a vector.

use hadal_core::KernelError;
use hadal_kernel::{Kernel, KernelContext};

/// Scalar multiply kernel: `out[i] = factor * a[i]`.
///
/// The factor is fixed at construction; the kernel itself stays
/// stateless across invocations.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    factor: f64,
}

impl Scale {
    /// Create a scale kernel with the given factor.
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The configured factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Kernel for Scale {
    fn name(&self) -> &str {
        "scale"
    }

    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let a = ctx.input(0);
        let factor = self.factor;
        for (out, &x) in ctx.output().iter_mut().zip(a) {
            *out = factor * x;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_elementwise() {
        let a = [1.0, -2.0, 0.5];
        let mut out = [0.0; 3];
        let mut ctx = KernelContext::new(&[&a], &mut out, 0);
        Scale::new(4.0).apply(&mut ctx).unwrap();
        drop(ctx);
        assert_eq!(out, [4.0, -8.0, 2.0]);
    }

    #[test]
    fn zero_factor_zeroes() {
        let a = [3.0, 7.0];
        let mut out = [1.0; 2];
        let mut ctx = KernelContext::new(&[&a], &mut out, 0);
        Scale::new(0.0).apply(&mut ctx).unwrap();
        drop(ctx);
        assert_eq!(out, [0.0, 0.0]);
    }

    #[test]
    fn declares_name_and_arity() {
        let k = Scale::new(2.0);
        assert_eq!(k.name(), "scale");
        assert_eq!(k.arity(), 1);
        assert_eq!(k.factor(), 2.0);
    }
}
