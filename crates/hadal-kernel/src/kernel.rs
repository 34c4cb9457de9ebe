//! The [`Kernel`] trait.

use hadal_core::KernelError;

use crate::context::KernelContext;

/// A data-parallel elementwise operator executed over a dispatch grid.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: the same inputs produce identical
///   outputs.
/// - `apply()` MUST be order-independent: output element `i` depends
///   only on input elements at index `i`, so any chunking of the grid
///   and any execution order of the chunks yields an identical result.
/// - `&self` — kernels are stateless between invocations; parameters
///   are fixed at construction (e.g. a scale factor).
/// - `name()` and `arity()` are consulted at registration and dispatch
///   validation, not per-chunk.
///
/// Dispatchers validate input count and lengths before the first
/// invocation; inside `apply()` the context's slices are already
/// narrowed to the chunk and guaranteed equal-length.
///
/// # Object safety
///
/// This trait is object-safe; registries store kernels as
/// `Box<dyn Kernel>`. `Send + Sync` lets a parallel dispatcher share
/// one kernel across worker threads.
///
/// # Examples
///
/// A kernel that negates its single input:
///
/// ```
/// use hadal_core::KernelError;
/// use hadal_kernel::{Kernel, KernelContext};
///
/// struct Negate;
///
/// impl Kernel for Negate {
///     fn name(&self) -> &str { "negate" }
///
///     fn arity(&self) -> usize { 1 }
///
///     fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
///         let x = ctx.input(0);
///         for (out, &v) in ctx.output().iter_mut().zip(x) {
///             *out = -v;
///         }
///         Ok(())
///     }
/// }
///
/// let kernel = Negate;
/// assert_eq!(kernel.name(), "negate");
/// assert_eq!(kernel.arity(), 1);
/// ```
pub trait Kernel: Send + Sync + 'static {
    /// The kernel's entry-point name, used for registry lookup and
    /// error reporting.
    fn name(&self) -> &str;

    /// Number of input vectors the kernel consumes.
    fn arity(&self) -> usize;

    /// Execute the kernel for one chunk of the grid.
    ///
    /// Called once per chunk, possibly concurrently on different chunks.
    /// The [`KernelContext`] carries the chunk's input and output slices
    /// plus its global offset for kernels whose output depends on the
    /// absolute index.
    fn apply(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError>;
}
