//! Serial and worker-pool kernel dispatchers for the Hadal runtime.
//!
//! A dispatcher realizes the dispatch grid: it validates a kernel's
//! inputs against its declared arity and the output length, splits the
//! grid `[0, n)` into chunks, and invokes the kernel once per chunk.
//!
//! - [`SerialDispatcher`] runs the whole grid as a single chunk.
//! - [`ParallelDispatcher`] fans chunks out across scoped worker
//!   threads over disjoint output sub-slices; kernels are
//!   order-independent by contract, so the result is identical.
//!
//! [`KernelRegistry`] maps entry-point names to boxed kernels for
//! callers that dispatch by name (the C and Python boundaries).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod metrics;
pub mod parallel;
pub mod registry;
pub mod serial;
mod validate;

pub use metrics::DispatchMetrics;
pub use parallel::ParallelDispatcher;
pub use registry::KernelRegistry;
pub use serial::SerialDispatcher;
