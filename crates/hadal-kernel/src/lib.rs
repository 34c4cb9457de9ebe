//! Kernel trait and invocation context for the Hadal runtime.
//!
//! A [`Kernel`] is a data-parallel operator: it fills one output element
//! per grid index from the same index of its input vectors. Dispatchers
//! chunk the grid and call [`Kernel::apply`] once per chunk with a
//! [`KernelContext`] narrowed to that chunk.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod kernel;

pub use context::KernelContext;
pub use kernel::Kernel;
