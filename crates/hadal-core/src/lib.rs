//! Core types for the Hadal aligned-buffer and kernel-dispatch runtime.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Hadal workspace:
//! the validated [`Alignment`] type, the [`Grid1D`] dispatch grid, and
//! the error enums shared by the kernel and dispatch layers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;
pub mod grid;

pub use align::Alignment;
pub use error::{AlignmentError, DispatchError, KernelError};
pub use grid::{ChunkIter, Grid1D};
