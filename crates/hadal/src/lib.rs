//! Hadal: aligned `f64` buffers and data-parallel elementwise kernel
//! dispatch.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Hadal sub-crates. For most users, adding `hadal` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hadal::prelude::*;
//!
//! // Aligned buffers: allocation on a chosen byte boundary, released
//! // automatically on drop.
//! let a = AlignedBuffer::from_slice(&[1.0, 2.0, 3.0], Alignment::CACHE_LINE).unwrap();
//! let b = AlignedBuffer::from_slice(&[4.0, 5.0, 6.0], Alignment::CACHE_LINE).unwrap();
//! let mut out = AlignedBuffer::new(3, Alignment::CACHE_LINE).unwrap();
//! assert!(Alignment::CACHE_LINE.is_aligned(out.as_ptr() as usize));
//!
//! // Dispatch the Hadamard kernel over the grid [0, 3).
//! SerialDispatcher::new()
//!     .dispatch(&Hadamard, &[a.as_slice(), b.as_slice()], out.as_mut_slice())
//!     .unwrap();
//! assert_eq!(out.as_slice(), &[4.0, 10.0, 18.0]);
//!
//! // The same kernel fanned out across worker threads gives a
//! // bit-identical result — kernels are order-independent by contract.
//! let mut parallel_out = AlignedBuffer::new(3, Alignment::CACHE_LINE).unwrap();
//! ParallelDispatcher::new(2)
//!     .dispatch(&Hadamard, &[a.as_slice(), b.as_slice()], parallel_out.as_mut_slice())
//!     .unwrap();
//! assert_eq!(parallel_out.as_slice(), out.as_slice());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hadal-core` | `Alignment`, `Grid1D`, error enums |
//! | [`buffer`] | `hadal-buffer` | `AlignedBuffer`, `BufferPool` |
//! | [`kernel`] | `hadal-kernel` | The `Kernel` trait and `KernelContext` |
//! | [`kernels`] | `hadal-kernels` | Reference kernels (hadamard, add, sub, scale, affine) |
//! | [`dispatch`] | `hadal-dispatch` | Dispatchers and the `KernelRegistry` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`hadal-core`).
///
/// Contains the validated [`types::Alignment`], the [`types::Grid1D`]
/// dispatch grid, and the shared error enums.
pub use hadal_core as types;

/// Aligned buffer allocation (`hadal-buffer`).
///
/// Most users only need [`buffer::AlignedBuffer`] from this module —
/// it is also available in the [`prelude`].
pub use hadal_buffer as buffer;

/// The kernel trait and invocation context (`hadal-kernel`).
///
/// The [`kernel::Kernel`] trait is the main extension point for
/// user-defined elementwise operators.
pub use hadal_kernel as kernel;

/// Reference kernel implementations (`hadal-kernels`).
///
/// Includes [`kernels::Hadamard`], [`kernels::Add`], [`kernels::Sub`],
/// [`kernels::Scale`], and [`kernels::AffineMap`].
pub use hadal_kernels as kernels;

/// Dispatchers and the kernel registry (`hadal-dispatch`).
///
/// [`dispatch::SerialDispatcher`] for single-threaded runs,
/// [`dispatch::ParallelDispatcher`] for worker-pool fan-out.
pub use hadal_dispatch as dispatch;

/// Common imports for typical Hadal usage.
///
/// ```rust
/// use hadal::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hadal_core::{Alignment, Grid1D};

    // Errors
    pub use hadal_core::{AlignmentError, DispatchError, KernelError};

    // Buffers
    pub use hadal_buffer::{AlignedBuffer, AllocError, BufferPool};

    // Kernel trait
    pub use hadal_kernel::{Kernel, KernelContext};

    // Reference kernels
    pub use hadal_kernels::{Add, AffineMap, Hadamard, Scale, Sub};

    // Dispatch
    pub use hadal_dispatch::{
        DispatchMetrics, KernelRegistry, ParallelDispatcher, SerialDispatcher,
    };
}
