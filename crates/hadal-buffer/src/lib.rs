//! Aligned `f64` buffer allocation for the Hadal runtime.
//!
//! Provides [`AlignedBuffer`], an owned contiguous `f64` region whose
//! base address is a multiple of a caller-supplied [`Alignment`], and
//! [`BufferPool`], a size-classed reuse pool. This crate is one of two
//! that may contain `unsafe` code (along with `hadal-ffi`); the unsafe
//! surface is confined to `aligned.rs`, where each block carries a
//! `SAFETY:` comment.
//!
//! # Ownership model
//!
//! An `AlignedBuffer` releases its memory when dropped. There is no
//! separate free call to forget and no handle to free twice: the
//! acquire/release pairing the underlying allocator requires is
//! enforced by scope.
//!
//! [`Alignment`]: hadal_core::Alignment

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod aligned;
pub mod error;
pub mod pool;

pub use aligned::AlignedBuffer;
pub use error::AllocError;
pub use pool::BufferPool;
