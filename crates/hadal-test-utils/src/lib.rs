//! Test utilities for Hadal development.
//!
//! Deterministic vector fixtures (seeded ChaCha) and float-comparison
//! helpers shared by the kernel, dispatch, and bench crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_close, max_abs_diff, seeded_vec, seeded_vec_in};
