//! Python bindings for the Hadal aligned-buffer and kernel runtime.
//!
//! This crate provides PyO3 bindings wrapping the C FFI layer
//! (`hadal-ffi`). The native extension is named `_hadal` and is
//! imported by the pure-Python `hadal` package.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use pyo3::prelude::*;

mod buffer;
mod error;
mod kernels;

/// The native `_hadal` extension module.
#[pymodule]
fn _hadal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<buffer::Buffer>()?;

    // Functions
    m.add_function(wrap_pyfunction!(kernels::multiply, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::scale, m)?)?;
    m.add_function(wrap_pyfunction!(kernels::dispatch, m)?)?;

    Ok(())
}
