//! PyBuffer: Python wrapper around the aligned-buffer FFI.
//!
//! All FFI calls release the GIL via `py.detach()` so other Python
//! threads can run while buffers are allocated, copied, or freed.

use numpy::{PyArray1, PyArrayMethods};
use pyo3::prelude::*;

use hadal_ffi::{
    hadal_buffer_alignment, hadal_buffer_alloc, hadal_buffer_fill, hadal_buffer_free,
    hadal_buffer_len, hadal_buffer_read, hadal_buffer_write,
};

use crate::error::check_status;

/// An aligned f64 buffer.
///
/// Wraps an FFI buffer handle. The backing memory starts on the
/// requested byte boundary and is zero-initialized. Freed explicitly
/// via `destroy()` / `with`-block exit, or when the object is
/// garbage-collected, whichever comes first; destruction is idempotent.
#[pyclass]
pub(crate) struct Buffer {
    handle: Option<u64>,
}

#[pymethods]
impl Buffer {
    /// Allocate a zeroed buffer of `len` elements on `alignment` bytes.
    #[new]
    #[pyo3(signature = (len, alignment=64))]
    fn new(py: Python<'_>, len: u64, alignment: u64) -> PyResult<Self> {
        let (status, handle) = py.detach(|| {
            let mut handle = 0u64;
            let status = hadal_buffer_alloc(len, alignment, &mut handle);
            (status, handle)
        });
        check_status(status)?;
        Ok(Buffer {
            handle: Some(handle),
        })
    }

    /// Copy a 1-D float64 numpy array into a fresh aligned buffer.
    #[staticmethod]
    #[pyo3(signature = (array, alignment=64))]
    fn from_numpy(
        py: Python<'_>,
        array: &Bound<'_, PyArray1<f64>>,
        alignment: u64,
    ) -> PyResult<Self> {
        let data: Vec<f64> = array.readonly().as_slice()?.to_vec();
        let (status, handle) = py.detach(move || {
            let mut handle = 0u64;
            let status = hadal_buffer_alloc(data.len() as u64, alignment, &mut handle);
            if status != 0 {
                return (status, 0);
            }
            if !data.is_empty() {
                let status = hadal_buffer_write(handle, data.as_ptr(), data.len() as u64);
                if status != 0 {
                    hadal_buffer_free(handle);
                    return (status, 0);
                }
            }
            (0, handle)
        });
        check_status(status)?;
        Ok(Buffer {
            handle: Some(handle),
        })
    }

    /// Copy the buffer out into a fresh numpy array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let h = self.require_handle()?;
        let (status, data) = py.detach(|| {
            let mut len = 0u64;
            let status = hadal_buffer_len(h, &mut len);
            if status != 0 {
                return (status, Vec::new());
            }
            let mut data = vec![0.0f64; len as usize];
            let status = if len == 0 {
                0
            } else {
                hadal_buffer_read(h, data.as_mut_ptr(), len)
            };
            (status, data)
        });
        check_status(status)?;
        Ok(PyArray1::from_vec(py, data))
    }

    /// Overwrite the buffer from a 1-D float64 numpy array of the same
    /// length.
    fn write(&self, py: Python<'_>, array: &Bound<'_, PyArray1<f64>>) -> PyResult<()> {
        let h = self.require_handle()?;
        let data: Vec<f64> = array.readonly().as_slice()?.to_vec();
        let status =
            py.detach(move || hadal_buffer_write(h, data.as_ptr(), data.len() as u64));
        check_status(status)
    }

    /// Set every element to `value`.
    fn fill(&self, py: Python<'_>, value: f64) -> PyResult<()> {
        let h = self.require_handle()?;
        let status = py.detach(|| hadal_buffer_fill(h, value));
        check_status(status)
    }

    /// Element count.
    fn __len__(&self, py: Python<'_>) -> PyResult<usize> {
        let h = self.require_handle()?;
        let (status, len) = py.detach(|| {
            let mut len = 0u64;
            let status = hadal_buffer_len(h, &mut len);
            (status, len)
        });
        check_status(status)?;
        Ok(len as usize)
    }

    /// The buffer's byte boundary.
    #[getter]
    fn alignment(&self, py: Python<'_>) -> PyResult<u64> {
        let h = self.require_handle()?;
        let (status, alignment) = py.detach(|| {
            let mut alignment = 0u64;
            let status = hadal_buffer_alignment(h, &mut alignment);
            (status, alignment)
        });
        check_status(status)?;
        Ok(alignment)
    }

    /// Explicitly free the buffer. Safe to call more than once.
    fn destroy(&mut self, py: Python<'_>) {
        self.do_destroy(py);
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    #[pyo3(signature = (_exc_type=None, _exc_val=None, _exc_tb=None))]
    fn __exit__(
        &mut self,
        py: Python<'_>,
        _exc_type: Option<&Bound<'_, PyAny>>,
        _exc_val: Option<&Bound<'_, PyAny>>,
        _exc_tb: Option<&Bound<'_, PyAny>>,
    ) {
        self.do_destroy(py);
    }
}

impl Buffer {
    pub(crate) fn from_handle(handle: u64) -> Self {
        Buffer {
            handle: Some(handle),
        }
    }

    pub(crate) fn require_handle(&self) -> PyResult<u64> {
        self.handle
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("Buffer already destroyed"))
    }

    fn do_destroy(&mut self, py: Python<'_>) {
        if let Some(h) = self.handle.take() {
            // Release GIL: hadal_buffer_free locks the buffer table.
            py.detach(|| {
                hadal_buffer_free(h);
            });
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            hadal_buffer_free(h);
        }
    }
}
