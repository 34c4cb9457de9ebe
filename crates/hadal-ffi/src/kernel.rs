//! Kernel dispatch FFI: the named multiply entry point, scalar multiply,
//! and generic registry-driven dispatch.
//!
//! Input buffers are staged into temporary vectors under brief
//! per-buffer locks before the output buffer is locked. This keeps at
//! most one buffer lock held at a time, so passing the same handle as
//! both input and output is safe rather than a deadlock, and the kernel
//! always sees a consistent pre-dispatch view of its inputs.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::slice;
use std::sync::LazyLock;

use hadal_dispatch::{KernelRegistry, ParallelDispatcher, SerialDispatcher};
use hadal_kernel::Kernel;
use hadal_kernels::{Add, Hadamard, Scale, Sub};

use crate::buffer::get_buffer;
use crate::status::HadalStatus;

/// The parameterless reference kernels, dispatchable by name.
static REGISTRY: LazyLock<KernelRegistry> = LazyLock::new(|| {
    let mut registry = KernelRegistry::new();
    registry.register(Box::new(Hadamard));
    registry.register(Box::new(Add));
    registry.register(Box::new(Sub));
    registry
});

/// Stage every input buffer into an owned vector, then run the kernel
/// into the output buffer.
fn dispatch_handles(kernel: &dyn Kernel, inputs: &[u64], out: u64, workers: u32) -> i32 {
    let mut staged: Vec<Vec<f64>> = Vec::with_capacity(inputs.len());
    for &handle in inputs {
        let Some(arc) = get_buffer(handle) else {
            return HadalStatus::InvalidHandle as i32;
        };
        let buffer = ffi_lock!(arc);
        staged.push(buffer.to_vec());
    }

    let Some(out_arc) = get_buffer(out) else {
        return HadalStatus::InvalidHandle as i32;
    };
    let mut out_buffer = ffi_lock!(out_arc);

    let input_slices: Vec<&[f64]> = staged.iter().map(Vec::as_slice).collect();
    let result = if workers <= 1 {
        SerialDispatcher::new().dispatch(kernel, &input_slices, out_buffer.as_mut_slice())
    } else {
        ParallelDispatcher::new(workers as usize).dispatch(
            kernel,
            &input_slices,
            out_buffer.as_mut_slice(),
        )
    };

    match result {
        Ok(_) => HadalStatus::Ok as i32,
        Err(ref e) => HadalStatus::from(e) as i32,
    }
}

/// The elementwise multiply entry point: `out[i] = a[i] * b[i]`.
///
/// All three handles must refer to live buffers of equal length.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_multiply(a: u64, b: u64, out: u64) -> i32 {
    ffi_guard!({ dispatch_handles(&Hadamard, &[a, b], out, 1) })
}

/// Scalar multiply entry point: `out[i] = factor * input[i]`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_scale(input: u64, factor: f64, out: u64) -> i32 {
    ffi_guard!({ dispatch_handles(&Scale::new(factor), &[input], out, 1) })
}

/// Dispatch a registered kernel by name over `workers` threads.
///
/// `name` is a NUL-terminated UTF-8 string; `inputs` points to
/// `n_inputs` buffer handles. `workers <= 1` runs serially.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn hadal_dispatch(
    name: *const c_char,
    inputs: *const u64,
    n_inputs: usize,
    out: u64,
    workers: u32,
) -> i32 {
    ffi_guard!({
        if name.is_null() || (inputs.is_null() && n_inputs > 0) {
            return HadalStatus::InvalidArgument as i32;
        }
        // SAFETY: name was null-checked; caller guarantees it is
        // NUL-terminated.
        let name = match unsafe { CStr::from_ptr(name) }.to_str() {
            Ok(s) => s,
            Err(_) => return HadalStatus::InvalidArgument as i32,
        };
        let Some(kernel) = REGISTRY.get(name) else {
            return HadalStatus::UnknownKernel as i32;
        };
        let handles: &[u64] = if n_inputs == 0 {
            &[]
        } else {
            // SAFETY: inputs was null-checked; caller guarantees it is
            // valid for n_inputs u64 reads.
            unsafe { slice::from_raw_parts(inputs, n_inputs) }
        };
        dispatch_handles(kernel, handles, out, workers)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{hadal_buffer_alloc, hadal_buffer_free, hadal_buffer_read, hadal_buffer_write};
    use std::ffi::CString;

    fn buffer_from(data: &[f64]) -> u64 {
        let mut handle = 0u64;
        assert_eq!(
            hadal_buffer_alloc(data.len() as u64, 64, &mut handle),
            HadalStatus::Ok as i32
        );
        if !data.is_empty() {
            assert_eq!(
                hadal_buffer_write(handle, data.as_ptr(), data.len() as u64),
                HadalStatus::Ok as i32
            );
        }
        handle
    }

    fn read_out(handle: u64, len: usize) -> Vec<f64> {
        let mut out = vec![0.0; len];
        assert_eq!(
            hadal_buffer_read(handle, out.as_mut_ptr(), len as u64),
            HadalStatus::Ok as i32
        );
        out
    }

    #[test]
    fn multiply_worked_example() {
        let a = buffer_from(&[1.0, 2.0, 3.0]);
        let b = buffer_from(&[4.0, 5.0, 6.0]);
        let out = buffer_from(&[0.0, 0.0, 0.0]);

        assert_eq!(hadal_multiply(a, b, out), HadalStatus::Ok as i32);
        assert_eq!(read_out(out, 3), vec![4.0, 10.0, 18.0]);

        for h in [a, b, out] {
            hadal_buffer_free(h);
        }
    }

    #[test]
    fn multiply_in_place_aliases_safely() {
        let a = buffer_from(&[2.0, 3.0]);
        let b = buffer_from(&[10.0, 10.0]);

        // Output aliases input a: staged inputs make this well-defined.
        assert_eq!(hadal_multiply(a, b, a), HadalStatus::Ok as i32);
        assert_eq!(read_out(a, 2), vec![20.0, 30.0]);

        hadal_buffer_free(a);
        hadal_buffer_free(b);
    }

    #[test]
    fn scale_through_handles() {
        let input = buffer_from(&[1.0, -2.0]);
        let out = buffer_from(&[0.0, 0.0]);
        assert_eq!(hadal_scale(input, 2.5, out), HadalStatus::Ok as i32);
        assert_eq!(read_out(out, 2), vec![2.5, -5.0]);
        hadal_buffer_free(input);
        hadal_buffer_free(out);
    }

    #[test]
    fn dispatch_by_name_parallel() {
        let n = 1000;
        let a_data: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let b_data = vec![3.0; n];
        let a = buffer_from(&a_data);
        let b = buffer_from(&b_data);
        let out = buffer_from(&vec![0.0; n]);

        let name = CString::new("add").unwrap();
        let handles = [a, b];
        assert_eq!(
            hadal_dispatch(name.as_ptr(), handles.as_ptr(), 2, out, 4),
            HadalStatus::Ok as i32
        );
        let result = read_out(out, n);
        assert_eq!(result[0], 3.0);
        assert_eq!(result[999], 1002.0);

        for h in [a, b, out] {
            hadal_buffer_free(h);
        }
    }

    #[test]
    fn unknown_kernel_name_is_rejected() {
        let out = buffer_from(&[0.0]);
        let name = CString::new("fft").unwrap();
        assert_eq!(
            hadal_dispatch(name.as_ptr(), std::ptr::null(), 0, out, 1),
            HadalStatus::UnknownKernel as i32
        );
        hadal_buffer_free(out);
    }

    #[test]
    fn null_name_is_rejected() {
        assert_eq!(
            hadal_dispatch(std::ptr::null(), std::ptr::null(), 0, 0, 1),
            HadalStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn stale_input_handle_is_rejected() {
        let a = buffer_from(&[1.0]);
        let b = buffer_from(&[1.0]);
        let out = buffer_from(&[0.0]);
        hadal_buffer_free(a);
        assert_eq!(hadal_multiply(a, b, out), HadalStatus::InvalidHandle as i32);
        hadal_buffer_free(b);
        hadal_buffer_free(out);
    }

    #[test]
    fn length_mismatch_surfaces_as_status() {
        let a = buffer_from(&[1.0, 2.0]);
        let b = buffer_from(&[1.0, 2.0]);
        let out = buffer_from(&[0.0; 3]);
        assert_eq!(hadal_multiply(a, b, out), HadalStatus::LengthMismatch as i32);
        for h in [a, b, out] {
            hadal_buffer_free(h);
        }
    }

    #[test]
    fn arity_mismatch_surfaces_as_status() {
        let a = buffer_from(&[1.0]);
        let out = buffer_from(&[0.0]);
        let name = CString::new("hadamard").unwrap();
        let handles = [a];
        assert_eq!(
            hadal_dispatch(name.as_ptr(), handles.as_ptr(), 1, out, 1),
            HadalStatus::InputArity as i32
        );
        hadal_buffer_free(a);
        hadal_buffer_free(out);
    }

    #[test]
    fn zero_length_multiply_succeeds() {
        let a = buffer_from(&[]);
        let b = buffer_from(&[]);
        let out = buffer_from(&[]);
        assert_eq!(hadal_multiply(a, b, out), HadalStatus::Ok as i32);
        for h in [a, b, out] {
            hadal_buffer_free(h);
        }
    }
}
