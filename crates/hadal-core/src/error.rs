//! Error types shared by the Hadal kernel and dispatch layers.
//!
//! Organized by subsystem: alignment validation, kernel execution, and
//! dispatch. Allocation errors live in `hadal-buffer`, next to the
//! allocator they describe.

use std::error::Error;
use std::fmt;

/// Rejected alignment values.
///
/// Returned by [`Alignment::new`](crate::Alignment::new). The constraints
/// match what platform aligned-allocation APIs require, plus a floor of
/// `align_of::<f64>()` so aligned regions can always hold `f64` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignmentError {
    /// Alignment of zero bytes.
    Zero,
    /// Alignment is not a power of two.
    NotPowerOfTwo {
        /// The rejected value.
        bytes: usize,
    },
    /// Alignment is below `align_of::<f64>()`.
    TooSmall {
        /// The rejected value.
        bytes: usize,
    },
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "alignment must be nonzero"),
            Self::NotPowerOfTwo { bytes } => {
                write!(f, "alignment {bytes} is not a power of two")
            }
            Self::TooSmall { bytes } => {
                write!(f, "alignment {bytes} is below align_of::<f64>() (8)")
            }
        }
    }
}

impl Error for AlignmentError {}

/// Errors from an individual kernel invocation.
///
/// Returned by `Kernel::apply()` and wrapped in
/// [`DispatchError::KernelFailed`] by the dispatchers. The reference
/// kernels never fail; this exists for user-defined kernels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// The kernel's apply function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for KernelError {}

/// Errors from dispatching a kernel over a grid.
///
/// Argument validation happens here, once, at the safe boundary: the
/// kernel itself never sees mismatched lengths or a wrong input count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// A kernel invocation returned an error.
    KernelFailed {
        /// Name of the failing kernel.
        name: String,
        /// The underlying kernel error.
        reason: KernelError,
    },
    /// The number of input vectors does not match the kernel's arity.
    InputArity {
        /// Arity declared by the kernel.
        expected: usize,
        /// Number of inputs supplied.
        actual: usize,
    },
    /// An input vector's length differs from the output length.
    LengthMismatch {
        /// Index of the offending input.
        input_index: usize,
        /// Length of the offending input.
        input_len: usize,
        /// Length of the output vector (the grid length).
        output_len: usize,
    },
    /// A non-finite value was produced with sentinel checking enabled.
    NonFinite {
        /// Index of the first non-finite output element.
        index: usize,
    },
    /// A worker thread panicked mid-dispatch.
    WorkerPanicked,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KernelFailed { name, reason } => {
                write!(f, "kernel '{name}' failed: {reason}")
            }
            Self::InputArity { expected, actual } => {
                write!(f, "kernel expects {expected} inputs, got {actual}")
            }
            Self::LengthMismatch {
                input_index,
                input_len,
                output_len,
            } => write!(
                f,
                "input {input_index} has length {input_len}, output has length {output_len}"
            ),
            Self::NonFinite { index } => {
                write!(f, "non-finite value in output at index {index}")
            }
            Self::WorkerPanicked => write!(f, "worker thread panicked"),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::KernelFailed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_error_messages() {
        assert_eq!(AlignmentError::Zero.to_string(), "alignment must be nonzero");
        assert_eq!(
            AlignmentError::NotPowerOfTwo { bytes: 48 }.to_string(),
            "alignment 48 is not a power of two"
        );
        assert_eq!(
            AlignmentError::TooSmall { bytes: 4 }.to_string(),
            "alignment 4 is below align_of::<f64>() (8)"
        );
    }

    #[test]
    fn dispatch_error_wraps_kernel_error() {
        let err = DispatchError::KernelFailed {
            name: "hadamard".into(),
            reason: KernelError::ExecutionFailed {
                reason: "boom".into(),
            },
        };
        assert_eq!(err.to_string(), "kernel 'hadamard' failed: execution failed: boom");
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_errors_have_no_source() {
        let err = DispatchError::InputArity {
            expected: 2,
            actual: 3,
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "kernel expects 2 inputs, got 3");
    }

    #[test]
    fn length_mismatch_message_names_the_input() {
        let err = DispatchError::LengthMismatch {
            input_index: 1,
            input_len: 3,
            output_len: 4,
        };
        assert_eq!(
            err.to_string(),
            "input 1 has length 3, output has length 4"
        );
    }
}
