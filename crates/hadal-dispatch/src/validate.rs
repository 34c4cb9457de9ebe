//! Argument validation shared by the dispatchers.
//!
//! The kernel contract pushes all length and arity checking to the
//! dispatch boundary; a kernel never sees mismatched slices.

use hadal_core::DispatchError;
use hadal_kernel::Kernel;

/// Check input count against the kernel's arity and every input length
/// against the output length.
pub(crate) fn validate(
    kernel: &dyn Kernel,
    inputs: &[&[f64]],
    output: &[f64],
) -> Result<(), DispatchError> {
    let expected = kernel.arity();
    if inputs.len() != expected {
        return Err(DispatchError::InputArity {
            expected,
            actual: inputs.len(),
        });
    }
    for (input_index, input) in inputs.iter().enumerate() {
        if input.len() != output.len() {
            return Err(DispatchError::LengthMismatch {
                input_index,
                input_len: input.len(),
                output_len: output.len(),
            });
        }
    }
    Ok(())
}

/// Scan a finished output for the first non-finite element.
pub(crate) fn check_finite(output: &[f64]) -> Result<(), DispatchError> {
    match output.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DispatchError::NonFinite { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hadal_core::KernelError;
    use hadal_kernel::KernelContext;

    struct TwoInput;

    impl Kernel for TwoInput {
        fn name(&self) -> &str {
            "two_input"
        }
        fn arity(&self) -> usize {
            2
        }
        fn apply(&self, _ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
            Ok(())
        }
    }

    #[test]
    fn accepts_matching_arguments() {
        let a = [0.0; 4];
        let b = [0.0; 4];
        let out = [0.0; 4];
        assert!(validate(&TwoInput, &[&a, &b], &out).is_ok());
    }

    #[test]
    fn rejects_wrong_arity() {
        let a = [0.0; 4];
        let out = [0.0; 4];
        assert_eq!(
            validate(&TwoInput, &[&a], &out),
            Err(DispatchError::InputArity {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn rejects_length_mismatch_and_names_the_input() {
        let a = [0.0; 4];
        let b = [0.0; 3];
        let out = [0.0; 4];
        assert_eq!(
            validate(&TwoInput, &[&a, &b], &out),
            Err(DispatchError::LengthMismatch {
                input_index: 1,
                input_len: 3,
                output_len: 4
            })
        );
    }

    #[test]
    fn finite_check_finds_first_offender() {
        assert!(check_finite(&[1.0, 2.0]).is_ok());
        assert_eq!(
            check_finite(&[1.0, f64::NAN, f64::INFINITY]),
            Err(DispatchError::NonFinite { index: 1 })
        );
        assert_eq!(
            check_finite(&[f64::NEG_INFINITY]),
            Err(DispatchError::NonFinite { index: 0 })
        );
    }
}
