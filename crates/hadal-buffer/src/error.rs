//! Allocation error type.

use std::error::Error;
use std::fmt;

/// Errors from aligned buffer allocation.
///
/// Invalid alignment values are rejected earlier, at
/// [`Alignment`](hadal_core::Alignment) construction; by the time an
/// allocation is attempted the only remaining failure modes are size
/// overflow and allocator exhaustion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// `elems * size_of::<f64>()` overflows the layout size limit.
    SizeOverflow {
        /// The requested element count.
        elems: usize,
    },
    /// The global allocator could not satisfy the request.
    OutOfMemory {
        /// The requested size in bytes.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOverflow { elems } => {
                write!(f, "allocation of {elems} f64 elements overflows layout size")
            }
            Self::OutOfMemory { bytes } => {
                write!(f, "allocator could not provide {bytes} bytes")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            AllocError::SizeOverflow { elems: 7 }.to_string(),
            "allocation of 7 f64 elements overflows layout size"
        );
        assert_eq!(
            AllocError::OutOfMemory { bytes: 1024 }.to_string(),
            "allocator could not provide 1024 bytes"
        );
    }
}
