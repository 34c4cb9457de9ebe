//! Validated byte-boundary alignment for buffer allocation.

use std::fmt;

use crate::error::AlignmentError;

/// A validated allocation alignment in bytes.
///
/// Construction enforces the constraints the platform allocator imposes:
/// the value must be a power of two, and must be at least
/// `align_of::<f64>()` (8 bytes) so an aligned region can hold `f64`
/// elements without padding tricks. Holding a value of this type is
/// proof the alignment is usable.
///
/// # Examples
///
/// ```
/// use hadal_core::Alignment;
///
/// let a = Alignment::new(64).unwrap();
/// assert_eq!(a.bytes(), 64);
/// assert!(a.is_aligned(128));
/// assert!(!a.is_aligned(100));
///
/// assert!(Alignment::new(0).is_err());
/// assert!(Alignment::new(48).is_err());
/// assert!(Alignment::new(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment(usize);

impl Alignment {
    /// Minimum accepted alignment: `align_of::<f64>()`.
    pub const MIN: Alignment = Alignment(std::mem::align_of::<f64>());

    /// Cache-line boundary on mainstream x86-64 and aarch64 parts.
    pub const CACHE_LINE: Alignment = Alignment(64);

    /// Conventional 4 KiB page boundary.
    pub const PAGE: Alignment = Alignment(4096);

    /// Create an alignment from a byte count.
    ///
    /// Returns `Err(AlignmentError::Zero)` for 0,
    /// `Err(AlignmentError::NotPowerOfTwo)` for non-powers-of-two, and
    /// `Err(AlignmentError::TooSmall)` for values below [`Alignment::MIN`].
    pub fn new(bytes: usize) -> Result<Self, AlignmentError> {
        if bytes == 0 {
            return Err(AlignmentError::Zero);
        }
        if !bytes.is_power_of_two() {
            return Err(AlignmentError::NotPowerOfTwo { bytes });
        }
        if bytes < Self::MIN.0 {
            return Err(AlignmentError::TooSmall { bytes });
        }
        Ok(Self(bytes))
    }

    /// The alignment in bytes.
    pub fn bytes(self) -> usize {
        self.0
    }

    /// Whether `addr` falls on this boundary.
    pub fn is_aligned(self, addr: usize) -> bool {
        addr.is_multiple_of(self.0)
    }
}

impl Default for Alignment {
    /// Defaults to [`Alignment::MIN`].
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_powers_of_two_from_min() {
        for shift in 3..20 {
            let bytes = 1usize << shift;
            let a = Alignment::new(bytes).unwrap();
            assert_eq!(a.bytes(), bytes);
        }
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(Alignment::new(0), Err(AlignmentError::Zero));
    }

    #[test]
    fn rejects_non_power_of_two() {
        for bytes in [12usize, 24, 48, 100, 1000] {
            assert_eq!(
                Alignment::new(bytes),
                Err(AlignmentError::NotPowerOfTwo { bytes })
            );
        }
    }

    #[test]
    fn rejects_below_f64_alignment() {
        for bytes in [1usize, 2, 4] {
            assert_eq!(Alignment::new(bytes), Err(AlignmentError::TooSmall { bytes }));
        }
    }

    #[test]
    fn constants_are_valid() {
        assert_eq!(Alignment::MIN.bytes(), 8);
        assert_eq!(Alignment::CACHE_LINE.bytes(), 64);
        assert_eq!(Alignment::PAGE.bytes(), 4096);
        assert_eq!(Alignment::default(), Alignment::MIN);
    }

    #[test]
    fn is_aligned_checks_modulo() {
        let a = Alignment::new(64).unwrap();
        assert!(a.is_aligned(0));
        assert!(a.is_aligned(64));
        assert!(a.is_aligned(4096));
        assert!(!a.is_aligned(8));
        assert!(!a.is_aligned(63));
    }

    #[test]
    fn display_formats_bytes() {
        assert_eq!(Alignment::CACHE_LINE.to_string(), "64B");
    }

    proptest! {
        #[test]
        fn every_accepted_alignment_is_power_of_two(shift in 3u32..30) {
            let bytes = 1usize << shift;
            let a = Alignment::new(bytes).unwrap();
            prop_assert!(a.bytes().is_power_of_two());
            prop_assert!(a.bytes() >= 8);
        }

        #[test]
        fn aligned_addresses_are_multiples(shift in 3u32..16, k in 0usize..1000) {
            let a = Alignment::new(1usize << shift).unwrap();
            prop_assert!(a.is_aligned(k * a.bytes()));
        }
    }
}
