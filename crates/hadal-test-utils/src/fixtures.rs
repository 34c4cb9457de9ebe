//! Deterministic data generation and comparison helpers.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Generate `len` values in `[-1, 1)` from a seeded ChaCha stream.
///
/// Same seed, same vector — fixtures stay stable across runs and
/// platforms.
pub fn seeded_vec(seed: u64, len: usize) -> Vec<f64> {
    seeded_vec_in(seed, len, -1.0..1.0)
}

/// Generate `len` values in `range` from a seeded ChaCha stream.
pub fn seeded_vec_in(seed: u64, len: usize, range: Range<f64>) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// Largest elementwise absolute difference between two equal-length
/// slices.
///
/// # Panics
/// Panics if the lengths differ.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Assert two slices are elementwise equal within `tol`.
///
/// # Panics
/// Panics with the offending index on the first violation.
pub fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "index {i}: {x} vs {y} differs by more than {tol}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_vec_is_deterministic() {
        assert_eq!(seeded_vec(42, 100), seeded_vec(42, 100));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(seeded_vec(1, 32), seeded_vec(2, 32));
    }

    #[test]
    fn values_stay_in_range() {
        let v = seeded_vec_in(7, 1000, 3.0..5.0);
        assert!(v.iter().all(|&x| (3.0..5.0).contains(&x)));
    }

    #[test]
    fn max_abs_diff_finds_worst_pair() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.5, 3.1];
        assert_eq!(max_abs_diff(&a, &b), 0.5);
    }

    #[test]
    fn assert_close_accepts_within_tolerance() {
        assert_close(&[1.0, 2.0], &[1.0 + 1e-12, 2.0 - 1e-12], 1e-9);
    }

    #[test]
    #[should_panic(expected = "index 1")]
    fn assert_close_names_the_index() {
        assert_close(&[1.0, 2.0], &[1.0, 3.0], 1e-9);
    }
}
