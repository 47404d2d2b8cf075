//! Seeded synthetic instances.
//!
//! Stand-ins for real price data when benchmarking or testing: every
//! off-diagonal cost is drawn independently, so the matrices are asymmetric
//! with probability one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cost::CostMatrix;
use crate::error::{Result, SolverError};

/// Generates an `n`×`n` matrix with off-diagonal costs drawn uniformly from
/// `min..=max` and a zero diagonal.
///
/// The same `seed` always yields the same matrix.
///
/// # Errors
///
/// [`SolverError::InvalidCostRange`] if `min > max` or the range is not
/// finite.
///
/// # Examples
///
/// ```
/// use u_atsp::instance::random_asymmetric;
///
/// let a = random_asymmetric(4, 10.0, 100.0, 7)?;
/// let b = random_asymmetric(4, 10.0, 100.0, 7)?;
/// assert_eq!(a, b);
/// assert_eq!(a.get(2, 2), 0.0);
/// # Ok::<(), u_atsp::SolverError>(())
/// ```
pub fn random_asymmetric(n: usize, min: f64, max: f64, seed: u64) -> Result<CostMatrix> {
    if !(min <= max && (max - min).is_finite()) {
        return Err(SolverError::InvalidCostRange { min, max });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cm = CostMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if i != j {
                cm.set(i, j, rng.random_range(min..=max));
            }
        }
    }
    Ok(cm)
}

/// Returns placeholder labels `"L0"`, `"L1"`, … for `n` locations.
pub fn default_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("L{i}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible() {
        assert_eq!(
            random_asymmetric(5, 1.0, 50.0, 42).unwrap(),
            random_asymmetric(5, 1.0, 50.0, 42).unwrap()
        );
        assert_ne!(
            random_asymmetric(5, 1.0, 50.0, 42).unwrap(),
            random_asymmetric(5, 1.0, 50.0, 43).unwrap()
        );
    }

    #[test]
    fn test_bounds_and_diagonal() {
        let cm = random_asymmetric(6, 5.0, 9.0, 1).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                let c = cm.get(i, j);
                if i == j {
                    assert_eq!(c, 0.0);
                } else {
                    assert!((5.0..=9.0).contains(&c));
                }
            }
        }
    }

    #[test]
    fn test_asymmetric() {
        let cm = random_asymmetric(6, 0.0, 1000.0, 3).unwrap();
        assert!(cm.symmetric_pairs().is_empty());
    }

    #[test]
    fn test_invalid_range() {
        for (min, max) in [
            (10.0, 1.0),
            (f64::NAN, 1.0),
            (0.0, f64::INFINITY),
            (-f64::MAX, f64::MAX),
        ] {
            let err = random_asymmetric(3, min, max, 0).unwrap_err();
            assert!(matches!(err, SolverError::InvalidCostRange { .. }));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let cm = random_asymmetric(3, 4.0, 4.0, 0).unwrap();
        assert_eq!(cm.get(0, 1), 4.0);
        assert_eq!(cm.get(2, 1), 4.0);
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(default_labels(3), vec!["L0", "L1", "L2"]);
        assert!(default_labels(0).is_empty());
    }
}
