//! Temporal correlation between equal-length activity vectors.

use crate::error::{ClusterError, ClusterResult};

/// Arithmetic mean of a vector.
#[inline]
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by n, not n-1).
#[inline]
pub(crate) fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Temporal correlation between two equal-length vectors.
///
/// Each element is standardized by its vector's mean and population
/// standard deviation; the standardized elementwise products are then
/// averaged. Higher means more similar; a vector correlates 1.0 with
/// itself.
///
/// # Errors
///
/// - [`ClusterError::LengthMismatch`] if the vectors differ in length
/// - [`ClusterError::DegenerateVector`] if either vector is constant
///   (or empty), since standardization would divide by zero
pub fn temporal_correlation(a: &[f64], b: &[f64]) -> ClusterResult<f64> {
    if a.len() != b.len() {
        return Err(ClusterError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(ClusterError::DegenerateVector);
    }

    let (mean_a, std_a) = (mean(a), population_std(a));
    let (mean_b, std_b) = (mean(b), population_std(b));
    if std_a == 0.0 || std_b == 0.0 {
        return Err(ClusterError::DegenerateVector);
    }

    let n = a.len() as f64;
    let summation: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| ((p - mean_a) / std_a) * ((q - mean_b) / std_b))
        .sum();

    Ok(summation / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_correlation_is_one() {
        let v = vec![1.0, 2.0, 3.0, 5.0, 8.0];
        let corr = temporal_correlation(&v, &v).unwrap();
        assert!((corr - 1.0).abs() < 1e-9, "got {}", corr);
    }

    #[test]
    fn reversed_ramp_is_anti_correlated() {
        let up = vec![1.0, 2.0, 3.0];
        let down = vec![9.0, 8.0, 7.0];
        let corr = temporal_correlation(&up, &down).unwrap();
        assert!((corr + 1.0).abs() < 1e-9, "got {}", corr);
    }

    #[test]
    fn scale_invariant() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b: Vec<f64> = a.iter().map(|v| v * 10.0 + 100.0).collect();
        let corr = temporal_correlation(&a, &b).unwrap();
        assert!((corr - 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_vector_fails() {
        let flat = vec![5.0; 4];
        let v = vec![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            temporal_correlation(&flat, &v),
            Err(ClusterError::DegenerateVector)
        ));
        assert!(matches!(
            temporal_correlation(&v, &flat),
            Err(ClusterError::DegenerateVector)
        ));
    }

    #[test]
    fn length_mismatch_fails() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0];
        let err = temporal_correlation(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            ClusterError::LengthMismatch { left: 3, right: 2 }
        ));
    }

    #[test]
    fn population_std_divides_by_n() {
        // variance of [1, 2, 3] about mean 2 is 2/3 with the population
        // estimator (the sample estimator would give 1)
        let std = population_std(&[1.0, 2.0, 3.0]);
        assert!((std - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
