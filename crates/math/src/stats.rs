//! Sample statistics over return series.
//!
//! Variance, standard deviation and covariance use the sample (N-1)
//! denominator throughout.

use ndarray::ArrayView1;

use crate::MathError;

/// Arithmetic mean.
///
/// # Errors
/// Returns `MathError::EmptyData` for an empty series.
pub fn mean(x: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    x.mean().ok_or(MathError::EmptyData)
}

/// Sample variance with N-1 denominator.
///
/// # Errors
/// Returns `MathError::InsufficientData` with fewer than two observations.
pub fn sample_variance(x: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    let n = x.len();
    if n < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: n });
    }
    let m = mean(x)?;
    let ss: f64 = x.iter().map(|v| (v - m).powi(2)).sum();
    Ok(ss / (n - 1) as f64)
}

/// Sample standard deviation with N-1 denominator.
///
/// # Errors
/// Returns `MathError::InsufficientData` with fewer than two observations.
pub fn sample_std(x: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    sample_variance(x).map(f64::sqrt)
}

/// Sample covariance with N-1 denominator.
///
/// # Errors
/// Returns `MathError::DimensionMismatch` if the series differ in length and
/// `MathError::InsufficientData` with fewer than two observations.
pub fn sample_covariance(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    let n = x.len();
    if y.len() != n {
        return Err(MathError::DimensionMismatch { expected: n, actual: y.len() });
    }
    if n < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: n });
    }
    let mx = mean(x)?;
    let my = mean(y)?;
    let sp: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - mx) * (b - my)).sum();
    Ok(sp / (n - 1) as f64)
}
