//! Pearson correlation.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::{MathError, sample_covariance, sample_std};

/// Standard deviations at or below this value are treated as zero variance.
///
/// A constant series carries rounding noise far below this level, while any
/// real daily return series sits many orders of magnitude above it.
pub const ZERO_VARIANCE_TOLERANCE: f64 = 1e-14;

/// Pearson correlation of two series using sample moments.
///
/// Returns NaN when either series has zero variance.
///
/// # Errors
/// Returns `MathError` if the series differ in length or have fewer than two
/// observations.
pub fn pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64, MathError> {
    let cov = sample_covariance(x, y)?;
    let sx = sample_std(x)?;
    let sy = sample_std(y)?;
    if sx <= ZERO_VARIANCE_TOLERANCE || sy <= ZERO_VARIANCE_TOLERANCE {
        return Ok(f64::NAN);
    }
    Ok((cov / (sx * sy)).clamp(-1.0, 1.0))
}

/// Pairwise Pearson correlation of the columns of `values` (n_obs x n_assets).
///
/// The upper triangle is computed and mirrored, so the result is exactly
/// symmetric. The diagonal is exactly 1.0 for columns with variance and NaN
/// otherwise; every off-diagonal entry touching a zero-variance column is
/// NaN.
///
/// # Errors
/// Returns `MathError::InsufficientData` with fewer than two rows.
pub fn correlation_matrix(values: &Array2<f64>) -> Result<Array2<f64>, MathError> {
    let n_obs = values.nrows();
    let k = values.ncols();
    if n_obs < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: n_obs });
    }

    let means: Array1<f64> = values.mean_axis(Axis(0)).ok_or(MathError::EmptyData)?;
    let centered = values - &means;
    let ddof = (n_obs - 1) as f64;

    let stds: Vec<f64> = centered
        .columns()
        .into_iter()
        .map(|c| (c.dot(&c) / ddof).sqrt())
        .collect();
    let degenerate: Vec<bool> = stds.iter().map(|s| *s <= ZERO_VARIANCE_TOLERANCE).collect();

    let mut corr = Array2::from_elem((k, k), f64::NAN);
    for i in 0..k {
        if degenerate[i] {
            continue;
        }
        corr[[i, i]] = 1.0;
        for j in (i + 1)..k {
            if degenerate[j] {
                continue;
            }
            let cov = centered.column(i).dot(&centered.column(j)) / ddof;
            let r = (cov / (stds[i] * stds[j])).clamp(-1.0, 1.0);
            corr[[i, j]] = r;
            corr[[j, i]] = r;
        }
    }

    Ok(corr)
}
