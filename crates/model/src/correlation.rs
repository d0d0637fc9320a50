//! Pairwise correlation of portfolio returns.

use portstat_math::correlation_matrix;
use portstat_primitives::{CorrelationMatrix, ReturnsTable};
use tracing::warn;

use crate::ModelError;

/// Computes the Pearson correlation matrix of a returns table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationEngine;

impl CorrelationEngine {
    /// Create a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Correlate every pair of columns in `table`.
    ///
    /// Zero-variance columns carry NaN in their row and column.
    ///
    /// # Errors
    /// Returns `ModelError::Math` with fewer than two observations.
    pub fn correlate(&self, table: &ReturnsTable) -> Result<CorrelationMatrix, ModelError> {
        let values = correlation_matrix(table.values())?;
        let matrix = CorrelationMatrix::new(table.tickers().to_vec(), values);

        for i in matrix.degenerate() {
            warn!(ticker = %matrix.tickers()[i], "zero variance returns, correlation undefined");
        }

        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use portstat_primitives::{Date, Ticker};
    use proptest::prelude::*;

    use super::*;

    fn dates(n: usize) -> Vec<Date> {
        let start = Date::from_ymd_opt(2024, 1, 1).unwrap();
        start.iter_days().take(n).collect()
    }

    fn table(tickers: &[&str], values: Array2<f64>) -> ReturnsTable {
        let tickers = tickers.iter().map(|t| Ticker::new(*t)).collect();
        ReturnsTable::try_new(tickers, dates(values.nrows()), values).unwrap()
    }

    #[test]
    fn two_asset_scenario() {
        let t = table(&["A", "B"], array![[0.01, 0.02], [-0.01, 0.0], [0.02, 0.01]]);
        let corr = CorrelationEngine::new().correlate(&t).unwrap();

        assert_eq!(corr.get(0, 0), Some(1.0));
        assert_eq!(corr.get(1, 1), Some(1.0));
        let expected = (3.0_f64 / 7.0).sqrt();
        assert_relative_eq!(corr.by_ticker("A", "B").unwrap(), expected, epsilon = 1e-12);
        assert_eq!(corr.get(0, 1), corr.get(1, 0));
    }

    #[test]
    fn constant_column_is_degenerate() {
        let t = table(&["A", "FLAT"], array![[0.01, 0.0], [-0.01, 0.0], [0.02, 0.0]]);
        let corr = CorrelationEngine::new().correlate(&t).unwrap();

        assert_eq!(corr.degenerate(), vec![1]);
        assert_eq!(corr.get(0, 0), Some(1.0));
        assert!(corr.get(0, 1).unwrap().is_nan());
    }

    #[test]
    fn duplicate_tickers_correlate_perfectly() {
        let t = table(&["A", "A"], array![[0.01, 0.01], [-0.02, -0.02], [0.03, 0.03]]);
        let corr = CorrelationEngine::new().correlate(&t).unwrap();
        assert_relative_eq!(corr.get(0, 1).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_observation_errors() {
        let t = table(&["A", "B"], array![[0.01, 0.02]]);
        assert!(matches!(CorrelationEngine::new().correlate(&t), Err(ModelError::Math(_))));
    }

    proptest! {
        #[test]
        fn diagonal_is_one_and_matrix_is_symmetric(
            n_obs in 2_usize..40,
            n_assets in 1_usize..6,
            seed in prop::collection::vec(-0.1_f64..0.1, 240)
        ) {
            let values = Array2::from_shape_fn((n_obs, n_assets), |(i, j)| {
                seed[(i * n_assets + j) % seed.len()] + (i * (j + 1)) as f64 * 1e-3
            });
            let names: Vec<String> = (0..n_assets).map(|j| format!("T{j}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let corr = CorrelationEngine::new().correlate(&table(&refs, values)).unwrap();

            for a in 0..n_assets {
                let diag = corr.get(a, a).unwrap();
                prop_assert!(diag.is_nan() || diag == 1.0);
                for b in 0..n_assets {
                    let (ab, ba) = (corr.get(a, b).unwrap(), corr.get(b, a).unwrap());
                    prop_assert!(ab.to_bits() == ba.to_bits());
                    prop_assert!(ab.is_nan() || (-1.0..=1.0).contains(&ab));
                }
            }
        }
    }
}
