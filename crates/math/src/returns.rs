//! Return expressions.

use polars::prelude::*;

/// Daily simple return of a price column: `p[t] / p[t-1] - 1`.
///
/// The first row has no prior observation and evaluates to null.
///
/// # Arguments
/// * `target_col` - Price column, sorted ascending by date
///
/// # Returns
/// Polars expression for the returns.
pub fn pct_change(target_col: &str) -> Expr {
    col(target_col) / col(target_col).shift(lit(1)) - lit(1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pct_change_basic() {
        let df = df! {
            "price" => &[100.0, 101.0, 99.99, 102.0],
        }
        .unwrap();

        let result =
            df.lazy().select([pct_change("price").alias("ret")]).collect().unwrap();
        let returns: Vec<Option<f64>> =
            result.column("ret").unwrap().f64().unwrap().into_iter().collect();

        assert_eq!(returns.len(), 4);
        assert_eq!(returns[0], None);
        assert_relative_eq!(returns[1].unwrap(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(returns[2].unwrap(), -0.01, epsilon = 1e-12);
        assert_relative_eq!(returns[3].unwrap(), 102.0 / 99.99 - 1.0, epsilon = 1e-12);
    }
}
