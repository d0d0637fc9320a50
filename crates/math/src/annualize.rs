//! Annualization of daily statistics.

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Scale a mean daily return to a yearly figure.
///
/// Returns are assumed i.i.d., so the mean scales linearly with time.
#[must_use]
pub fn annualize_return(mean_daily: f64) -> f64 {
    mean_daily * TRADING_DAYS_PER_YEAR
}

/// Scale a daily standard deviation to a yearly figure.
///
/// Variance scales linearly with time, so volatility scales with its root.
#[must_use]
pub fn annualize_volatility(std_daily: f64) -> f64 {
    std_daily * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Round to `decimals` decimal places, ties to even.
#[must_use]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (x * factor).round_ties_even() / factor
}
