#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod stats;
pub use stats::{mean, sample_covariance, sample_std, sample_variance};

mod correlation;
pub use correlation::{ZERO_VARIANCE_TOLERANCE, correlation_matrix, pearson};

mod annualize;
pub use annualize::{
    TRADING_DAYS_PER_YEAR, annualize_return, annualize_volatility, round_to,
};

mod returns;
pub use returns::pct_change;

mod error;
pub use error::MathError;
