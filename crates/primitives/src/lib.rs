#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod ticker;
pub use ticker::Ticker;

mod series;
pub use series::{AlignedDateRange, EndBoundary, PricePoint, PriceSeries};

mod returns;
pub use returns::{ReturnsTable, TableError};

mod weights;
pub use weights::WeightVector;

mod correlation;
pub use correlation::CorrelationMatrix;

mod metrics;
pub use metrics::PortfolioMetrics;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
