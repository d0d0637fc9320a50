#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod align;
pub use align::DateRangeAligner;

mod returns;
pub use returns::ReturnsComputer;

mod correlation;
pub use correlation::CorrelationEngine;

mod metrics;
pub use metrics::PortfolioMetricsEngine;

mod request;
pub use request::PortfolioRequest;

mod analyzer;
pub use analyzer::{AnalyzerConfig, PortfolioAnalyzer};

mod report;
pub use report::PortfolioReport;

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use portstat_traits::PriceSource;

    pub use super::{
        AnalyzerConfig, ModelError, PortfolioAnalyzer, PortfolioReport, PortfolioRequest,
    };
}
