//! # portstat
//!
//! Correlation and annualized risk/return statistics for fixed-weight
//! portfolios of daily-priced assets.
//!
//! This crate provides a unified interface to the portstat components.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: The price source abstraction
//! - `math`: Sample statistics, correlation and annualization
//! - `utils`: Frame utilities
//! - `data`: Price sources
//! - `model`: The analysis pipeline
//! - `cli`: TOML settings loader and the `analyze` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use portstat::data::YahooPriceSource;
//! use portstat::model::{PortfolioAnalyzer, PortfolioRequest};
//!
//! let request = PortfolioRequest::parse("AAPL,MSFT", "0.5,0.5")?;
//! let report = PortfolioAnalyzer::new(YahooPriceSource::new()?).analyze(&request).await?;
//! println!("{report}");
//! ```

#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use portstat_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use portstat_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use portstat_math as math;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use portstat_utils as utils;
#[cfg(feature = "data")]
#[doc(inline)]
pub use portstat_data as data;
#[cfg(feature = "model")]
#[doc(inline)]
pub use portstat_model as model;

#[cfg(feature = "cli")]
mod settings;
#[cfg(feature = "cli")]
pub use settings::{Settings, SettingsError};
