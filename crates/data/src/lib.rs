#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::SourceConfig;

mod retry;
pub use retry::{Backoff, RetryConfig, retry_fetch};

mod yahoo;
pub use yahoo::YahooPriceSource;

mod cache;
pub use cache::CachedPriceSource;

mod memory;
pub use memory::InMemoryPriceSource;
