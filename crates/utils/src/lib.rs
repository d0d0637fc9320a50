#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/portstat/portstat-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod frame;
pub use frame::{DATE_COL, date_from_key, date_key, extract_dates, extract_f64, price_frame};

mod window;
pub use window::window_filter;

mod join;
pub use join::inner_join_on_date;

mod error;
pub use error::UtilsError;
