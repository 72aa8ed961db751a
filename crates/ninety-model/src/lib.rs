#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ninetylabs/ninety/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod date;
pub mod error;
pub mod organization;
pub mod value;

pub use error::{DataError, Result};
pub use organization::{Organization, ReturnRecord};
pub use value::{RawValue, coerce};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
