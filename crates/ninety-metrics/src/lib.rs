#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ninetylabs/ninety/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod delta;
pub mod latest;
pub mod metric;
pub mod sort;
pub mod status;

pub use delta::Delta;
pub use latest::latest;
pub use metric::{Metric, MetricUnit};
pub use sort::{SortState, compare, compare_directed, compare_values, sort_by_metric};
pub use status::ProfitStatus;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
