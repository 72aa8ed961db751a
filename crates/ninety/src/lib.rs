#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ninetylabs/ninety/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use ninety_metrics as metrics;
pub use ninety_model as model;
pub use ninety_output as output;

// Re-export the common pipeline surface
pub use ninety_metrics::{Delta, Metric, MetricUnit, SortState, latest, sort_by_metric};
pub use ninety_model::{Organization, RawValue, ReturnRecord, coerce};
pub use ninety_output::{DeltaDisplay, OrganizationRow};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
