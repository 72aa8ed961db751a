#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ninetylabs/ninety/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod report;

pub use export::{ExportError, ExportFormat, export_table, export_table_to_path};
pub use format::{NOT_AVAILABLE, format_count, format_currency, format_date, format_number};
pub use report::{DeltaDisplay, Direction, OrganizationRow};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
