//! Surplus/deficit badge for the detail view.

use crate::latest::latest;
use crate::metric::Metric;
use ninety_model::{Organization, coerce};

/// Financial position derived from the latest return.
///
/// Missing revenue or expenses default to zero for this comparison only.
/// The delta and sort pipeline never applies that default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitStatus {
    /// Revenue exceeded expenses.
    Profitable,
    /// Expenses exceeded revenue.
    Scaling,
    /// Revenue and expenses matched (or both were unreported).
    Neutral,
}

impl ProfitStatus {
    /// Badge label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Profitable => "profitable",
            Self::Scaling => "scaling",
            Self::Neutral => "neutral",
        }
    }

    /// Derive the status from an organization's latest return.
    ///
    /// `None` when the organization has no filings at all.
    pub fn for_organization(org: &Organization) -> Option<Self> {
        let record = latest(&org.returns)?;
        let revenue = coerce(Metric::TotalRevenue.current(record)).unwrap_or(0.0);
        let expenses = coerce(Metric::TotalExpenses.current(record)).unwrap_or(0.0);

        Some(if revenue > expenses {
            Self::Profitable
        } else if revenue < expenses {
            Self::Scaling
        } else {
            Self::Neutral
        })
    }
}
