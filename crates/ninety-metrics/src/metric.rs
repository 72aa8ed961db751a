//! Metric descriptors.
//!
//! Each dashboard metric pairs a current-period field with its prior-period
//! counterpart on the *same* return record: revenue, expenses, and employee
//! count carry explicit `py_` twins, while assets and liabilities compare
//! end-of-year against beginning-of-year balances. The pairing lives in one
//! enumerated table so a field can never be matched with the wrong twin.

use crate::delta::Delta;
use crate::latest::latest;
use ninety_model::{Organization, RawValue, ReturnRecord, coerce};
use serde::{Deserialize, Serialize};

/// A financial metric shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Total revenue for the period.
    TotalRevenue,
    /// Total expenses for the period.
    TotalExpenses,
    /// Total assets (end of year vs. beginning of year).
    TotalAssets,
    /// Total liabilities (end of year vs. beginning of year).
    TotalLiabilities,
    /// Employee count.
    EmployeeCount,
}

/// How a metric's values should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    /// US-dollar amount.
    Currency,
    /// Plain count.
    Count,
}

impl Metric {
    /// All metrics, in dashboard column order.
    pub const ALL: [Self; 5] = [
        Self::TotalRevenue,
        Self::TotalExpenses,
        Self::TotalAssets,
        Self::TotalLiabilities,
        Self::EmployeeCount,
    ];

    /// Column/card title.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TotalRevenue => "Revenue",
            Self::TotalExpenses => "Expenses",
            Self::TotalAssets => "Assets",
            Self::TotalLiabilities => "Liabilities",
            Self::EmployeeCount => "Employees",
        }
    }

    /// Rendering unit.
    pub const fn unit(&self) -> MetricUnit {
        match self {
            Self::EmployeeCount => MetricUnit::Count,
            _ => MetricUnit::Currency,
        }
    }

    /// The current-period field on a return record.
    pub const fn current<'a>(&self, record: &'a ReturnRecord) -> Option<&'a RawValue> {
        match self {
            Self::TotalRevenue => record.total_revenue.as_ref(),
            Self::TotalExpenses => record.total_expenses.as_ref(),
            Self::TotalAssets => record.total_assets_eoy.as_ref(),
            Self::TotalLiabilities => record.total_liabilities_eoy.as_ref(),
            Self::EmployeeCount => record.employee_count.as_ref(),
        }
    }

    /// The prior-period counterpart on the same return record.
    pub const fn prior<'a>(&self, record: &'a ReturnRecord) -> Option<&'a RawValue> {
        match self {
            Self::TotalRevenue => record.py_total_revenue.as_ref(),
            Self::TotalExpenses => record.py_total_expenses.as_ref(),
            Self::TotalAssets => record.total_assets_boy.as_ref(),
            Self::TotalLiabilities => record.total_liabilities_boy.as_ref(),
            Self::EmployeeCount => record.py_employee_count.as_ref(),
        }
    }

    /// This metric's value from an organization's latest return.
    ///
    /// Unavailable when the organization has no filings, the latest return
    /// omits the field, or the field text is non-numeric.
    pub fn value(&self, org: &Organization) -> Option<f64> {
        coerce(latest(&org.returns).and_then(|record| self.current(record)))
    }

    /// Year-over-year delta for this metric on a single return record.
    pub fn delta(&self, record: &ReturnRecord) -> Delta {
        Delta::between(coerce(self.current(record)), coerce(self.prior(record)))
    }

    /// Year-over-year delta from an organization's latest return.
    pub fn latest_delta(&self, org: &Organization) -> Delta {
        latest(&org.returns).map_or(Delta::UNAVAILABLE, |record| self.delta(record))
    }
}
