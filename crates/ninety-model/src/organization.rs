//! Organizations and their tax-return records.
//!
//! Field names follow the API payloads: `py_` marks the previous year's
//! value reported on the *same* return, `eoy`/`boy` mark end-of-year and
//! beginning-of-year balances. The wire format is camelCase.

use crate::date::parse_calendar_date;
use crate::value::RawValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tax-period filing for an organization.
///
/// `filed_on` is always present and is the key the latest-filing selector
/// orders by. Every financial field may be legitimately absent when the
/// filer did not report that line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    /// Date the return was filed, as an ISO date string.
    pub filed_on: String,
    /// Start of the tax period covered by this return.
    pub tax_period_start_date: String,
    /// End of the tax period covered by this return.
    pub tax_period_end_date: String,

    /// Employee count for the period.
    #[serde(default)]
    pub employee_count: Option<RawValue>,
    /// Previous year's employee count, as reported on this return.
    #[serde(default)]
    pub py_employee_count: Option<RawValue>,

    /// Total revenue, decimal as text.
    #[serde(default)]
    pub total_revenue: Option<RawValue>,
    /// Previous year's total revenue.
    #[serde(default)]
    pub py_total_revenue: Option<RawValue>,

    /// Total expenses, decimal as text.
    #[serde(default)]
    pub total_expenses: Option<RawValue>,
    /// Previous year's total expenses.
    #[serde(default)]
    pub py_total_expenses: Option<RawValue>,

    /// Total assets at end of year.
    #[serde(default)]
    pub total_assets_eoy: Option<RawValue>,
    /// Total assets at beginning of year.
    #[serde(default)]
    pub total_assets_boy: Option<RawValue>,

    /// Total liabilities at end of year.
    #[serde(default)]
    pub total_liabilities_eoy: Option<RawValue>,
    /// Total liabilities at beginning of year.
    #[serde(default)]
    pub total_liabilities_boy: Option<RawValue>,

    /// Record creation timestamp, supplier metadata.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Record update timestamp, supplier metadata.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ReturnRecord {
    /// The filing date parsed as a calendar date, `None` if unparseable.
    pub fn filed_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.filed_on)
    }
}

/// A nonprofit organization with its filing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier (UUID as a string).
    pub id: String,
    /// Legal name.
    pub name: String,
    /// Public website.
    #[serde(default)]
    pub website_url: Option<String>,
    /// Self-reported mission statement.
    #[serde(default)]
    pub mission_description: Option<String>,
    /// Filing history, order irrelevant. May be empty.
    #[serde(default)]
    pub returns: Vec<ReturnRecord>,

    /// Record creation timestamp, supplier metadata.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Record update timestamp, supplier metadata.
    #[serde(default)]
    pub updated_at: Option<String>,
}
