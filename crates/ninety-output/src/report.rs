//! Rendering-ready values for table cells and detail cards.

use crate::format::{NOT_AVAILABLE, format_count, format_currency, format_date, format_number};
use ninety_metrics::{Delta, Metric, MetricUnit, latest};
use ninety_model::Organization;
use serde::Serialize;
use std::fmt;

/// Which way a delta badge should point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Increase.
    Up,
    /// Decrease.
    Down,
    /// No change.
    Flat,
    /// Insufficient data to compute a change.
    Unknown,
}

/// A delta rendered for display.
///
/// The percentage label's sign prefix comes from the absolute change's
/// sign, with the percentage magnitude shown to one decimal. The absolute
/// label keeps its natural sign through the currency/number formatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaDisplay {
    /// Badge direction.
    pub direction: Direction,
    /// e.g. `+12.5%`, `-3.1%`, or `N/A`.
    pub percentage: String,
    /// e.g. `$50,000`, `-$25,000`, `8`, or `N/A`.
    pub absolute: String,
}

impl DeltaDisplay {
    /// Render a computed delta for a metric's unit.
    pub fn new(delta: Delta, unit: MetricUnit) -> Self {
        let direction = match delta.absolute {
            Some(a) if a > 0.0 => Direction::Up,
            Some(a) if a < 0.0 => Direction::Down,
            Some(_) => Direction::Flat,
            None => Direction::Unknown,
        };

        let sign = match direction {
            Direction::Up => "+",
            Direction::Down => "-",
            Direction::Flat | Direction::Unknown => "",
        };

        let percentage = delta.percentage.map_or_else(
            || NOT_AVAILABLE.to_string(),
            |p| format!("{sign}{:.1}%", p.abs()),
        );

        let absolute = delta.absolute.map_or_else(
            || NOT_AVAILABLE.to_string(),
            |a| match unit {
                MetricUnit::Currency => format_currency(a),
                MetricUnit::Count => format_number(a),
            },
        );

        Self {
            direction,
            percentage,
            absolute,
        }
    }
}

impl fmt::Display for DeltaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.percentage, self.absolute)
    }
}

/// One rendered row of the organizations table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRow {
    /// Organization name.
    pub name: String,
    /// Latest filing date, formatted, or `No filings`.
    pub latest_filing: String,
    /// One formatted cell per [`Metric::ALL`], `N/A` where unavailable.
    pub cells: Vec<String>,
}

impl OrganizationRow {
    /// Label shown when an organization has never filed.
    pub const NO_FILINGS: &'static str = "No filings";

    /// Render an organization into a table row.
    pub fn build(org: &Organization) -> Self {
        let latest_filing = latest(&org.returns).map_or_else(
            || Self::NO_FILINGS.to_string(),
            |record| format_date(Some(record.filed_on.as_str())),
        );

        let cells = Metric::ALL
            .iter()
            .map(|metric| {
                metric.value(org).map_or_else(
                    || NOT_AVAILABLE.to_string(),
                    |value| match metric.unit() {
                        MetricUnit::Currency => format_currency(value),
                        MetricUnit::Count => format_count(value),
                    },
                )
            })
            .collect();

        Self {
            name: org.name.clone(),
            latest_filing,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninety_model::dataset::organizations_from_json;

    const ORG: &str = r#"{
        "id": "b7f1", "name": "Harbor Fund",
        "returns": [
            {
                "filedOn": "2023-04-01",
                "taxPeriodStartDate": "2022-01-01",
                "taxPeriodEndDate": "2022-12-31",
                "totalRevenue": "900000.00"
            },
            {
                "filedOn": "2024-04-01",
                "taxPeriodStartDate": "2023-01-01",
                "taxPeriodEndDate": "2023-12-31",
                "employeeCount": 40,
                "pyEmployeeCount": 32,
                "totalRevenue": "1052300.00",
                "pyTotalRevenue": "980000.00"
            }
        ]
    }"#;

    fn harbor() -> Organization {
        organizations_from_json(ORG).unwrap().remove(0)
    }

    #[test]
    fn test_delta_display_increase() {
        let delta = Delta::between(Some(150_000.0), Some(100_000.0));
        let display = DeltaDisplay::new(delta, MetricUnit::Currency);
        assert_eq!(display.direction, Direction::Up);
        assert_eq!(display.percentage, "+50.0%");
        assert_eq!(display.absolute, "$50,000");
    }

    #[test]
    fn test_delta_display_decrease() {
        let delta = Delta::between(Some(75_000.0), Some(100_000.0));
        let display = DeltaDisplay::new(delta, MetricUnit::Currency);
        assert_eq!(display.direction, Direction::Down);
        assert_eq!(display.percentage, "-25.0%");
        assert_eq!(display.absolute, "-$25,000");
    }

    #[test]
    fn test_delta_display_unavailable() {
        let display = DeltaDisplay::new(Delta::UNAVAILABLE, MetricUnit::Count);
        assert_eq!(display.direction, Direction::Unknown);
        assert_eq!(display.percentage, NOT_AVAILABLE);
        assert_eq!(display.absolute, NOT_AVAILABLE);
    }

    #[test]
    fn test_delta_display_non_positive_baseline() {
        let delta = Delta::between(Some(100.0), Some(0.0));
        let display = DeltaDisplay::new(delta, MetricUnit::Currency);
        assert_eq!(display.direction, Direction::Up);
        assert_eq!(display.percentage, NOT_AVAILABLE);
        assert_eq!(display.absolute, "$100");
    }

    #[test]
    fn test_row_uses_latest_return() {
        let row = OrganizationRow::build(&harbor());
        assert_eq!(row.name, "Harbor Fund");
        assert_eq!(row.latest_filing, "Apr 01, 2024");
        // Metric order: revenue, expenses, assets, liabilities, employees.
        assert_eq!(
            row.cells,
            ["$1,052,300", "N/A", "N/A", "N/A", "40"]
        );
    }

    #[test]
    fn test_row_without_filings() {
        let mut org = harbor();
        org.returns.clear();
        let row = OrganizationRow::build(&org);
        assert_eq!(row.latest_filing, OrganizationRow::NO_FILINGS);
        assert!(row.cells.iter().all(|cell| cell == NOT_AVAILABLE));
    }
}
