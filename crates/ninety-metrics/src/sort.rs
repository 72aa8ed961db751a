//! Metric ordering for the organizations table.
//!
//! The one subtle invariant of the dashboard lives here: organizations
//! without usable data sort *after* every organization with data, in both
//! sort directions. Direction inversion is applied above the base
//! comparator and only flips available-against-available comparisons.

use crate::metric::Metric;
use ninety_model::Organization;
use std::cmp::Ordering;

/// Base comparator over possibly-unavailable metric values.
///
/// Ascending numeric order for available pairs; unavailable compares
/// greater than any available value and equal to itself. Total and
/// deterministic.
pub fn compare_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.total_cmp(&b),
    }
}

/// Compare two organizations by a metric, ascending.
///
/// The key is the metric's value on each organization's latest return.
pub fn compare(a: &Organization, b: &Organization, metric: Metric) -> Ordering {
    compare_values(metric.value(a), metric.value(b))
}

/// Sort cycle for a table column header.
///
/// Clicking a header advances Unsorted -> Ascending -> Descending ->
/// Unsorted. The cycle is an explicit transition table rather than a patch
/// over a rendering library's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// Rows keep their incoming order.
    #[default]
    Unsorted,
    /// Smallest value first, no-data rows last.
    Ascending,
    /// Largest value first, no-data rows still last.
    Descending,
}

impl SortState {
    /// The next state in the cycle.
    pub const fn advance(self) -> Self {
        match self {
            Self::Unsorted => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Unsorted,
        }
    }
}

/// Compare two organizations under a sort direction.
///
/// Descending inverts only comparisons between two available values;
/// unavailable stays last in either direction. Unsorted compares
/// everything equal, which leaves a stable sort untouched.
pub fn compare_directed(
    a: &Organization,
    b: &Organization,
    metric: Metric,
    state: SortState,
) -> Ordering {
    let (a_value, b_value) = (metric.value(a), metric.value(b));
    match state {
        SortState::Unsorted => Ordering::Equal,
        SortState::Ascending => compare_values(a_value, b_value),
        SortState::Descending => match (a_value, b_value) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            _ => compare_values(a_value, b_value),
        },
    }
}

/// Order a slice of organizations by a metric column's sort state.
///
/// Stable, so rows with equal keys (including all-unavailable rows) keep
/// their incoming relative order.
pub fn sort_by_metric(orgs: &mut [Organization], metric: Metric, state: SortState) {
    if state == SortState::Unsorted {
        return;
    }
    orgs.sort_by(|a, b| compare_directed(a, b, metric, state));
}
