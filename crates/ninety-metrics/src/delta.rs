//! Year-over-year delta calculation.

use serde::Serialize;

/// Change between a current-period and prior-period value.
///
/// Derived fresh per call and never cached. Either component may be
/// unavailable; consumers render unavailable as a placeholder, never as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Delta {
    /// `current - previous`, unrounded. Rounding is a presentation concern.
    pub absolute: Option<f64>,
    /// Percentage change relative to `previous`, in percent points.
    ///
    /// Unavailable when `previous` is non-positive: a zero baseline has no
    /// defined percentage change and a negative baseline would flip the
    /// sign misleadingly.
    pub percentage: Option<f64>,
}

impl Delta {
    /// Compute the delta for a (current, previous) pair.
    ///
    /// If either side is unavailable, both outputs are unavailable. The
    /// displayed sign prefix downstream comes from `absolute`; whenever
    /// `percentage` is available its sign already agrees, since
    /// `previous > 0` is guaranteed in that case.
    pub fn between(current: Option<f64>, previous: Option<f64>) -> Self {
        let (Some(current), Some(previous)) = (current, previous) else {
            return Self::UNAVAILABLE;
        };

        let absolute = current - previous;
        let percentage = (previous > 0.0).then(|| absolute / previous * 100.0);

        Self {
            absolute: Some(absolute),
            percentage,
        }
    }

    /// The fully-unavailable delta.
    pub const UNAVAILABLE: Self = Self {
        absolute: None,
        percentage: None,
    };

    /// Whether nothing could be computed for this pair.
    pub const fn is_unavailable(&self) -> bool {
        self.absolute.is_none()
    }
}
