use serde::{Deserialize, Serialize};

/// Period-over-period changes smaller than this (in percentage points) are
/// reported as stable.
pub const STABLE_DEADBAND_PCT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Percentage change from `previous` to `current`. A zero previous value maps
/// to 100 when the current value is positive and 0 otherwise; that is a
/// deliberate approximation to avoid dividing by zero, not a true percentage.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

pub fn classify(change: f64) -> TrendDirection {
    if change.abs() < STABLE_DEADBAND_PCT {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}
