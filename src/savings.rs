//! Savings comparison between two routes.
//!
//! Quantifies how much better (or worse) one route's cost summary is than
//! another's. Computed on demand; never persisted.

use crate::model::{RouteMetrics, RouteSavings};

/// Hourly driver rate assumed by the total-cost proxy.
///
/// Independent of the per-invocation `driver_hourly_rate` setting.
/// Override via `PlannerConfig::assumed_hourly_rate`.
pub const ASSUMED_HOURLY_RATE: f64 = 25.0;

/// Pairwise savings of `optimized` over `original`.
///
/// Saved fields are plain original-minus-optimized differences and may be
/// negative. Percent improvement compares the total-cost proxy
/// `fuel + duration * hourly_rate`; a zero original proxy reports 0.
pub fn calculate_savings(
    original: &RouteMetrics,
    optimized: &RouteMetrics,
    hourly_rate: f64,
) -> RouteSavings {
    let original_total = original.total_fuel_cost + original.total_duration * hourly_rate;
    let optimized_total = optimized.total_fuel_cost + optimized.total_duration * hourly_rate;

    let percent_improvement = if original_total == 0.0 {
        0.0
    } else {
        (original_total - optimized_total) / original_total * 100.0
    };

    RouteSavings {
        distance_saved: original.total_distance - optimized.total_distance,
        time_saved: original.total_duration - optimized.total_duration,
        cost_saved: original.total_fuel_cost - optimized.total_fuel_cost,
        percent_improvement,
    }
}
