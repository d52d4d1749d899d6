//! Heuristic route desirability scoring.
//!
//! A weighted-penalty score, not a normalized statistical measure. Starts
//! at 100, subtracts penalties for distance, duration and fuel cost, adds a
//! bonus per rush-priority site, then clamps to [0, 100]. Depends only on
//! aggregate metrics, never on visiting order.

use crate::model::{JobSite, RouteMetrics};

/// Penalty and bonus weights for the optimization score.
///
/// The defaults are fixed design constants; change them only if comparing
/// scores against historical routes is not a concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points lost per mile.
    pub distance_penalty: f64,
    /// Points lost per hour.
    pub duration_penalty: f64,
    /// Points lost per currency unit of fuel.
    pub fuel_penalty: f64,
    /// Points gained per high/critical priority site.
    pub rush_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance_penalty: 0.1,
            duration_penalty: 2.0,
            fuel_penalty: 0.5,
            rush_bonus: 5.0,
        }
    }
}

/// Score a route's aggregate metrics, 0-100.
pub fn optimization_score(metrics: &RouteMetrics, sites: &[JobSite], weights: &ScoreWeights) -> u8 {
    let rush_count = sites.iter().filter(|site| site.priority.is_rush()).count();

    let raw = 100.0
        - metrics.total_distance * weights.distance_penalty
        - metrics.total_duration * weights.duration_penalty
        - metrics.total_fuel_cost * weights.fuel_penalty
        + rush_count as f64 * weights.rush_bonus;

    raw.clamp(0.0, 100.0).round() as u8
}
