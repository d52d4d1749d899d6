//! Domain types for crew route planning.
//!
//! These are concrete value types rather than traits: the shapes are fixed
//! by the dispatch workflow (job sites in, optimized route out) and every
//! one of them crosses the persistence boundary as JSON.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Job urgency, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// High and critical jobs earn the scoring bonus.
    pub fn is_rush(self) -> bool {
        matches!(self, Priority::High | Priority::Critical)
    }
}

/// A requested service window for a job site (unix seconds).
///
/// Carried through to the persisted route for display; the scheduler does
/// not solve against these windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

/// A location requiring paving work, with crew and duration requirements.
///
/// Immutable once selected for an optimization run. Owned by the job
/// management side; routes reference job sites by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSite {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coord,
    pub priority: Priority,
    /// Crew headcount this site needs. Unset counts as 1 during validation.
    pub required_crew_size: Option<u32>,
    /// Estimated on-site work in hours.
    pub estimated_duration: f64,
    pub time_windows: Option<Vec<TimeWindow>>,
}

/// A dispatchable truck. Read-only input to optimization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    /// Maximum total crew the vehicle can carry on one dispatch.
    pub capacity: u32,
    /// Miles per gallon.
    pub fuel_efficiency: f64,
    pub current_location: Coord,
}

/// What the caller wants the run optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Time,
    Cost,
    Distance,
}

/// Per-invocation optimization configuration.
///
/// `break_duration`, `max_daily_hours` and `optimize_for` are recorded
/// inputs: they ride along with the run but do not branch the core
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSettings {
    pub fuel_cost_per_gallon: f64,
    pub driver_hourly_rate: f64,
    /// Multiplier >= 1 applied to travel duration to model congestion.
    pub traffic_factor: f64,
    /// Crew break allowance in hours.
    pub break_duration: f64,
    pub max_daily_hours: f64,
    pub optimize_for: Objective,
}

/// One ordered stop in an optimized route, derived from a job site.
///
/// Index 0 follows the vehicle's current location; the start itself is not
/// represented as a waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub job_site_id: String,
    pub address: String,
    pub location: Coord,
    /// Scheduled arrival (unix seconds).
    pub arrival: i64,
    /// Scheduled departure (unix seconds).
    pub departure: i64,
}

/// Aggregate cost summary of a route: the shape shared by the scorer and
/// the savings comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Miles.
    pub total_distance: f64,
    /// Hours.
    pub total_duration: f64,
    /// Currency.
    pub total_fuel_cost: f64,
}

/// The persisted output of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub id: String,
    pub vehicle_id: String,
    pub route_name: String,
    pub total_distance: f64,
    pub total_duration: f64,
    pub total_fuel_cost: f64,
    pub job_sites: Vec<JobSite>,
    pub waypoints: Vec<Waypoint>,
    /// Heuristic desirability rating, 0-100.
    pub optimization_score: u8,
    /// Creation time (unix seconds).
    pub created_at: i64,
}

impl OptimizedRoute {
    pub fn metrics(&self) -> RouteMetrics {
        RouteMetrics {
            total_distance: self.total_distance,
            total_duration: self.total_duration,
            total_fuel_cost: self.total_fuel_cost,
        }
    }
}

/// Difference between two routes' cost summaries. Computed on demand,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSavings {
    pub distance_saved: f64,
    pub time_saved: f64,
    pub cost_saved: f64,
    pub percent_improvement: f64,
}
