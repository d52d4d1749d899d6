//! Route planner orchestration.
//!
//! Ties the leaf components together: capacity gate, stop ordering,
//! waypoint scheduling, distance/duration/cost estimation, scoring, and
//! the hand-off to the persistence collaborator. One planner instance is
//! the caller-owned context for a sequence of optimization runs; it holds
//! no state beyond its collaborators and the transient progress indicators.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::constraints::validate_vehicle_capacity;
use crate::error::OptimizeError;
use crate::estimate::{fuel_cost, travel_duration, DEFAULT_AVERAGE_SPEED_MPH};
use crate::geo::path_distance;
use crate::model::{
    Coord, JobSite, OptimizationSettings, OptimizedRoute, RouteMetrics, RouteSavings, Vehicle,
};
use crate::savings::{calculate_savings, ASSUMED_HOURLY_RATE};
use crate::score::{optimization_score, ScoreWeights};
use crate::traits::{Notifier, RouteStore, StopOrder};
use crate::waypoints::{generate_waypoints, schedule_waypoints, PreserveInputOrder};

/// Named home of every heuristic constant the estimators and scorer use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Assumed driving speed between stops, mph.
    pub average_speed_mph: f64,
    /// Hourly rate used by the savings cost proxy. Intentionally separate
    /// from `OptimizationSettings::driver_hourly_rate`.
    pub assumed_hourly_rate: f64,
    pub weights: ScoreWeights,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            average_speed_mph: DEFAULT_AVERAGE_SPEED_MPH,
            assumed_hourly_rate: ASSUMED_HOURLY_RATE,
            weights: ScoreWeights::default(),
        }
    }
}

/// Where one optimization invocation currently stands.
///
/// `Rejected` and `Failed` are terminal for the invocation; `reset`
/// returns the planner to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Computing,
    Scored,
    Persisting,
    Done,
    Rejected,
    Failed,
}

/// Single-vehicle route planner.
///
/// Generic over the persistence and notification collaborators; the stop
/// ordering strategy is swappable at runtime.
pub struct RoutePlanner<S: RouteStore, N: Notifier> {
    config: PlannerConfig,
    store: S,
    notifier: N,
    order: Box<dyn StopOrder>,
    phase: Phase,
    progress: u8,
    in_progress: bool,
    last_error: Option<String>,
    runs: u64,
}

impl<S: RouteStore, N: Notifier> RoutePlanner<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_config(store, notifier, PlannerConfig::default())
    }

    pub fn with_config(store: S, notifier: N, config: PlannerConfig) -> Self {
        Self {
            config,
            store,
            notifier,
            order: Box::new(PreserveInputOrder),
            phase: Phase::Idle,
            progress: 0,
            in_progress: false,
            last_error: None,
            runs: 0,
        }
    }

    /// Replace the stop ordering strategy.
    pub fn with_stop_order(mut self, order: Box<dyn StopOrder>) -> Self {
        self.order = order;
        self
    }

    /// Compute, score, and persist a route for the selected job sites.
    ///
    /// Rejects before any side effect when the crew demand exceeds the
    /// vehicle's capacity. A failed insert discards the computed route;
    /// re-invoking is cheap and idempotent.
    pub fn optimize(
        &mut self,
        sites: &[JobSite],
        vehicle: &Vehicle,
        settings: &OptimizationSettings,
    ) -> Result<OptimizedRoute, OptimizeError> {
        self.in_progress = true;
        self.progress = 10;
        self.last_error = None;
        self.phase = Phase::Validating;

        if !validate_vehicle_capacity(sites, vehicle) {
            return Err(self.fail(Phase::Rejected, OptimizeError::ConstraintViolation));
        }

        self.phase = Phase::Computing;
        self.progress = 40;

        let ordered = self.order.order(sites);
        let mut waypoints = generate_waypoints(&ordered);
        let now = unix_now();
        schedule_waypoints(&mut waypoints, now);

        // Distance covers job-site-to-job-site legs only; the drive from
        // the vehicle's current location is not part of the sum.
        let stop_coords: Vec<Coord> = waypoints.iter().map(|wp| wp.location).collect();
        let total_distance = path_distance(&stop_coords);
        let total_duration = travel_duration(
            total_distance,
            self.config.average_speed_mph,
            settings.traffic_factor,
        );
        let total_fuel_cost = fuel_cost(
            total_distance,
            vehicle.fuel_efficiency,
            settings.fuel_cost_per_gallon,
        );

        let metrics = RouteMetrics {
            total_distance,
            total_duration,
            total_fuel_cost,
        };
        if !total_distance.is_finite() || !total_duration.is_finite() || !total_fuel_cost.is_finite()
        {
            let err = OptimizeError::Computation(format!(
                "non-finite route metrics: distance {} duration {} fuel {}",
                total_distance, total_duration, total_fuel_cost
            ));
            return Err(self.fail(Phase::Failed, err));
        }

        let job_sites: Vec<JobSite> = ordered.into_iter().cloned().collect();
        let score = optimization_score(&metrics, &job_sites, &self.config.weights);
        self.phase = Phase::Scored;
        self.progress = 70;

        self.runs += 1;
        let route = OptimizedRoute {
            id: format!("route-{}-{}", now, self.runs),
            vehicle_id: vehicle.id.clone(),
            route_name: format!("{} run - {} stops", vehicle.id, waypoints.len()),
            total_distance,
            total_duration,
            total_fuel_cost,
            job_sites,
            waypoints,
            optimization_score: score,
            created_at: now,
        };

        self.phase = Phase::Persisting;
        self.progress = 90;

        if let Err(err) = self.store.insert(&route) {
            return Err(self.fail(Phase::Failed, OptimizeError::Persistence(err)));
        }

        self.phase = Phase::Done;
        self.progress = 100;
        self.in_progress = false;

        tracing::debug!(
            route_id = %route.id,
            stops = route.waypoints.len(),
            miles = route.total_distance,
            score = route.optimization_score,
            "optimization complete"
        );
        self.notifier.optimization_succeeded(&route);

        Ok(route)
    }

    /// Savings of `optimized` over `original`, using the configured
    /// assumed hourly rate for the cost proxy.
    pub fn calculate_savings(
        &self,
        original: &OptimizedRoute,
        optimized: &OptimizedRoute,
    ) -> RouteSavings {
        calculate_savings(
            &original.metrics(),
            &optimized.metrics(),
            self.config.assumed_hourly_rate,
        )
    }

    /// Clear transient invocation state. Persisted routes are untouched.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.progress = 0;
        self.in_progress = false;
        self.last_error = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cosmetic 0-100 indicator for UI feedback; not tied to real sub-step
    /// completion.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_optimizing(&self) -> bool {
        self.in_progress
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn fail(&mut self, phase: Phase, err: OptimizeError) -> OptimizeError {
        let message = err.to_string();
        self.phase = phase;
        self.progress = 0;
        self.in_progress = false;
        self.last_error = Some(message.clone());
        self.notifier.optimization_failed(&message);
        err
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}
