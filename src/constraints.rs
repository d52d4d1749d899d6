//! Vehicle capacity feasibility check.
//!
//! The single gate for the whole subsystem: optimization must not proceed
//! past a failed capacity check.

use crate::model::{JobSite, Vehicle};

/// Total crew headcount the selected job sites require.
///
/// Sites without an explicit crew size count as 1.
pub fn required_crew_total(sites: &[JobSite]) -> u32 {
    sites
        .iter()
        .map(|site| site.required_crew_size.unwrap_or(1))
        .sum()
}

/// True iff the vehicle can carry the aggregate crew demand.
///
/// Capacity exactly met is valid.
pub fn validate_vehicle_capacity(sites: &[JobSite], vehicle: &Vehicle) -> bool {
    required_crew_total(sites) <= vehicle.capacity
}
