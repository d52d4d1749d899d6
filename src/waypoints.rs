//! Waypoint generation and stop scheduling.
//!
//! Turns selected job sites into an ordered stop list. The visiting order
//! comes from a [`StopOrder`] strategy; the shipped strategy keeps the
//! caller's order, since true route-order optimization is out of scope
//! here. Timestamps follow a fixed per-stop cadence rather than a
//! time-window solve.

use crate::model::{JobSite, Waypoint};
use crate::traits::StopOrder;

/// Gap between consecutive arrivals (2 hours).
pub const STOP_CADENCE_SECS: i64 = 2 * 3600;

/// Assumed on-site time per stop (1 hour).
pub const ON_SITE_SECS: i64 = 3600;

/// Keeps job sites in the order the caller selected them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveInputOrder;

impl StopOrder for PreserveInputOrder {
    fn order<'a>(&self, sites: &'a [JobSite]) -> Vec<&'a JobSite> {
        sites.iter().collect()
    }
}

/// One waypoint per job site, in the given order, with timestamps zeroed.
///
/// The address label falls back to formatted coordinates when the site has
/// no street address.
pub fn generate_waypoints(sites: &[&JobSite]) -> Vec<Waypoint> {
    sites
        .iter()
        .map(|site| Waypoint {
            job_site_id: site.id.clone(),
            address: if site.address.is_empty() {
                format!("{:.4}, {:.4}", site.location.lat, site.location.lng)
            } else {
                site.address.clone()
            },
            location: site.location,
            arrival: 0,
            departure: 0,
        })
        .collect()
}

/// Assign arrival/departure times on a fixed cadence from `start`.
///
/// Arrival = start + index x 2h, departure = arrival + 1h. A scheduling
/// placeholder, not a time-window solver.
pub fn schedule_waypoints(waypoints: &mut [Waypoint], start: i64) {
    for (index, waypoint) in waypoints.iter_mut().enumerate() {
        waypoint.arrival = start + index as i64 * STOP_CADENCE_SECS;
        waypoint.departure = waypoint.arrival + ON_SITE_SECS;
    }
}
