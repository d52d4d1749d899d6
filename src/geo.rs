//! Great-circle distance over job-site coordinates.
//!
//! Straight-line haversine distance in miles. Ignores roads; good enough
//! for fuel and duration estimates between nearby job sites.

use crate::model::Coord;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two coordinates in miles.
pub fn haversine_miles(from: Coord, to: Coord) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Total path distance in miles over an ordered coordinate sequence.
///
/// Sums consecutive haversine legs. Zero or one point yields 0. Coordinates
/// are not range-checked; out-of-range input produces a numerically valid
/// but meaningless distance.
pub fn path_distance(points: &[Coord]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_miles(leg[0], leg[1]))
        .sum()
}
