//! Real New York metro locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Close enough together that
//! single-run routes stay within a plausible workday.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// Yards / Depots (vehicle start locations)
// ============================================================================

pub const YARDS: &[Location] = &[
    Location::new("Brooklyn Navy Yard", 40.7021, -73.9708),
    Location::new("Maspeth Yard", 40.7294, -73.9126),
    Location::new("Red Hook Terminal", 40.6734, -74.0083),
];

// ============================================================================
// Manhattan Job Sites
// ============================================================================

pub const MANHATTAN_SITES: &[Location] = &[
    Location::new("City Hall Plaza", 40.7128, -74.0060),
    Location::new("Times Square North", 40.7589, -73.9851),
    Location::new("Herald Square", 40.7505, -73.9934),
    Location::new("Union Square", 40.7359, -73.9911),
    Location::new("Columbus Circle", 40.7681, -73.9819),
];

// ============================================================================
// Outer Borough Job Sites
// ============================================================================

pub const OUTER_BOROUGH_SITES: &[Location] = &[
    Location::new("Grand Concourse", 40.8270, -73.9229),
    Location::new("Hunts Point Market", 40.8094, -73.8803),
    Location::new("Astoria Blvd", 40.7720, -73.9301),
    Location::new("Flatbush Ave", 40.6526, -73.9590),
    Location::new("Canarsie Pier", 40.6306, -73.8842),
    Location::new("JFK Cargo Area", 40.6650, -73.7910),
    Location::new("Staten Island Mall", 40.5820, -74.1636),
];
