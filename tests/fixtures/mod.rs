//! Test fixtures for crew-planner.
//!
//! Provides realistic test data: real New York metro locations for job
//! sites and depots.

pub mod new_york_locations;

pub use new_york_locations::*;
