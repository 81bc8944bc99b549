//! Test fixtures for access-planner.
//!
//! Provides:
//! - Real Tula landmarks (coordinates from OpenStreetMap)
//! - Scripted geocoder and router collaborators

// Each test target uses a different subset.
#![allow(dead_code, unused_imports)]

pub mod mocks;
pub mod tula_locations;

pub use mocks::*;
pub use tula_locations::*;
