//! Test fixtures for pick-route.
//!
//! Provides small warehouse layouts:
//! - A single aisle with bins at known grid offsets
//! - A scattered floor of grid bins
//! - Coded racks using `aisle-bay-level` location codes

pub mod warehouse_layouts;

pub use warehouse_layouts::*;
