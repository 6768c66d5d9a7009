//! Warehouse bin layouts for integration tests.

#![allow(dead_code)]

use pick_route::StorageLocation;

/// A named bin slot with a grid position.
#[derive(Debug, Clone)]
pub struct Slot {
    pub id: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Slot {
    pub const fn new(id: &'static str, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn bin(&self) -> StorageLocation {
        StorageLocation::new(self.id, format!("GRID-{}", self.id)).at(self.x, self.y)
    }
}

// ============================================================================
// Single aisle (all bins on y = 0)
// ============================================================================

pub const AISLE_ONE: &[Slot] = &[
    Slot::new("a1-05", 5.0, 0.0),
    Slot::new("a1-00", 0.0, 0.0),
    Slot::new("a1-01", 1.0, 0.0),
];

// ============================================================================
// Mixed floor: grid bins scattered over two aisles
// ============================================================================

pub const MIXED_FLOOR: &[Slot] = &[
    Slot::new("f-01", 0.0, 0.0),
    Slot::new("f-02", 4.0, 3.0),
    Slot::new("f-03", 1.0, 7.0),
    Slot::new("f-04", 9.0, 1.0),
    Slot::new("f-05", 2.0, 2.0),
    Slot::new("f-06", 8.0, 8.0),
    Slot::new("f-07", 6.0, 5.0),
    Slot::new("f-08", 3.0, 9.0),
];

// ============================================================================
// Coded racks: `aisle-bay-level`
// ============================================================================

pub const RACK_CODES: &[(&str, &str)] = &[
    ("r-1", "B-4-0"),
    ("r-2", "A-1-0"),
    ("r-3", "A-3-2"),
    ("r-4", "B-1-1"),
    ("r-5", "A-1-1"),
];

pub fn bins(slots: &[Slot]) -> Vec<StorageLocation> {
    slots.iter().map(Slot::bin).collect()
}

pub fn rack_bins() -> Vec<StorageLocation> {
    RACK_CODES
        .iter()
        .map(|(id, code)| StorageLocation::new(*id, *code).at_code(*code))
        .collect()
}
