//! Storage location ("bin") model.

use serde::{Deserialize, Serialize};

use crate::position::{Coordinate, Position, ResolvedPosition};

/// Stock of one SKU held in a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinProduct {
    pub sku: String,
    pub qty: u32,
}

impl BinProduct {
    pub fn new(sku: impl Into<String>, qty: u32) -> Self {
        Self { sku: sku.into(), qty }
    }
}

/// A uniquely addressable storage slot supplied by the inventory system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub id: String,
    /// Human-readable label, e.g. `"A1-B-03"`.
    pub code: String,
    /// Absent positions are treated as the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<BinProduct>,
}

impl StorageLocation {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            position: None,
            products: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_product(mut self, product: BinProduct) -> Self {
        self.products.push(product);
        self
    }

    pub fn at(self, x: f64, y: f64) -> Self {
        self.with_position(Position::grid(x, y))
    }

    pub fn at_code(self, code: impl Into<String>) -> Self {
        self.with_position(Position::code(code))
    }

    /// Position with the origin default applied.
    pub fn effective_position(&self) -> Position {
        self.position.clone().unwrap_or_default()
    }

    pub fn resolved_position(&self) -> ResolvedPosition {
        match &self.position {
            Some(position) => position.resolve(),
            None => Position::default().resolve(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.resolved_position().coordinate()
    }

    /// SKUs in stock order, or `None` for an empty bin.
    pub fn sku_list(&self) -> Option<Vec<String>> {
        if self.products.is_empty() {
            return None;
        }
        Some(self.products.iter().map(|product| product.sku.clone()).collect())
    }

    pub fn rendered_position(&self) -> String {
        match &self.position {
            Some(position) => position.render(),
            None => Position::default().render(),
        }
    }
}
