//! pick-route: warehouse picking route optimizer
//!
//! Resolves bin positions, orders bins with a nearest-neighbor heuristic and
//! summarises the resulting route.

pub mod location;
pub mod metrics;
pub mod optimizer;
pub mod position;
pub mod route;
pub mod traits;

pub use location::{BinProduct, StorageLocation};
pub use metrics::{calculate_route_metrics, RouteMetrics};
pub use optimizer::{
    optimize_batch, optimize_picking_route, optimize_picking_route_from,
    optimize_picking_route_with, RouteNode, RouteOptions,
};
pub use position::{resolve_position, Coordinate, Position};
pub use route::{plan_route, PlanError, Route, RouteStatus};
