//! Route records and order-level planning.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::metrics::{calculate_route_metrics, RouteMetrics};
use crate::optimizer::{optimize_picking_route_with, RouteNode, RouteOptions};
use crate::traits::BinProvider;

/// Lifecycle status. Owned by the caller; the optimizer never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// An optimized route for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub order_id: String,
    #[serde(default)]
    pub status: RouteStatus,
    pub nodes: Vec<RouteNode>,
    pub total_distance: f64,
    pub estimated_time: i64,
}

impl Route {
    pub fn from_nodes(order_id: impl Into<String>, nodes: Vec<RouteNode>) -> Self {
        let metrics = calculate_route_metrics(&nodes);
        Self {
            order_id: order_id.into(),
            status: RouteStatus::default(),
            nodes,
            total_distance: metrics.total_distance,
            estimated_time: metrics.total_time,
        }
    }

    pub fn metrics(&self) -> RouteMetrics {
        calculate_route_metrics(&self.nodes)
    }

    pub fn stops(&self) -> usize {
        self.nodes.len()
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("order {order_id} has no bins to visit")]
    EmptyOrder { order_id: String },
    #[error("failed to load bins for order {order_id}")]
    Provider {
        order_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Fetch the bins for an order and build its route.
///
/// Unlike the optimizer, this rejects orders with nothing to pick.
pub fn plan_route<P>(
    order_id: &str,
    provider: &P,
    options: &RouteOptions,
) -> Result<Route, PlanError>
where
    P: BinProvider,
{
    let bins = provider
        .bins_for_order(order_id)
        .map_err(|err| PlanError::Provider {
            order_id: order_id.to_string(),
            source: Box::new(err),
        })?;

    if bins.is_empty() {
        return Err(PlanError::EmptyOrder {
            order_id: order_id.to_string(),
        });
    }

    debug!(order_id, bins = bins.len(), "planning route");
    let nodes = optimize_picking_route_with(&bins, options);

    Ok(Route::from_nodes(order_id, nodes))
}
