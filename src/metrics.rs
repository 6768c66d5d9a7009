//! Route summary metrics.

use serde::{Deserialize, Serialize};

use crate::optimizer::RouteNode;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    /// Sum of leg distances, rounded to one decimal.
    pub total_distance: f64,
    /// Sum of leg times.
    pub total_time: i64,
    pub total_stops: usize,
    /// Average distance per stop, rounded to two decimals. Lower is better.
    pub efficiency: f64,
}

impl RouteMetrics {
    /// Total time expressed in whole minutes.
    pub fn total_minutes(&self) -> i64 {
        (self.total_time as f64 / 60.0).round() as i64
    }
}

pub fn calculate_route_metrics(route: &[RouteNode]) -> RouteMetrics {
    let total_distance: f64 = route.iter().map(|node| node.distance).sum();
    // Saturates: a single leg time may already be i64::MAX.
    let total_time = route
        .iter()
        .fold(0i64, |acc, node| acc.saturating_add(node.estimated_time));
    let total_stops = route.len();

    // Efficiency uses the unrounded distance.
    let efficiency = if total_stops > 0 {
        round_to(total_distance / total_stops as f64, 2)
    } else {
        0.0
    };

    RouteMetrics {
        total_distance: round_to(total_distance, 1),
        total_time,
        total_stops,
        efficiency,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
