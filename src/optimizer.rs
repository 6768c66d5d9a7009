//! Picking route optimizer (nearest-neighbor baseline).
//!
//! Builds an open-path visitation order over a set of bins by repeatedly
//! walking to the closest unvisited bin. The tour is anchored at a fixed
//! start bin; no attempt is made to pick a better starting point.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::location::StorageLocation;
use crate::position::{euclidean_distance, Coordinate};

/// Travel time per coordinate unit used when no options are supplied.
pub const DEFAULT_SECONDS_PER_UNIT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// Time units charged per unit of distance travelled.
    pub seconds_per_unit: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            seconds_per_unit: DEFAULT_SECONDS_PER_UNIT,
        }
    }
}

impl RouteOptions {
    pub fn new(seconds_per_unit: f64) -> Self {
        Self { seconds_per_unit }
    }

    /// Convert a leg distance into an integral time cost.
    pub fn leg_time(&self, distance: f64) -> i64 {
        (distance * self.seconds_per_unit).round() as i64
    }
}

/// One stop in a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    pub bin_id: String,
    pub bin_code: String,
    /// SKUs stored in the bin, when the inventory reported any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_list: Option<Vec<String>>,
    /// `"x,y"` for structured positions, otherwise the original code.
    pub position: String,
    /// 1-based position in the visitation order.
    pub sequence: usize,
    /// Distance from the previous stop (0 for the first).
    pub distance: f64,
    /// Time cost of the leg ending here (0 for the first).
    pub estimated_time: i64,
}

impl RouteNode {
    fn new(bin: &StorageLocation, sequence: usize, distance: f64, estimated_time: i64) -> Self {
        Self {
            bin_id: bin.id.clone(),
            bin_code: bin.code.clone(),
            sku_list: bin.sku_list(),
            position: bin.rendered_position(),
            sequence,
            distance,
            estimated_time,
        }
    }
}

/// Optimize with default options, starting from the first bin.
pub fn optimize_picking_route(bins: &[StorageLocation]) -> Vec<RouteNode> {
    optimize_picking_route_with(bins, &RouteOptions::default())
}

/// Optimize starting from the first bin.
pub fn optimize_picking_route_with(
    bins: &[StorageLocation],
    options: &RouteOptions,
) -> Vec<RouteNode> {
    optimize_picking_route_from(bins, 0, options).unwrap_or_default()
}

/// Optimize starting from `bins[start]`.
///
/// The remaining bins keep their relative input order, which is also the
/// scan order for breaking exact distance ties (first encountered wins).
/// Returns `None` when `start` is out of range for a non-empty input.
pub fn optimize_picking_route_from(
    bins: &[StorageLocation],
    start: usize,
    options: &RouteOptions,
) -> Option<Vec<RouteNode>> {
    if bins.is_empty() {
        return Some(Vec::new());
    }
    if start >= bins.len() {
        return None;
    }

    let mut unvisited: Vec<(&StorageLocation, Coordinate)> =
        bins.iter().map(|bin| (bin, resolve_bin(bin))).collect();

    let (mut current_bin, mut current_pos) = unvisited.remove(start);
    let mut route = Vec::with_capacity(bins.len());
    route.push(RouteNode::new(current_bin, 1, 0.0, 0));

    while !unvisited.is_empty() {
        let (nearest_index, nearest_distance) = nearest(&current_pos, &unvisited);
        let (next_bin, next_pos) = unvisited.remove(nearest_index);

        let sequence = route.len() + 1;
        let estimated_time = options.leg_time(nearest_distance);
        trace!(
            from = %current_bin.id,
            to = %next_bin.id,
            distance = nearest_distance,
            estimated_time,
            "route leg"
        );

        route.push(RouteNode::new(next_bin, sequence, nearest_distance, estimated_time));
        current_bin = next_bin;
        current_pos = next_pos;
    }

    debug!(
        stops = route.len(),
        distance = route.iter().map(|node| node.distance).sum::<f64>(),
        "optimized picking route"
    );

    Some(route)
}

/// Optimize many independent pick lists in parallel. Results keep input order.
pub fn optimize_batch<B>(orders: &[B], options: &RouteOptions) -> Vec<Vec<RouteNode>>
where
    B: AsRef<[StorageLocation]> + Sync,
{
    orders
        .par_iter()
        .map(|bins| optimize_picking_route_with(bins.as_ref(), options))
        .collect()
}

/// Index and distance of the closest candidate. Only a strictly smaller
/// distance replaces the incumbent, so index 0 wins if nothing beats +inf.
fn nearest(from: &Coordinate, candidates: &[(&StorageLocation, Coordinate)]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;

    for (index, (_, pos)) in candidates.iter().enumerate() {
        let distance = euclidean_distance(from, pos);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    (best_index, best_distance)
}

fn resolve_bin(bin: &StorageLocation) -> Coordinate {
    let resolved = bin.resolved_position();
    if bin.position.is_some() && resolved.is_degenerate() {
        debug!(
            bin = %bin.id,
            position = %bin.rendered_position(),
            "position partially defaulted to 0"
        );
    }
    resolved.coordinate()
}
