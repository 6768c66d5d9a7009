//! Seams for the systems surrounding the optimizer.
//!
//! The optimizer itself is transport-agnostic. Apps implement these traits
//! over whatever inventory backend they use.

use crate::location::StorageLocation;

/// Supplies the bins that must be visited to fulfill an order.
pub trait BinProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Bins for `order_id`. The first bin is used as the tour start.
    fn bins_for_order(&self, order_id: &str) -> Result<Vec<StorageLocation>, Self::Error>;
}
