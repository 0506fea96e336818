use crate::sparkline::SparkPoint;
use crate::summary::SummaryStats;
use crate::trend::TrendDirection;
use serde::{Deserialize, Serialize};

/// The stat cards shown above the order list.
///
/// Recomputed from the current order collection on every render; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderOverview {
    pub total: usize,
    /// Orders whose delivery status is `delivered`.
    pub delivered: SummaryStats,
    /// Number of orders still awaiting processing.
    pub pending: usize,
    /// Orders whose customer left `happy` feedback.
    pub satisfaction: SummaryStats,
}

/// Catalogue-wide aggregates for the product list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductOverview {
    pub total: usize,
    pub active: SummaryStats,
    /// Products whose stock is not in the healthy bucket.
    pub low_stock: usize,
    pub rising: usize,
    pub falling: usize,
    pub flat: usize,
    /// Products without a usable sales series.
    pub untracked: usize,
}

/// Everything the renderer needs to draw one product's trend indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInsight {
    pub product_id: String,
    /// `None` when the product has no usable sales series; the renderer skips the indicator.
    pub trend: Option<TrendDirection>,
    pub sparkline: Vec<SparkPoint>,
}
