use crate::error::AnalyticsError;
use crate::report::{OrderOverview, ProductInsight, ProductOverview};
use crate::sparkline::normalize;
use crate::summary::summarize;
use crate::trend::{classify_trend, TrendDirection};
use core_types::{DeliveryStatus, Feedback, Order, Product, StockLevel};

/// A stateless calculator for deriving dashboard figures from the catalogue.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the order list stat cards.
    ///
    /// # Arguments
    ///
    /// * `orders` - The current order collection. May be empty.
    pub fn order_overview(&self, orders: &[Order]) -> OrderOverview {
        let overview = OrderOverview {
            total: orders.len(),
            delivered: summarize(orders, |o| o.delivery_status == DeliveryStatus::Delivered),
            pending: orders
                .iter()
                .filter(|o| o.delivery_status == DeliveryStatus::Pending)
                .count(),
            satisfaction: summarize(orders, |o| o.customer_feedback == Some(Feedback::Happy)),
        };
        tracing::debug!(
            total = overview.total,
            delivered_pct = overview.delivered.percentage,
            "Computed order overview."
        );
        overview
    }

    /// Computes catalogue-wide aggregates, including a tally of sales trends.
    pub fn product_overview(&self, products: &[Product]) -> ProductOverview {
        let mut overview = ProductOverview {
            total: products.len(),
            active: summarize(products, |p| p.active),
            low_stock: products
                .iter()
                .filter(|p| p.stock_level() != StockLevel::Healthy)
                .count(),
            ..ProductOverview::default()
        };

        for product in products {
            match self.product_trend(product) {
                Ok(TrendDirection::Rising) => overview.rising += 1,
                Ok(TrendDirection::Falling) => overview.falling += 1,
                Ok(TrendDirection::Flat) => overview.flat += 1,
                Err(_) => overview.untracked += 1,
            }
        }

        tracing::debug!(
            total = overview.total,
            rising = overview.rising,
            falling = overview.falling,
            untracked = overview.untracked,
            "Computed product overview."
        );
        overview
    }

    /// The trend classification and sparkline for one product.
    ///
    /// A product without a usable sales series gets no trend and an empty sparkline.
    pub fn product_insight(&self, product: &Product) -> ProductInsight {
        let samples = product.sales.as_deref().unwrap_or_default();

        let (trend, sparkline) = match (classify_trend(samples), normalize(samples)) {
            (Ok(trend), Ok(points)) => (Some(trend), points),
            (Err(e), _) | (_, Err(e)) => {
                if samples.is_empty() {
                    // Expected for products that have not sold yet.
                    tracing::debug!(product_id = %product.id, "No sales history; no trend.");
                } else {
                    tracing::warn!(product_id = %product.id, error = %e, "Skipping sales trend.");
                }
                (None, Vec::new())
            }
        };

        ProductInsight {
            product_id: product.id.clone(),
            trend,
            sparkline,
        }
    }

    fn product_trend(&self, product: &Product) -> Result<TrendDirection, AnalyticsError> {
        classify_trend(product.sales.as_deref().unwrap_or_default())
    }
}
