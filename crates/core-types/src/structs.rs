use crate::enums::{Category, DeliveryStatus, Feedback, PaymentStatus, StockLevel};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue entry, together with the weekly sales samples used for its trend sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub price: Decimal,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    /// Oldest sample first. `None` until the product has any recorded sales history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<Feedback>,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.stock_quantity)
    }
}

/// A single product line within an order. `price` is the unit price at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLine {
    /// `None` when `price x quantity` exceeds the `Decimal` range.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub lines: Vec<OrderLine>,
    pub client_name: String,
    pub delivery_address: String,
    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
    pub expected_delivery_date: NaiveDate,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    /// 0..=100
    pub delivery_progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_feedback: Option<Feedback>,
}

impl Order {
    /// Sum of the line subtotals, or `None` on overflow. Equals `total_amount` for orders
    /// created through the catalogue.
    pub fn lines_total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.subtotal()?))
    }

    /// Uppercased first letter of each word of the client name, e.g. "JD" for "John Doe".
    pub fn client_initials(&self) -> String {
        self.client_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        Order {
            id: "ORD-002".to_string(),
            lines: vec![
                OrderLine {
                    product_id: "2".to_string(),
                    product_name: "Ergonomic Office Chair".to_string(),
                    quantity: 1,
                    price: dec!(299.99),
                },
                OrderLine {
                    product_id: "4".to_string(),
                    product_name: "JavaScript Programming Guide".to_string(),
                    quantity: 3,
                    price: dec!(39.99),
                },
            ],
            client_name: "jane smith".to_string(),
            delivery_address: "456 Oak Ave".to_string(),
            payment_status: PaymentStatus::Paid,
            delivery_status: DeliveryStatus::Pending,
            expected_delivery_date: NaiveDate::from_ymd_opt(2025, 10, 25).unwrap(),
            total_amount: dec!(419.96),
            created_at: Utc::now(),
            delivery_progress: 65,
            customer_feedback: Some(Feedback::Happy),
        }
    }

    #[test]
    fn line_subtotals_sum_to_total() {
        let order = order();
        assert_eq!(order.lines[1].subtotal(), Some(dec!(119.97)));
        assert_eq!(order.lines_total(), Some(order.total_amount));
    }

    #[test]
    fn overflowing_amounts_are_none() {
        let mut order = order();
        order.lines[0].price = Decimal::MAX;
        order.lines[0].quantity = 2;
        assert_eq!(order.lines[0].subtotal(), None);
        assert_eq!(order.lines_total(), None);

        order.lines[0].quantity = 1;
        assert_eq!(order.lines[0].subtotal(), Some(Decimal::MAX));
        assert_eq!(order.lines_total(), None);
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(order().client_initials(), "JS");
    }

    #[test]
    fn order_json_uses_camel_case_and_lowercase_statuses() {
        let json = serde_json::to_value(order()).unwrap();
        assert_eq!(json["clientName"], "jane smith");
        assert_eq!(json["deliveryStatus"], "pending");
        assert_eq!(json["customerFeedback"], "happy");
        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back.lines.len(), 2);
    }
}
