use crate::error::CatalogError;
use crate::forms::{NewOrder, NewProduct};
use crate::seed::{demo_orders, demo_products};
use chrono::Utc;
use core_types::{Feedback, Order, OrderLine, Product};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use validator::Validate;

/// The product and order collections the dashboard reads from.
///
/// Persisted as a single JSON document `{ "products": [...], "orders": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self { products, orders }
    }

    /// A catalogue holding the demo data set.
    pub fn seeded() -> Self {
        Self::new(demo_products(), demo_orders())
    }

    /// Reads the catalogue from `path`, falling back to the demo data when the file does not
    /// exist yet.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No catalogue file found, starting from demo data.");
            return Ok(Self::seeded());
        }
        let raw = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            products = catalog.products.len(),
            orders = catalog.orders.len(),
            "Loaded catalogue."
        );
        Ok(catalog)
    }

    /// Writes the catalogue to `path` as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!(path = %path.display(), "Saved catalogue.");
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id.eq_ignore_ascii_case(id))
    }

    /// Validates and appends a product.
    ///
    /// The SKU is uppercased. The product starts without sales history or satisfaction, so
    /// it shows no trend until real samples are recorded.
    pub fn add_product(&mut self, new: NewProduct) -> Result<&Product, CatalogError> {
        new.validate()?;

        let product = Product {
            id: (self.products.len() + 1).to_string(),
            name: new.name.trim().to_string(),
            sku: new.sku.trim().to_uppercase(),
            category: new.category,
            price: new.price,
            stock_quantity: new.stock_quantity,
            description: new.description.filter(|d| !d.trim().is_empty()),
            image_url: new.image_url,
            active: new.active,
            created_at: Utc::now(),
            sales: None,
            satisfaction: None,
        };
        tracing::info!(id = %product.id, sku = %product.sku, "Product created.");

        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Validates and appends a single-line order for an existing product.
    ///
    /// The line is priced at the product's current price; progress follows the delivery
    /// status and feedback starts out neutral.
    pub fn add_order(&mut self, new: NewOrder) -> Result<&Order, CatalogError> {
        new.validate()?;

        let product = self
            .product(new.product_id.trim())
            .ok_or_else(|| CatalogError::UnknownProduct(new.product_id.clone()))?;

        let line = OrderLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity: new.quantity,
            price: product.price,
        };
        let total_amount = line.subtotal().ok_or(CatalogError::AmountOverflow {
            price: product.price,
            quantity: new.quantity,
        })?;

        let order = Order {
            id: format!("ORD-{:03}", self.orders.len() + 1),
            lines: vec![line],
            client_name: new.client_name.trim().to_string(),
            delivery_address: new.delivery_address.trim().to_string(),
            payment_status: new.payment_status,
            delivery_status: new.delivery_status,
            expected_delivery_date: new.expected_delivery_date,
            total_amount,
            created_at: Utc::now(),
            delivery_progress: new.delivery_status.default_progress(),
            customer_feedback: Some(Feedback::Neutral),
        };
        tracing::info!(id = %order.id, total = %order.total_amount, "Order created.");

        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{Category, DeliveryStatus, PaymentStatus};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn new_order(product_id: &str, quantity: u32) -> NewOrder {
        NewOrder {
            product_id: product_id.to_string(),
            quantity,
            client_name: "Grace Hopper".to_string(),
            delivery_address: "1 Navy Yard".to_string(),
            payment_status: PaymentStatus::Paid,
            delivery_status: DeliveryStatus::Shipped,
            expected_delivery_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        }
    }

    #[test]
    fn add_product_uppercases_sku_and_assigns_next_id() {
        let mut catalog = Catalog::seeded();
        let product = catalog
            .add_product(NewProduct {
                name: "Yoga Mat".to_string(),
                sku: "ym-006".to_string(),
                category: Category::Sports,
                price: dec!(25.00),
                stock_quantity: 30,
                description: Some("  ".to_string()),
                image_url: None,
                active: true,
            })
            .unwrap();
        assert_eq!(product.id, "6");
        assert_eq!(product.sku, "YM-006");
        assert!(product.sales.is_none());
        assert!(product.satisfaction.is_none());
        assert!(product.description.is_none());
    }

    #[test]
    fn invalid_product_is_not_stored() {
        let mut catalog = Catalog::seeded();
        let result = catalog.add_product(NewProduct {
            name: String::new(),
            sku: "X".to_string(),
            category: Category::Other,
            price: dec!(-1),
            stock_quantity: 0,
            description: None,
            image_url: None,
            active: true,
        });
        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(catalog.products().len(), 5);
    }

    #[test]
    fn add_order_prices_line_and_sets_progress() {
        let mut catalog = Catalog::seeded();
        let order = catalog.add_order(new_order("2", 2)).unwrap();
        assert_eq!(order.id, "ORD-005");
        assert_eq!(order.total_amount, dec!(599.98));
        assert_eq!(order.lines_total(), Some(order.total_amount));
        assert_eq!(order.delivery_progress, 65);
        assert_eq!(order.customer_feedback, Some(Feedback::Neutral));
    }

    #[test]
    fn add_order_rejects_total_beyond_decimal_range() {
        let mut catalog = Catalog::seeded();
        let id = catalog
            .add_product(NewProduct {
                name: "Gold Bar".to_string(),
                sku: "gb-999".to_string(),
                category: Category::Other,
                price: Decimal::MAX,
                stock_quantity: 1,
                description: None,
                image_url: None,
                active: true,
            })
            .unwrap()
            .id
            .clone();

        assert!(matches!(
            catalog.add_order(new_order(&id, 2)),
            Err(CatalogError::AmountOverflow { quantity: 2, .. })
        ));
        assert_eq!(catalog.orders().len(), 4);
        assert!(catalog.add_order(new_order(&id, 1)).is_ok());
    }

    #[test]
    fn add_order_for_unknown_product_fails() {
        let mut catalog = Catalog::seeded();
        assert!(matches!(
            catalog.add_order(new_order("99", 1)),
            Err(CatalogError::UnknownProduct(id)) if id == "99"
        ));
        assert_eq!(catalog.orders().len(), 4);
    }

    #[test]
    fn order_lookup_ignores_case() {
        let catalog = Catalog::seeded();
        assert!(catalog.order("ord-003").is_some());
        assert!(catalog.order("ORD-404").is_none());
    }
}
