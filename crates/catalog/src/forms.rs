use chrono::NaiveDate;
use core_types::{Category, DeliveryStatus, PaymentStatus};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Field is required.".into());
        return Err(err);
    }
    Ok(())
}

fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("Price must be positive.".into());
        return Err(err);
    }
    Ok(())
}

/// The fields a user supplies when creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    /// Stored uppercased.
    #[validate(custom(function = "not_blank"))]
    pub sku: String,

    pub category: Category,

    #[validate(custom(function = "positive"))]
    pub price: Decimal,

    #[serde(default)]
    pub stock_quantity: u32,

    pub description: Option<String>,
    pub image_url: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// The fields a user supplies when placing a single-product order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewOrder {
    #[validate(custom(function = "not_blank"))]
    pub product_id: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1."))]
    pub quantity: u32,

    #[validate(custom(function = "not_blank"))]
    pub client_name: String,

    #[validate(custom(function = "not_blank"))]
    pub delivery_address: String,

    pub payment_status: PaymentStatus,
    pub delivery_status: DeliveryStatus,
    pub expected_delivery_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product() -> NewProduct {
        NewProduct {
            name: "Desk Lamp".to_string(),
            sku: "dl-010".to_string(),
            category: Category::Furniture,
            price: dec!(19.99),
            stock_quantity: 0,
            description: None,
            image_url: None,
            active: true,
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(product().validate().is_ok());
    }

    #[test]
    fn blank_name_and_zero_price_are_reported_per_field() {
        let mut p = product();
        p.name = "   ".to_string();
        p.price = Decimal::ZERO;
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("sku"));
    }

    #[test]
    fn zero_quantity_order_is_rejected() {
        let order = NewOrder {
            product_id: "1".to_string(),
            quantity: 0,
            client_name: "Ada".to_string(),
            delivery_address: "1 Loop Rd".to_string(),
            payment_status: PaymentStatus::Pending,
            delivery_status: DeliveryStatus::Pending,
            expected_delivery_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        };
        let errors = order.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }
}
