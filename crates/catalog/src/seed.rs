//! The demo data set a fresh catalogue starts from.

use chrono::{DateTime, NaiveDate, Utc};
use core_types::{Category, DeliveryStatus, Feedback, Order, OrderLine, PaymentStatus, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    sku: &str,
    category: Category,
    price: Decimal,
    stock_quantity: u32,
    description: &str,
    active: bool,
    created_at: DateTime<Utc>,
    sales: [f64; 7],
    satisfaction: Feedback,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        category,
        price,
        stock_quantity,
        description: Some(description.to_string()),
        image_url: None,
        active,
        created_at,
        sales: Some(sales.to_vec()),
        satisfaction: Some(satisfaction),
    }
}

fn line(product_id: &str, product_name: &str, quantity: u32, price: Decimal) -> OrderLine {
    OrderLine {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        price,
    }
}

pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Bluetooth Headphones",
            "WBH-001",
            Category::Electronics,
            dec!(79.99),
            150,
            "Premium wireless headphones with noise cancellation",
            true,
            midnight(2025, 1, 15),
            [45.0, 52.0, 48.0, 60.0, 55.0, 62.0, 58.0],
            Feedback::Happy,
        ),
        product(
            "2",
            "Ergonomic Office Chair",
            "EOC-002",
            Category::Furniture,
            dec!(299.99),
            45,
            "Comfortable office chair with lumbar support",
            true,
            midnight(2025, 2, 20),
            [12.0, 15.0, 18.0, 14.0, 16.0, 19.0, 17.0],
            Feedback::Happy,
        ),
        product(
            "3",
            "Cotton T-Shirt Pack",
            "CTS-003",
            Category::Clothing,
            dec!(24.99),
            8,
            "Pack of 3 premium cotton t-shirts",
            true,
            midnight(2025, 3, 10),
            [85.0, 92.0, 88.0, 95.0, 90.0, 98.0, 93.0],
            Feedback::Neutral,
        ),
        product(
            "4",
            "JavaScript Programming Guide",
            "JPG-004",
            Category::Books,
            dec!(39.99),
            200,
            "Comprehensive guide to modern JavaScript",
            true,
            midnight(2025, 1, 5),
            [25.0, 28.0, 30.0, 27.0, 32.0, 29.0, 31.0],
            Feedback::Happy,
        ),
        product(
            "5",
            "Gaming Mouse",
            "GM-005",
            Category::Electronics,
            dec!(49.99),
            3,
            "High-precision gaming mouse with RGB lighting",
            false,
            midnight(2025, 2, 14),
            [38.0, 42.0, 45.0, 40.0, 48.0, 43.0, 46.0],
            Feedback::Unhappy,
        ),
    ]
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            lines: vec![line("1", "Wireless Bluetooth Headphones", 2, dec!(79.99))],
            client_name: "John Doe".to_string(),
            delivery_address: "123 Main St, New York, NY 10001".to_string(),
            payment_status: PaymentStatus::Paid,
            delivery_status: DeliveryStatus::Delivered,
            expected_delivery_date: date(2025, 10, 20),
            total_amount: dec!(159.98),
            created_at: midnight(2025, 10, 15),
            delivery_progress: 100,
            customer_feedback: Some(Feedback::Happy),
        },
        Order {
            id: "ORD-002".to_string(),
            lines: vec![
                line("2", "Ergonomic Office Chair", 1, dec!(299.99)),
                line("4", "JavaScript Programming Guide", 3, dec!(39.99)),
            ],
            client_name: "Jane Smith".to_string(),
            delivery_address: "456 Oak Ave, Los Angeles, CA 90001".to_string(),
            payment_status: PaymentStatus::Paid,
            delivery_status: DeliveryStatus::Pending,
            expected_delivery_date: date(2025, 10, 25),
            total_amount: dec!(419.96),
            created_at: midnight(2025, 10, 18),
            delivery_progress: 65,
            customer_feedback: Some(Feedback::Happy),
        },
        Order {
            id: "ORD-003".to_string(),
            lines: vec![line("3", "Cotton T-Shirt Pack", 5, dec!(24.99))],
            client_name: "Bob Johnson".to_string(),
            delivery_address: "789 Pine Rd, Chicago, IL 60601".to_string(),
            payment_status: PaymentStatus::Pending,
            delivery_status: DeliveryStatus::Shipped,
            expected_delivery_date: date(2025, 10, 28),
            total_amount: dec!(124.95),
            created_at: midnight(2025, 10, 22),
            delivery_progress: 0,
            customer_feedback: Some(Feedback::Neutral),
        },
        Order {
            id: "ORD-004".to_string(),
            lines: vec![line("5", "Gaming Mouse", 1, dec!(49.99))],
            client_name: "Alice Williams".to_string(),
            delivery_address: "321 Elm St, Miami, FL 33101".to_string(),
            payment_status: PaymentStatus::Refunded,
            delivery_status: DeliveryStatus::Canceled,
            expected_delivery_date: date(2025, 10, 19),
            total_amount: dec!(49.99),
            created_at: midnight(2025, 10, 10),
            delivery_progress: 0,
            customer_feedback: Some(Feedback::Unhappy),
        },
    ]
}
