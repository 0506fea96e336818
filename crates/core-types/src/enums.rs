use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of catalogue categories a product may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Books,
    Food,
    Toys,
    Sports,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::Books,
        Category::Food,
        Category::Toys,
        Category::Sports,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Food => "Food",
            Category::Toys => "Toys",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidInput("category".to_string(), s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(CoreError::InvalidInput("payment status".to_string(), s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Shipped,
    Delivered,
    Canceled,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Shipped => "shipped",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Canceled => "canceled",
        }
    }

    /// The progress percentage a freshly created order starts with for this status.
    pub fn default_progress(&self) -> u8 {
        match self {
            DeliveryStatus::Delivered => 100,
            DeliveryStatus::Shipped => 65,
            DeliveryStatus::Pending | DeliveryStatus::Canceled => 0,
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(DeliveryStatus::Pending),
            "shipped" => Ok(DeliveryStatus::Shipped),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "canceled" | "cancelled" => Ok(DeliveryStatus::Canceled),
            _ => Err(CoreError::InvalidInput("delivery status".to_string(), s.to_string())),
        }
    }
}

/// Customer sentiment attached to an order, or aggregated onto a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Happy,
    Neutral,
    Unhappy,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Happy => "happy",
            Feedback::Neutral => "neutral",
            Feedback::Unhappy => "unhappy",
        }
    }
}

/// Coarse bucket for how much inventory is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// More than 50 units.
    Healthy,
    /// Between 10 and 50 units inclusive.
    Low,
    /// Fewer than 10 units.
    Critical,
}

impl StockLevel {
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity > 50 {
            StockLevel::Healthy
        } else if quantity >= 10 {
            StockLevel::Low
        } else {
            StockLevel::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_level_boundaries() {
        assert_eq!(StockLevel::from_quantity(51), StockLevel::Healthy);
        assert_eq!(StockLevel::from_quantity(50), StockLevel::Low);
        assert_eq!(StockLevel::from_quantity(10), StockLevel::Low);
        assert_eq!(StockLevel::from_quantity(9), StockLevel::Critical);
        assert_eq!(StockLevel::from_quantity(0), StockLevel::Critical);
    }

    #[test]
    fn delivery_progress_defaults() {
        assert_eq!(DeliveryStatus::Delivered.default_progress(), 100);
        assert_eq!(DeliveryStatus::Shipped.default_progress(), 65);
        assert_eq!(DeliveryStatus::Pending.default_progress(), 0);
        assert_eq!(DeliveryStatus::Canceled.default_progress(), 0);
    }

    #[test]
    fn parses_statuses_case_insensitively() {
        assert_eq!("PAID".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!("cancelled".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::Canceled);
        assert_eq!("books".parse::<Category>().unwrap(), Category::Books);
        assert!("gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn statuses_serialize_lowercase() {
        let json = serde_json::to_string(&DeliveryStatus::Delivered).unwrap();
        assert_eq!(json, "\"delivered\"");
        let json = serde_json::to_string(&Feedback::Unhappy).unwrap();
        assert_eq!(json, "\"unhappy\"");
    }
}
