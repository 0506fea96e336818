use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read or write the catalogue file: {0}")]
    Io(#[from] std::io::Error),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("No product with id '{0}' exists in the catalogue.")]
    UnknownProduct(String),

    #[error("Order amount for {quantity} x {price} exceeds the supported range.")]
    AmountOverflow { price: rust_decimal::Decimal, quantity: u32 },

    #[error("Page size must be at least 1.")]
    InvalidPageSize,
}
