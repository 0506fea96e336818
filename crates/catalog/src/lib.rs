//! # StorePulse Catalog
//!
//! The entity store behind the dashboard: the product and order collections, their JSON data
//! file, validated creation of new records, and the list-view queries (search, sort, pages).

pub mod error;
pub mod forms;
pub mod seed;
pub mod store;
pub mod table;

pub use error::CatalogError;
pub use forms::{NewOrder, NewProduct};
pub use store::Catalog;
pub use table::{
    in_categories, paginate, OrderColumn, Page, ProductColumn, SortSpec, TableQuery, Tabular,
};
