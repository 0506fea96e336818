//! # StorePulse Analytics
//!
//! This crate derives the figures the dashboard displays: sales trend direction, sparkline
//! coordinates, and the count/percentage stat cards over products and orders.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of storage or
//!   rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every operation is a pure function of its input. Calls may run
//!   in any order or in parallel, and repeated calls return identical results.
//!
//! ## Public API
//!
//! - `classify_trend`, `normalize`, `summarize`: the three core operations.
//! - `AnalyticsEngine`: dashboard aggregates built on the core operations.
//! - `AnalyticsError`: the single `InvalidArgument` failure.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod series;
pub mod sparkline;
pub mod summary;
pub mod trend;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{OrderOverview, ProductInsight, ProductOverview};
pub use series::{median, MetricSeries};
pub use sparkline::{normalize, SparkPoint};
pub use summary::{summarize, SummaryStats};
pub use trend::{classify_trend, TrendDirection};
