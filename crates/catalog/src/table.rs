//! Filtering, sorting, and pagination for the product and order lists.

use crate::error::CatalogError;
use core_types::{Category, Order, Product};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A row type that can be shown in a list view.
pub trait Tabular {
    type Column: Copy;

    /// Ordering of two rows by one column, ascending.
    fn compare_by(&self, other: &Self, column: Self::Column) -> Ordering;

    /// Whether the row matches a lowercase free-text search.
    fn matches_search(&self, needle: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub column: C,
    pub descending: bool,
}

/// One request for a page of a list view.
#[derive(Debug, Clone)]
pub struct TableQuery<C> {
    /// Case-insensitive substring search.
    pub search: Option<String>,
    pub sort: Option<SortSpec<C>>,
    /// Zero-based.
    pub page_index: usize,
    pub page_size: usize,
}

impl<C> TableQuery<C> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: None,
            sort: None,
            page_index: 0,
            page_size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    pub rows: Vec<&'a T>,
    pub page_index: usize,
    pub page_count: usize,
    /// Rows left after filtering, across all pages.
    pub filtered_rows: usize,
}

/// Runs `query` over `rows`: search filter, then a stable sort, then the page slice.
///
/// An out-of-range page yields no rows. `page_count` is at least 1.
pub fn paginate<'a, T: Tabular>(
    rows: impl IntoIterator<Item = &'a T>,
    query: &TableQuery<T::Column>,
) -> Result<Page<'a, T>, CatalogError> {
    if query.page_size == 0 {
        return Err(CatalogError::InvalidPageSize);
    }

    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<&T> = rows
        .into_iter()
        .filter(|row| needle.as_deref().is_none_or(|n| row.matches_search(n)))
        .collect();

    if let Some(spec) = query.sort {
        filtered.sort_by(|a, b| {
            let ordering = a.compare_by(b, spec.column);
            if spec.descending { ordering.reverse() } else { ordering }
        });
    }

    let filtered_rows = filtered.len();
    let page_count = filtered_rows.div_ceil(query.page_size).max(1);
    let rows = filtered
        .into_iter()
        .skip(query.page_index.saturating_mul(query.page_size))
        .take(query.page_size)
        .collect();

    Ok(Page {
        rows,
        page_index: query.page_index,
        page_count,
        filtered_rows,
    })
}

/// Narrows products to a set of categories. An empty set keeps everything.
pub fn in_categories<'a>(
    products: &'a [Product],
    categories: &'a BTreeSet<Category>,
) -> impl Iterator<Item = &'a Product> + 'a {
    products
        .iter()
        .filter(move |p| categories.is_empty() || categories.contains(&p.category))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductColumn {
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Active,
}

impl Tabular for Product {
    type Column = ProductColumn;

    fn compare_by(&self, other: &Self, column: ProductColumn) -> Ordering {
        match column {
            ProductColumn::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            ProductColumn::Sku => self.sku.cmp(&other.sku),
            ProductColumn::Category => self.category.as_str().cmp(other.category.as_str()),
            ProductColumn::Price => self.price.cmp(&other.price),
            ProductColumn::Stock => self.stock_quantity.cmp(&other.stock_quantity),
            ProductColumn::Active => self.active.cmp(&other.active),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderColumn {
    Id,
    Client,
    Payment,
    Delivery,
    Total,
    Progress,
}

impl Tabular for Order {
    type Column = OrderColumn;

    fn compare_by(&self, other: &Self, column: OrderColumn) -> Ordering {
        match column {
            OrderColumn::Id => self.id.cmp(&other.id),
            OrderColumn::Client => self
                .client_name
                .to_lowercase()
                .cmp(&other.client_name.to_lowercase()),
            OrderColumn::Payment => self.payment_status.as_str().cmp(other.payment_status.as_str()),
            OrderColumn::Delivery => self
                .delivery_status
                .as_str()
                .cmp(other.delivery_status.as_str()),
            OrderColumn::Total => self.total_amount.cmp(&other.total_amount),
            OrderColumn::Progress => self.delivery_progress.cmp(&other.delivery_progress),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.client_name.to_lowercase().contains(needle)
    }
}
