//! Terminal rendering of the list views, stat cards, and order details.

use analytics::{OrderOverview, ProductInsight, SparkPoint, TrendDirection, sparkline::CANVAS};
use catalog::Page;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use core_types::{DeliveryStatus, Feedback, Order, PaymentStatus, Product, StockLevel};
use std::collections::HashMap;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// One bar glyph per point; taller bars for points nearer the top of the canvas.
pub fn sparkline_glyphs(points: &[SparkPoint]) -> String {
    let top = (BARS.len() - 1) as f64;
    points
        .iter()
        .map(|p| {
            let level = ((CANVAS - p.y) / CANVAS * top).round().clamp(0.0, top) as usize;
            BARS[level]
        })
        .collect()
}

fn trend_cell(trend: Option<TrendDirection>) -> Cell {
    match trend {
        Some(TrendDirection::Rising) => Cell::new("rising").fg(Color::Green),
        Some(TrendDirection::Falling) => Cell::new("falling").fg(Color::Red),
        Some(TrendDirection::Flat) => Cell::new("flat").fg(Color::Yellow),
        None => Cell::new("n/a").fg(Color::DarkGrey),
    }
}

fn stock_cell(product: &Product) -> Cell {
    let color = match product.stock_level() {
        StockLevel::Healthy => Color::Green,
        StockLevel::Low => Color::Yellow,
        StockLevel::Critical => Color::Red,
    };
    Cell::new(product.stock_quantity)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn feedback_cell(feedback: Option<Feedback>) -> Cell {
    match feedback {
        Some(Feedback::Happy) => Cell::new("happy").fg(Color::Green),
        Some(Feedback::Neutral) => Cell::new("neutral").fg(Color::Yellow),
        Some(Feedback::Unhappy) => Cell::new("unhappy").fg(Color::Red),
        None => Cell::new(""),
    }
}

fn payment_cell(status: PaymentStatus) -> Cell {
    let color = match status {
        PaymentStatus::Paid => Color::Green,
        PaymentStatus::Pending => Color::Yellow,
        PaymentStatus::Refunded => Color::Red,
    };
    Cell::new(status.as_str()).fg(color)
}

fn delivery_cell(status: DeliveryStatus) -> Cell {
    let color = match status {
        DeliveryStatus::Delivered => Color::Green,
        DeliveryStatus::Pending => Color::Yellow,
        DeliveryStatus::Shipped => Color::Blue,
        DeliveryStatus::Canceled => Color::Red,
    };
    Cell::new(status.as_str()).fg(color)
}

fn footer(page_index: usize, page_count: usize, filtered_rows: usize) -> String {
    format!(
        "Page {} of {} ({} row(s))",
        page_index + 1,
        page_count,
        filtered_rows
    )
}

pub fn products_table(page: &Page<'_, Product>, insights: &HashMap<String, ProductInsight>) -> String {
    let mut table = table();
    table.set_header(vec![
        "Product Name", "SKU", "Category", "Price", "Stock", "Status", "Feedback", "Sales", "Trend",
    ]);

    for product in &page.rows {
        let insight = insights.get(&product.id);
        let sparkline = insight
            .map(|i| sparkline_glyphs(&i.sparkline))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&product.name),
            Cell::new(&product.sku),
            Cell::new(product.category),
            Cell::new(format!("${:.2}", product.price)).set_alignment(CellAlignment::Right),
            stock_cell(product),
            if product.active {
                Cell::new("Active").fg(Color::Green)
            } else {
                Cell::new("Inactive").fg(Color::DarkGrey)
            },
            feedback_cell(product.satisfaction),
            Cell::new(sparkline),
            trend_cell(insight.and_then(|i| i.trend)),
        ]);
    }

    format!(
        "{table}\n{}",
        footer(page.page_index, page.page_count, page.filtered_rows)
    )
}

pub fn order_cards(overview: &OrderOverview) -> String {
    let mut table = table();
    table.set_header(vec!["Total Orders", "Delivered", "Pending", "Satisfaction"]);
    table.add_row(vec![
        Cell::new(overview.total),
        Cell::new(format!("{:.0}%", overview.delivered.percentage)).fg(Color::Green),
        Cell::new(overview.pending).fg(Color::Yellow),
        Cell::new(format!("{:.0}%", overview.satisfaction.percentage)),
    ]);
    table.to_string()
}

pub fn orders_table(page: &Page<'_, Order>) -> String {
    let mut table = table();
    table.set_header(vec![
        "Order ID", "Client", "Payment", "Delivery", "Total", "Progress", "Feedback",
    ]);

    for order in &page.rows {
        table.add_row(vec![
            Cell::new(&order.id),
            Cell::new(format!("[{}] {}", order.client_initials(), order.client_name)),
            payment_cell(order.payment_status),
            delivery_cell(order.delivery_status),
            Cell::new(format!("${:.2}", order.total_amount)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", order.delivery_progress)).set_alignment(CellAlignment::Right),
            feedback_cell(order.customer_feedback),
        ]);
    }

    format!(
        "{table}\n{}",
        footer(page.page_index, page.page_count, page.filtered_rows)
    )
}

pub fn order_detail(order: &Order) -> String {
    let mut summary = table();
    summary.add_row(vec![Cell::new("Order"), Cell::new(&order.id)]);
    summary.add_row(vec![Cell::new("Client"), Cell::new(&order.client_name)]);
    summary.add_row(vec![Cell::new("Address"), Cell::new(&order.delivery_address)]);
    summary.add_row(vec![Cell::new("Payment"), payment_cell(order.payment_status)]);
    summary.add_row(vec![Cell::new("Delivery"), delivery_cell(order.delivery_status)]);
    summary.add_row(vec![
        Cell::new("Progress"),
        Cell::new(format!("{}%", order.delivery_progress)),
    ]);
    summary.add_row(vec![
        Cell::new("Expected"),
        Cell::new(order.expected_delivery_date.format("%Y-%m-%d")),
    ]);
    summary.add_row(vec![
        Cell::new("Placed"),
        Cell::new(order.created_at.format("%Y-%m-%d %H:%M")),
    ]);

    let mut lines = table();
    lines.set_header(vec!["Product", "Quantity", "Unit Price", "Subtotal"]);
    for line in &order.lines {
        lines.add_row(vec![
            Cell::new(&line.product_name),
            Cell::new(line.quantity).set_alignment(CellAlignment::Right),
            Cell::new(format!("${:.2}", line.price)).set_alignment(CellAlignment::Right),
            Cell::new(match line.subtotal() {
                Some(subtotal) => format!("${subtotal:.2}"),
                None => "overflow".to_string(),
            })
            .set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "{summary}\n{lines}\nTotal Amount: ${:.2}",
        order.total_amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_follow_point_height() {
        let points = analytics::normalize(&[1.0, 5.0, 3.0]).unwrap();
        assert_eq!(sparkline_glyphs(&points), "▁█▅");
    }

    #[test]
    fn flat_series_draws_middle_bars() {
        let points = analytics::normalize(&[4.0, 4.0]).unwrap();
        assert_eq!(sparkline_glyphs(&points), "▅▅");
    }
}
