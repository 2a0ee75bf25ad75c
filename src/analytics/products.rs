//! Product leaderboards.
//!
//! Products are keyed by (stock code, description) because the source data
//! reuses stock codes across slightly different description strings; the two
//! leaderboards rank the same grouped stats by different metrics.

use std::collections::HashMap;

use crate::analytics::series::sort_desc_by;
use crate::data::Transaction;

/// Aggregate for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStat {
    pub stock_code: String,
    pub description: String,
    pub revenue: f64,
    pub quantity: i64,
}

impl ProductStat {
    /// Display label, truncated the way the product charts expect. The full
    /// description stays available for detail panes.
    pub fn short_label(&self, width: usize) -> String {
        truncate_label(&self.description, width)
    }
}

pub fn top_products_by_revenue(rows: &[&Transaction], limit: usize) -> Vec<ProductStat> {
    let mut stats = product_stats(rows);
    sort_desc_by(&mut stats, |p| p.revenue);
    stats.truncate(limit);
    stats
}

pub fn top_products_by_quantity(rows: &[&Transaction], limit: usize) -> Vec<ProductStat> {
    let mut stats = product_stats(rows);
    sort_desc_by(&mut stats, |p| p.quantity as f64);
    stats.truncate(limit);
    stats
}

/// Grouped per-product sums in first-appearance order.
fn product_stats(rows: &[&Transaction]) -> Vec<ProductStat> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut totals: HashMap<(String, String), (f64, i64)> = HashMap::new();
    for t in rows {
        let key = (t.stock_code.clone(), t.description.clone());
        if !totals.contains_key(&key) {
            order.push(key.clone());
        }
        let entry = totals.entry(key).or_insert((0.0, 0));
        entry.0 += t.total_price;
        entry.1 += t.quantity;
    }
    order
        .into_iter()
        .map(|key| {
            let (revenue, quantity) = totals[&key];
            ProductStat {
                stock_code: key.0,
                description: key.1,
                revenue,
                quantity,
            }
        })
        .collect()
}

fn truncate_label(description: &str, width: usize) -> String {
    if description.chars().count() > width {
        let mut short: String = description.chars().take(width).collect();
        short.push_str("...");
        short
    } else {
        description.to_string()
    }
}
