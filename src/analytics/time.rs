//! Time-of-day and per-month activity.

use std::collections::{HashMap, HashSet};

use crate::analytics::series::{LabeledValue, sum_by};
use crate::data::Transaction;

/// Revenue per hour of day, ascending. Only hours present in the filtered
/// set appear; an all-daytime dataset yields no midnight entries.
pub fn hourly_revenue(rows: &[&Transaction]) -> Vec<(u32, f64)> {
    let mut out: Vec<(u32, f64)> = sum_by(rows, |t| t.hour(), |t| t.total_price);
    out.sort_by_key(|(hour, _)| *hour);
    out
}

/// Distinct invoices per calendar month, chronological.
pub fn monthly_transaction_counts(rows: &[&Transaction]) -> Vec<LabeledValue> {
    let mut invoices: HashMap<String, HashSet<&str>> = HashMap::new();
    for t in rows {
        invoices
            .entry(t.year_month())
            .or_default()
            .insert(t.invoice_no.as_str());
    }
    let mut out: Vec<LabeledValue> = invoices
        .into_iter()
        .map(|(label, set)| LabeledValue::new(label, set.len() as f64))
        .collect();
    out.sort_by(|a, b| a.label.cmp(&b.label));
    out
}
