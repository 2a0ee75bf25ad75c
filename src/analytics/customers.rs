//! Customer leaderboards and the purchase-frequency histogram.

use std::collections::{HashMap, HashSet};

use crate::analytics::series::{LabeledValue, sort_desc_by, sum_by};
use crate::data::Transaction;

/// The `limit` highest-revenue customers, descending, labeled `C-{id}`.
pub fn top_customers(rows: &[&Transaction], limit: usize) -> Vec<LabeledValue> {
    let mut out: Vec<LabeledValue> = sum_by(rows, |t| t.customer_id, |t| t.total_price)
        .into_iter()
        .map(|(id, value)| LabeledValue::new(format!("C-{id}"), value))
        .collect();
    sort_desc_by(&mut out, |c| c.value);
    out.truncate(limit);
    out
}

/// One bar of the frequency histogram; `start..=end` transaction counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBucket {
    pub start: u64,
    pub end: u64,
    pub count: usize,
}

impl HistogramBucket {
    pub fn label(&self) -> String {
        if self.start == self.end {
            self.start.to_string()
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }
}

/// Distribution of distinct-invoice counts per customer over at most
/// `max_buckets` equal-width integer buckets spanning the observed range.
pub fn purchase_frequency_histogram(
    rows: &[&Transaction],
    max_buckets: usize,
) -> Vec<HistogramBucket> {
    let mut invoices: HashMap<u64, HashSet<&str>> = HashMap::new();
    for t in rows {
        invoices
            .entry(t.customer_id)
            .or_default()
            .insert(t.invoice_no.as_str());
    }
    let counts: Vec<u64> = invoices.values().map(|set| set.len() as u64).collect();
    if counts.is_empty() || max_buckets == 0 {
        return Vec::new();
    }

    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    let span = max - min + 1;
    let width = span.div_ceil(max_buckets as u64).max(1);
    let bucket_count = span.div_ceil(width) as usize;

    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| {
            let start = min + i as u64 * width;
            HistogramBucket {
                start,
                end: (start + width - 1).min(max),
                count: 0,
            }
        })
        .collect();
    for count in counts {
        buckets[((count - min) / width) as usize].count += 1;
    }
    buckets
}
