//! Small shared pieces for the aggregation views.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// One labeled value in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Sums `value` per key, keeping first-appearance order so descending sorts
/// resolve ties by input order.
pub(crate) fn sum_by<T, K, FK, FV>(rows: &[T], mut key: FK, mut value: FV) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> f64,
{
    let mut order: Vec<K> = Vec::new();
    let mut sums: HashMap<K, f64> = HashMap::new();
    for row in rows {
        let k = key(row);
        if !sums.contains_key(&k) {
            order.push(k.clone());
        }
        *sums.entry(k).or_default() += value(row);
    }
    order
        .into_iter()
        .map(|k| {
            let v = sums[&k];
            (k, v)
        })
        .collect()
}

/// Stable descending sort; ties keep their existing (input) order.
pub(crate) fn sort_desc_by<T, F>(items: &mut [T], mut rank: F)
where
    F: FnMut(&T) -> f64,
{
    items.sort_by(|a, b| {
        let (ra, rb) = (rank(a), rank(b));
        rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
    });
}
