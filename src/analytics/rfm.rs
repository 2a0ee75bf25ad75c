//! Segment views over the RFM table.
//!
//! These run on the whole customer base; the dashboard's date and country
//! filters apply to transactions only.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analytics::kpi::share;
use crate::analytics::series::{LabeledValue, sort_desc_by, sum_by};
use crate::data::RfmProfile;

/// Customers per segment, descending; ties keep input order.
pub fn segment_counts(profiles: &[RfmProfile]) -> Vec<(String, usize)> {
    let mut counted = sum_by(profiles, |p| p.segment.clone(), |_| 1.0);
    sort_desc_by(&mut counted, |(_, n)| *n);
    counted
        .into_iter()
        .map(|(segment, n)| (segment, n as usize))
        .collect()
}

/// Lifetime spend (Monetary) summed per segment, descending.
pub fn segment_revenue(profiles: &[RfmProfile]) -> Vec<LabeledValue> {
    let mut out: Vec<LabeledValue> = sum_by(profiles, |p| p.segment.clone(), |p| p.monetary)
        .into_iter()
        .map(|(label, value)| LabeledValue { label, value })
        .collect();
    sort_desc_by(&mut out, |s| s.value);
    out
}

/// One row of the segment summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSummary {
    pub segment: String,
    pub count: usize,
    pub avg_recency: f64,
    pub avg_frequency: f64,
    pub avg_monetary: f64,
    pub total_revenue: f64,
    /// Segment revenue as a percent of all segments' revenue.
    pub revenue_share: f64,
}

/// Per-segment means and totals, sorted by total revenue descending. The
/// revenue shares sum to 100 across segments (within float tolerance).
pub fn segment_summaries(profiles: &[RfmProfile]) -> Vec<SegmentSummary> {
    struct Acc {
        count: usize,
        recency: f64,
        frequency: f64,
        monetary: f64,
    }

    let mut order: Vec<String> = Vec::new();
    let mut sums: std::collections::HashMap<String, Acc> = std::collections::HashMap::new();
    for p in profiles {
        if !sums.contains_key(&p.segment) {
            order.push(p.segment.clone());
        }
        let acc = sums.entry(p.segment.clone()).or_insert(Acc {
            count: 0,
            recency: 0.0,
            frequency: 0.0,
            monetary: 0.0,
        });
        acc.count += 1;
        acc.recency += p.recency as f64;
        acc.frequency += p.frequency as f64;
        acc.monetary += p.monetary;
    }

    let grand_total: f64 = profiles.iter().map(|p| p.monetary).sum();
    let mut out: Vec<SegmentSummary> = order
        .into_iter()
        .map(|segment| {
            let acc = &sums[&segment];
            let n = acc.count as f64;
            SegmentSummary {
                segment,
                count: acc.count,
                avg_recency: acc.recency / n,
                avg_frequency: acc.frequency / n,
                avg_monetary: acc.monetary / n,
                total_revenue: acc.monetary,
                revenue_share: share(acc.monetary, grand_total),
            }
        })
        .collect();
    sort_desc_by(&mut out, |s| s.total_revenue);
    out
}

/// Owned point for the recency/monetary scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub recency: f64,
    pub frequency: f64,
    pub monetary: f64,
    pub score: f64,
    pub segment: String,
}

impl From<&RfmProfile> for ScatterPoint {
    fn from(p: &RfmProfile) -> Self {
        Self {
            recency: p.recency as f64,
            frequency: p.frequency as f64,
            monetary: p.monetary,
            score: p.rfm_score,
            segment: p.segment.clone(),
        }
    }
}

/// Reproducible sample of at most `cap` profiles for the scatter. The seed is
/// fixed so successive renders plot the same points.
pub fn scatter_sample(profiles: &[RfmProfile], cap: usize, seed: u64) -> Vec<&RfmProfile> {
    let amount = cap.min(profiles.len());
    if amount == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, profiles.len(), amount)
        .into_iter()
        .map(|i| &profiles[i])
        .collect()
}

/// Cut points splitting the observed score span into three equal bands; the
/// scatter colors points by band. `None` when there are no points.
pub fn score_bands(points: &[ScatterPoint]) -> Option<(f64, f64)> {
    let mut scores = points.iter().map(|p| p.score);
    let first = scores.next()?;
    let (min, max) = scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
    let step = (max - min) / 3.0;
    Some((min + step, min + 2.0 * step))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u64, segment: &str, monetary: f64) -> RfmProfile {
        RfmProfile {
            customer_id: id,
            recency: 30,
            frequency: 4,
            monetary,
            rfm_score: 7.0,
            segment: segment.into(),
        }
    }

    #[test]
    fn test_two_segments_four_customers() {
        let profiles = vec![
            profile(1, "Champions", 500.0),
            profile(2, "Lost", 20.0),
            profile(3, "Champions", 300.0),
            profile(4, "Lost", 10.0),
        ];

        let counts = segment_counts(&profiles);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 4);

        let revenue = segment_revenue(&profiles);
        assert_eq!(revenue.len(), 2);
        assert_eq!(revenue[0].label, "Champions");
        let total: f64 = revenue.iter().map(|s| s.value).sum();
        assert!((total - 830.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_summaries_sorted_with_shares() {
        let profiles = vec![
            RfmProfile {
                customer_id: 1,
                recency: 10,
                frequency: 8,
                monetary: 600.0,
                rfm_score: 11.0,
                segment: "Champions".into(),
            },
            RfmProfile {
                customer_id: 2,
                recency: 20,
                frequency: 6,
                monetary: 200.0,
                rfm_score: 9.0,
                segment: "Champions".into(),
            },
            RfmProfile {
                customer_id: 3,
                recency: 180,
                frequency: 1,
                monetary: 200.0,
                rfm_score: 3.0,
                segment: "Lost".into(),
            },
        ];

        let summaries = segment_summaries(&profiles);
        assert_eq!(summaries[0].segment, "Champions");
        assert_eq!(summaries[0].count, 2);
        assert!((summaries[0].avg_recency - 15.0).abs() < 1e-9);
        assert!((summaries[0].avg_monetary - 400.0).abs() < 1e-9);
        assert!((summaries[0].revenue_share - 80.0).abs() < 1e-9);

        let share_sum: f64 = summaries.iter().map(|s| s.revenue_share).sum();
        assert!((share_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_segment_summaries_empty() {
        assert!(segment_summaries(&[]).is_empty());
    }

    #[test]
    fn test_scatter_sample_reproducible_and_capped() {
        let profiles: Vec<RfmProfile> = (0..500)
            .map(|i| profile(i, "Loyal", i as f64))
            .collect();

        let a = scatter_sample(&profiles, 100, 42);
        let b = scatter_sample(&profiles, 100, 42);
        assert_eq!(a.len(), 100);
        let ids_a: Vec<u64> = a.iter().map(|p| p.customer_id).collect();
        let ids_b: Vec<u64> = b.iter().map(|p| p.customer_id).collect();
        assert_eq!(ids_a, ids_b);

        // Cap larger than the table returns every profile.
        let all = scatter_sample(&profiles, 1000, 42);
        assert_eq!(all.len(), 500);
    }

    #[test]
    fn test_scatter_sample_empty_table() {
        assert!(scatter_sample(&[], 1000, 42).is_empty());
    }

    #[test]
    fn test_score_bands_split_span() {
        let points: Vec<ScatterPoint> = [3.0, 6.0, 12.0]
            .iter()
            .map(|&score| ScatterPoint {
                recency: 0.0,
                frequency: 0.0,
                monetary: 0.0,
                score,
                segment: "Loyal".into(),
            })
            .collect();
        let (low, mid) = score_bands(&points).unwrap();
        assert!((low - 6.0).abs() < 1e-9);
        assert!((mid - 9.0).abs() < 1e-9);
        assert!(score_bands(&[]).is_none());
    }
}
