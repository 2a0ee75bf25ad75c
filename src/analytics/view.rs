//! The assembled view-model.
//!
//! `build_dashboard_view` is the whole dashboard as one pure function of the
//! loaded tables and the current filter; the UI shell re-runs it on every
//! filter change and only draws the result.

use crate::analytics::customers::{self, HistogramBucket};
use crate::analytics::filter::{self, DashboardFilter};
use crate::analytics::kpi::{self, KpiSummary};
use crate::analytics::products::{self, ProductStat};
use crate::analytics::revenue;
use crate::analytics::rfm::{self, ScatterPoint, SegmentSummary};
use crate::analytics::series::LabeledValue;
use crate::analytics::time;
use crate::consts::cli_consts::views;
use crate::data::{Tables, Transaction};

/// Everything one render pass consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub kpis: KpiSummary,
    /// Revenue across the whole table, before any filter.
    pub base_revenue: f64,
    pub monthly_revenue: Vec<LabeledValue>,
    pub top_countries: Vec<LabeledValue>,
    pub weekday_revenue: Vec<LabeledValue>,
    pub top_products_by_revenue: Vec<ProductStat>,
    pub top_products_by_quantity: Vec<ProductStat>,
    pub top_customers: Vec<LabeledValue>,
    pub frequency_histogram: Vec<HistogramBucket>,
    pub segment_counts: Vec<(String, usize)>,
    pub segment_revenue: Vec<LabeledValue>,
    pub segment_summaries: Vec<SegmentSummary>,
    pub scatter: Vec<ScatterPoint>,
    pub hourly_revenue: Vec<(u32, f64)>,
    pub monthly_transactions: Vec<LabeledValue>,
    /// Line rows surviving the filter, for the sidebar row counter.
    pub filtered_rows: usize,
    pub total_rows: usize,
}

/// Computes the full aggregation battery. Aggregates are never cached; this
/// runs from scratch on every call and tolerates empty inputs throughout.
pub fn build_dashboard_view(tables: &Tables, filter: &DashboardFilter) -> DashboardView {
    let filtered = filter::filter_transactions(&tables.transactions, filter);
    let all: Vec<&Transaction> = tables.transactions.iter().collect();

    DashboardView {
        kpis: kpi::kpi_summary(&filtered, &all),
        base_revenue: kpi::total_revenue(&all),
        monthly_revenue: revenue::monthly_revenue(&filtered),
        top_countries: revenue::top_countries(&filtered, views::TOP_N),
        weekday_revenue: revenue::weekday_revenue(&filtered),
        top_products_by_revenue: products::top_products_by_revenue(&filtered, views::TOP_N),
        top_products_by_quantity: products::top_products_by_quantity(&filtered, views::TOP_N),
        top_customers: customers::top_customers(&filtered, views::TOP_CUSTOMERS),
        frequency_histogram: customers::purchase_frequency_histogram(
            &filtered,
            views::HISTOGRAM_BUCKETS,
        ),
        segment_counts: rfm::segment_counts(&tables.rfm),
        segment_revenue: rfm::segment_revenue(&tables.rfm),
        segment_summaries: rfm::segment_summaries(&tables.rfm),
        scatter: rfm::scatter_sample(
            &tables.rfm,
            views::SCATTER_SAMPLE_SIZE,
            views::SCATTER_SAMPLE_SEED,
        )
        .into_iter()
        .map(ScatterPoint::from)
        .collect(),
        hourly_revenue: time::hourly_revenue(&filtered),
        monthly_transactions: time::monthly_transaction_counts(&filtered),
        filtered_rows: filtered.len(),
        total_rows: tables.transactions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::filter::{CountryFilter, DateRange};
    use crate::data::RfmProfile;
    use chrono::{NaiveDate, NaiveDateTime};

    fn tx(invoice: &str, date: &str, country: &str, quantity: i64, unit: f64) -> Transaction {
        Transaction {
            invoice_no: invoice.into(),
            stock_code: "85123A".into(),
            description: "LANTERN".into(),
            quantity,
            unit_price: unit,
            total_price: quantity as f64 * unit,
            customer_id: 17850,
            country: country.into(),
            invoice_date: NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

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

    fn uk_tables() -> Tables {
        Tables {
            transactions: vec![
                tx("536365", "2011-01-05 10:00:00", "UK", 2, 3.0),
                tx("536366", "2011-02-10 11:00:00", "UK", 1, 10.0),
                tx("536367", "2011-03-15 12:00:00", "UK", 4, 0.5),
            ],
            rfm: vec![
                profile(1, "Champions", 500.0),
                profile(2, "Lost", 20.0),
                profile(3, "Champions", 300.0),
                profile(4, "Lost", 10.0),
            ],
            rfm_orphans: 0,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_covering_range_equals_unfiltered() {
        let tables = uk_tables();
        let covering = DashboardFilter {
            dates: Some(DateRange::new(day("2011-01-01"), day("2011-12-31"))),
            country: CountryFilter::All,
        };

        let filtered = build_dashboard_view(&tables, &covering);
        let unfiltered = build_dashboard_view(&tables, &DashboardFilter::default());
        assert_eq!(filtered, unfiltered);

        // Revenue equals the sum of quantity x unit price across the rows.
        let expected = 2.0 * 3.0 + 10.0 + 4.0 * 0.5;
        assert!((filtered.kpis.total_revenue - expected).abs() < 1e-9);
        assert!((filtered.kpis.revenue_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_filtered_revenue_never_exceeds_unfiltered() {
        let tables = uk_tables();
        let unfiltered = build_dashboard_view(&tables, &DashboardFilter::default());
        let ranges = [
            ("2011-01-01", "2011-01-31"),
            ("2011-01-01", "2011-02-28"),
            ("2011-02-01", "2011-12-31"),
            ("2012-01-01", "2012-12-31"),
        ];
        for (start, end) in ranges {
            let view = build_dashboard_view(
                &tables,
                &DashboardFilter {
                    dates: Some(DateRange::new(day(start), day(end))),
                    country: CountryFilter::All,
                },
            );
            assert!(view.kpis.total_revenue <= unfiltered.kpis.total_revenue);
            assert!(view.kpis.revenue_share >= 0.0 && view.kpis.revenue_share <= 100.0);
        }
    }

    #[test]
    fn test_zero_match_country_yields_empty_view() {
        let tables = uk_tables();
        let view = build_dashboard_view(
            &tables,
            &DashboardFilter {
                dates: None,
                country: CountryFilter::Only("Atlantis".into()),
            },
        );

        assert_eq!(view.kpis.transaction_count, 0);
        assert_eq!(view.kpis.total_revenue, 0.0);
        assert_eq!(view.kpis.avg_order_value, 0.0);
        assert!(view.monthly_revenue.is_empty());
        assert!(view.top_countries.is_empty());
        assert!(view.top_products_by_revenue.is_empty());
        assert!(view.top_customers.is_empty());
        assert!(view.frequency_histogram.is_empty());
        assert!(view.hourly_revenue.is_empty());
        assert!(view.monthly_transactions.is_empty());
        assert_eq!(view.filtered_rows, 0);

        // Weekday stays a full week of zeroes, and the segment views still
        // describe the whole customer base.
        assert_eq!(view.weekday_revenue.len(), 7);
        assert!(view.weekday_revenue.iter().all(|d| d.value == 0.0));
        assert_eq!(view.segment_counts.len(), 2);
    }

    #[test]
    fn test_segment_views_from_rfm_table() {
        let tables = uk_tables();
        let view = build_dashboard_view(&tables, &DashboardFilter::default());

        let customer_total: usize = view.segment_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(customer_total, 4);
        assert_eq!(view.segment_revenue.len(), 2);
        let revenue_total: f64 = view.segment_revenue.iter().map(|s| s.value).sum();
        assert!((revenue_total - 830.0).abs() < 1e-9);
        assert_eq!(view.scatter.len(), 4);
    }
}
