//! Top-line metrics.
//!
//! "Transaction" here always means a distinct invoice number; one invoice
//! spanning twenty line rows is one transaction.

use std::collections::HashSet;

use crate::data::Transaction;

/// The headline numbers plus each one's share of the unfiltered total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub transaction_count: usize,
    pub customer_count: usize,
    /// Revenue per distinct invoice; 0 when there are no invoices.
    pub avg_order_value: f64,
    pub revenue_share: f64,
    pub transaction_share: f64,
    pub customer_share: f64,
}

pub fn total_revenue(rows: &[&Transaction]) -> f64 {
    rows.iter().map(|t| t.total_price).sum()
}

pub fn distinct_invoices(rows: &[&Transaction]) -> usize {
    rows.iter()
        .map(|t| t.invoice_no.as_str())
        .collect::<HashSet<_>>()
        .len()
}

pub fn distinct_customers(rows: &[&Transaction]) -> usize {
    rows.iter()
        .map(|t| t.customer_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Percent of `total` that `part` represents; 0 when there is no total.
pub fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

pub fn kpi_summary(filtered: &[&Transaction], all: &[&Transaction]) -> KpiSummary {
    let revenue = total_revenue(filtered);
    let transaction_count = distinct_invoices(filtered);
    let customer_count = distinct_customers(filtered);
    let avg_order_value = if transaction_count > 0 {
        revenue / transaction_count as f64
    } else {
        0.0
    };

    KpiSummary {
        total_revenue: revenue,
        transaction_count,
        customer_count,
        avg_order_value,
        revenue_share: share(revenue, total_revenue(all)),
        transaction_share: share(transaction_count as f64, distinct_invoices(all) as f64),
        customer_share: share(customer_count as f64, distinct_customers(all) as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn tx(invoice: &str, customer: u64, total: f64) -> Transaction {
        Transaction {
            invoice_no: invoice.into(),
            stock_code: "85123A".into(),
            description: "LANTERN".into(),
            quantity: 1,
            unit_price: total,
            total_price: total,
            customer_id: customer,
            country: "United Kingdom".into(),
            invoice_date: NaiveDateTime::parse_from_str("2011-01-05 10:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    #[test]
    fn test_invoice_counted_once_across_line_rows() {
        let rows = vec![
            tx("536365", 17850, 10.0),
            tx("536365", 17850, 5.0),
            tx("536366", 13047, 7.5),
        ];
        let refs: Vec<&Transaction> = rows.iter().collect();
        let kpis = kpi_summary(&refs, &refs);
        assert_eq!(kpis.transaction_count, 2);
        assert_eq!(kpis.customer_count, 2);
        assert!((kpis.total_revenue - 22.5).abs() < 1e-9);
    }

    #[test]
    fn test_avg_order_value_is_revenue_over_invoices() {
        let rows = vec![
            tx("536365", 17850, 10.0),
            tx("536365", 17850, 5.0),
            tx("536366", 13047, 9.0),
        ];
        let refs: Vec<&Transaction> = rows.iter().collect();
        let kpis = kpi_summary(&refs, &refs);
        assert!((kpis.avg_order_value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_zeroes_not_panics() {
        let rows = vec![tx("536365", 17850, 10.0)];
        let all: Vec<&Transaction> = rows.iter().collect();
        let kpis = kpi_summary(&[], &all);
        assert_eq!(kpis.transaction_count, 0);
        assert_eq!(kpis.avg_order_value, 0.0);
        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.revenue_share, 0.0);
    }

    #[test]
    fn test_shares_stay_within_percent_range() {
        let rows = vec![
            tx("536365", 17850, 10.0),
            tx("536366", 13047, 30.0),
            tx("536367", 12583, 60.0),
        ];
        let all: Vec<&Transaction> = rows.iter().collect();
        let some: Vec<&Transaction> = rows[..2].iter().collect();
        let kpis = kpi_summary(&some, &all);
        assert!(kpis.revenue_share >= 0.0 && kpis.revenue_share <= 100.0);
        assert!((kpis.revenue_share - 40.0).abs() < 1e-9);
        assert!((kpis.transaction_share - 2.0 / 3.0 * 100.0).abs() < 1e-9);

        let everything = kpi_summary(&all, &all);
        assert!((everything.revenue_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_zero_denominator() {
        assert_eq!(share(0.0, 0.0), 0.0);
        assert_eq!(share(5.0, 0.0), 0.0);
    }
}
