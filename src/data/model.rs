//! Typed rows for the two input tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// One line item from the cleaned transaction table.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub invoice_no: String,
    pub stock_code: String,
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// Line total; derived as quantity x unit price when the file has no
    /// `TotalPrice` column of its own.
    pub total_price: f64,
    pub customer_id: u64,
    pub country: String,
    pub invoice_date: NaiveDateTime,
}

impl Transaction {
    /// Calendar month of the invoice, `YYYY-MM`.
    pub fn year_month(&self) -> String {
        self.invoice_date.format("%Y-%m").to_string()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.invoice_date.hour()
    }

    pub fn weekday(&self) -> Weekday {
        self.invoice_date.weekday()
    }

    /// Date part of the invoice timestamp; range filtering is date-granular.
    pub fn invoice_day(&self) -> NaiveDate {
        self.invoice_date.date()
    }
}

/// One customer row from the RFM segmentation table.
#[derive(Debug, Clone, PartialEq)]
pub struct RfmProfile {
    pub customer_id: u64,
    /// Days since the customer's most recent purchase.
    pub recency: i64,
    /// Distinct purchase count over the customer's lifetime.
    pub frequency: u64,
    /// Lifetime spend.
    pub monetary: f64,
    /// Composite numeric score assigned by the upstream scoring step.
    pub rfm_score: f64,
    pub segment: String,
}

/// Both tables, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tables {
    pub transactions: Vec<Transaction>,
    pub rfm: Vec<RfmProfile>,
    /// RFM rows whose customer id never appears in the transaction table.
    /// Surfaced as a data-quality notice, never treated as an error.
    pub rfm_orphans: usize,
}

impl Tables {
    /// Earliest and latest invoice dates, if any rows were loaded.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut days = self.transactions.iter().map(Transaction::invoice_day);
        let first = days.next()?;
        let (min, max) = days.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }

    /// Distinct countries, sorted; the UI prepends the all-countries choice.
    pub fn countries(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for t in &self.transactions {
            if !out.contains(&t.country) {
                out.push(t.country.clone());
            }
        }
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str) -> Transaction {
        Transaction {
            invoice_no: "536365".into(),
            stock_code: "85123A".into(),
            description: "WHITE HANGING HEART T-LIGHT HOLDER".into(),
            quantity: 6,
            unit_price: 2.55,
            total_price: 15.3,
            customer_id: 17850,
            country: "United Kingdom".into(),
            invoice_date: NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    #[test]
    fn test_derived_calendar_fields() {
        let t = tx("2011-03-07 09:45:00");
        assert_eq!(t.year_month(), "2011-03");
        assert_eq!(t.hour(), 9);
        assert_eq!(t.weekday(), Weekday::Mon);
        assert_eq!(
            t.invoice_day(),
            NaiveDate::from_ymd_opt(2011, 3, 7).unwrap()
        );
    }

    #[test]
    fn test_date_span_covers_min_and_max() {
        let tables = Tables {
            transactions: vec![
                tx("2011-06-15 12:00:00"),
                tx("2010-12-01 08:26:00"),
                tx("2011-12-09 12:50:00"),
            ],
            rfm: vec![],
            rfm_orphans: 0,
        };
        let (lo, hi) = tables.date_span().unwrap();
        assert_eq!(lo, NaiveDate::from_ymd_opt(2010, 12, 1).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2011, 12, 9).unwrap());
    }

    #[test]
    fn test_date_span_empty_table() {
        assert_eq!(Tables::default().date_span(), None);
    }

    #[test]
    fn test_countries_sorted_distinct() {
        let mut a = tx("2011-01-01 10:00:00");
        a.country = "Germany".into();
        let b = tx("2011-01-02 10:00:00");
        let mut c = tx("2011-01-03 10:00:00");
        c.country = "Germany".into();
        let tables = Tables {
            transactions: vec![a, b, c],
            rfm: vec![],
            rfm_orphans: 0,
        };
        assert_eq!(tables.countries(), vec!["Germany", "United Kingdom"]);
    }
}
