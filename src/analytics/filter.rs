//! Filter state applied to the transaction table before aggregation.
//!
//! Filtering is date-granular (the invoice's date, not its time) and both
//! ends of the range are inclusive. The RFM table is never filtered; segments
//! always describe the full customer base.

use std::fmt;

use chrono::NaiveDate;

use crate::data::Transaction;

/// Inclusive date range, normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Builds a range from picker-style endpoints. Anything short of two
    /// endpoints means no date filtering; the fallback is logged because a
    /// lone `--from` or `--to` is almost always a mistake.
    pub fn from_endpoints(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(a), Some(b)) => Some(Self::new(a, b)),
            (None, None) => None,
            _ => {
                log::warn!("incomplete date range, falling back to unfiltered data");
                None
            }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// Country selection; `All` is the sentinel matching every row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountryFilter {
    #[default]
    All,
    Only(String),
}

impl CountryFilter {
    pub fn matches(&self, country: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(name) => name == country,
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::All => write!(f, "All"),
            CountryFilter::Only(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardFilter {
    pub dates: Option<DateRange>,
    pub country: CountryFilter,
}

impl DashboardFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.dates.is_none() && self.country == CountryFilter::All
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.dates
            .map_or(true, |range| range.contains(transaction.invoice_day()))
            && self.country.matches(&transaction.country)
    }
}

/// Borrows the rows that pass the filter; every aggregation runs on the
/// resulting slice.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &DashboardFilter,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| filter.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tx(date: &str, country: &str) -> Transaction {
        Transaction {
            invoice_no: "536365".into(),
            stock_code: "85123A".into(),
            description: "LANTERN".into(),
            quantity: 1,
            unit_price: 1.0,
            total_price: 1.0,
            customer_id: 17850,
            country: country.into(),
            invoice_date: NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = DateRange::new(day("2011-01-10"), day("2011-01-20"));
        assert!(range.contains(day("2011-01-10")));
        assert!(range.contains(day("2011-01-20")));
        assert!(!range.contains(day("2011-01-09")));
        assert!(!range.contains(day("2011-01-21")));
    }

    #[test]
    fn test_range_normalizes_swapped_endpoints() {
        let range = DateRange::new(day("2011-01-20"), day("2011-01-10"));
        assert_eq!(range.start(), day("2011-01-10"));
        assert_eq!(range.end(), day("2011-01-20"));
    }

    #[test]
    fn test_from_endpoints_requires_both_ends() {
        assert!(DateRange::from_endpoints(Some(day("2011-01-10")), Some(day("2011-01-20"))).is_some());
        assert!(DateRange::from_endpoints(Some(day("2011-01-10")), None).is_none());
        assert!(DateRange::from_endpoints(None, Some(day("2011-01-20"))).is_none());
        assert!(DateRange::from_endpoints(None, None).is_none());
    }

    #[test]
    fn test_country_filter_matching() {
        assert!(CountryFilter::All.matches("France"));
        assert!(CountryFilter::Only("France".into()).matches("France"));
        assert!(!CountryFilter::Only("France".into()).matches("Germany"));
    }

    #[test]
    fn test_filter_transactions_applies_both_dimensions() {
        let rows = vec![
            tx("2011-01-05 10:00:00", "United Kingdom"),
            tx("2011-01-15 10:00:00", "United Kingdom"),
            tx("2011-01-15 10:00:00", "France"),
            tx("2011-02-01 10:00:00", "United Kingdom"),
        ];
        let filter = DashboardFilter {
            dates: Some(DateRange::new(day("2011-01-10"), day("2011-01-31"))),
            country: CountryFilter::Only("United Kingdom".into()),
        };
        let kept = filter_transactions(&rows, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].invoice_day(), day("2011-01-15"));
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let rows = vec![
            tx("2011-01-05 10:00:00", "United Kingdom"),
            tx("2011-06-15 10:00:00", "France"),
        ];
        let kept = filter_transactions(&rows, &DashboardFilter::default());
        assert_eq!(kept.len(), 2);
        assert!(DashboardFilter::default().is_unfiltered());
    }
}
