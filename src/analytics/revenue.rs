//! Revenue breakdowns: by month, by country, by weekday.

use chrono::Weekday;

use crate::analytics::series::{LabeledValue, sort_desc_by, sum_by};
use crate::data::Transaction;

/// Revenue per calendar month, chronological. Months with no rows in the
/// filtered set simply do not appear.
pub fn monthly_revenue(rows: &[&Transaction]) -> Vec<LabeledValue> {
    let mut out: Vec<LabeledValue> = sum_by(rows, |t| t.year_month(), |t| t.total_price)
        .into_iter()
        .map(|(label, value)| LabeledValue { label, value })
        .collect();
    // YYYY-MM sorts chronologically as text.
    out.sort_by(|a, b| a.label.cmp(&b.label));
    out
}

/// The `limit` highest-revenue countries, descending.
pub fn top_countries(rows: &[&Transaction], limit: usize) -> Vec<LabeledValue> {
    let mut out: Vec<LabeledValue> = sum_by(rows, |t| t.country.clone(), |t| t.total_price)
        .into_iter()
        .map(|(label, value)| LabeledValue { label, value })
        .collect();
    sort_desc_by(&mut out, |c| c.value);
    out.truncate(limit);
    out
}

/// Revenue per weekday: always exactly seven entries, Monday through Sunday,
/// zero where the filtered set has no rows.
pub fn weekday_revenue(rows: &[&Transaction]) -> Vec<LabeledValue> {
    let mut sums = [0.0f64; 7];
    for t in rows {
        sums[t.weekday().num_days_from_monday() as usize] += t.total_price;
    }
    WEEKDAYS
        .iter()
        .zip(sums)
        .map(|(day, value)| LabeledValue::new(day_name(*day), value))
        .collect()
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
