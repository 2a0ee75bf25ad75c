//! Customers section
//!
//! Top-spender leaderboard and the purchase-frequency histogram

use super::super::state::DashboardState;
use super::super::utils::{format_count, format_money};
use super::charts::{self, BarItem};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn render_customers(f: &mut Frame, area: Rect, state: &DashboardState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let customer_rows: Vec<(String, f64)> = state
        .view
        .top_customers
        .iter()
        .map(|item| (item.label.clone(), item.value))
        .collect();
    charts::render_meter_rows(
        f,
        halves[0],
        "TOP CUSTOMERS BY SPEND",
        &customer_rows,
        Color::LightGreen,
        format_money,
    );

    let histogram_bars: Vec<BarItem> = state
        .view
        .frequency_histogram
        .iter()
        .map(|bucket| BarItem {
            label: bucket.label(),
            value: bucket.count as u64,
            text: format_count(bucket.count),
        })
        .collect();
    charts::render_value_bars(
        f,
        halves[1],
        "PURCHASES PER CUSTOMER",
        &histogram_bars,
        Color::LightBlue,
    );
}
