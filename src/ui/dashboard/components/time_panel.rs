//! Time section
//!
//! Revenue by hour of day and transaction counts per month

use super::super::state::DashboardState;
use super::super::utils::format_money;
use super::charts::{self, BarItem};
use crate::analytics::LabeledValue;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn render_time(f: &mut Frame, area: Rect, state: &DashboardState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Only hours with at least one invoice become points on the curve.
    let hourly_series: Vec<LabeledValue> = state
        .view
        .hourly_revenue
        .iter()
        .map(|(hour, value)| LabeledValue::new(format!("{:02}:00", hour), *value))
        .collect();
    charts::render_trend_chart(
        f,
        halves[0],
        "REVENUE BY HOUR",
        &hourly_series,
        Color::LightBlue,
        format_money,
    );

    let monthly_bars: Vec<BarItem> = state
        .view
        .monthly_transactions
        .iter()
        .map(|item| BarItem {
            // "2011-03" reads fine as "11-03" on a narrow bar.
            label: item.label.chars().skip(2).collect(),
            value: item.value.round() as u64,
            text: format!("{:.0}", item.value),
        })
        .collect();
    charts::render_value_bars(
        f,
        halves[1],
        "TRANSACTIONS PER MONTH",
        &monthly_bars,
        Color::LightYellow,
    );
}
