//! Revenue section
//!
//! Monthly trend, country leaderboard, and day-of-week breakdown

use super::super::state::DashboardState;
use super::super::utils::format_money;
use super::charts::{self, BarItem};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn render_revenue(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Percentage(40)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    charts::render_trend_chart(
        f,
        top[0],
        "MONTHLY REVENUE",
        &state.view.monthly_revenue,
        Color::Cyan,
        format_money,
    );

    let country_rows: Vec<(String, f64)> = state
        .view
        .top_countries
        .iter()
        .map(|item| (item.label.clone(), item.value))
        .collect();
    charts::render_meter_rows(
        f,
        top[1],
        "TOP COUNTRIES",
        &country_rows,
        Color::LightGreen,
        format_money,
    );

    let weekday_bars: Vec<BarItem> = state
        .view
        .weekday_revenue
        .iter()
        .map(|item| BarItem {
            label: item.label.chars().take(3).collect(),
            value: item.value.round() as u64,
            text: format_money(item.value),
        })
        .collect();
    charts::render_value_bars(
        f,
        rows[1],
        "REVENUE BY DAY OF WEEK",
        &weekday_bars,
        Color::LightBlue,
    );
}
