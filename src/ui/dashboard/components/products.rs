//! Products section
//!
//! Leaderboards by revenue and by units sold, ranked independently

use super::super::state::DashboardState;
use super::super::utils::format_money;
use super::charts;

use crate::analytics::products::ProductStat;
use crate::consts::cli_consts::views;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

pub fn render_products(f: &mut Frame, area: Rect, state: &DashboardState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    charts::render_meter_rows(
        f,
        halves[0],
        "TOP PRODUCTS BY REVENUE",
        &revenue_rows(&state.view.top_products_by_revenue),
        Color::LightGreen,
        format_money,
    );
    charts::render_meter_rows(
        f,
        halves[1],
        "TOP PRODUCTS BY UNITS",
        &quantity_rows(&state.view.top_products_by_quantity),
        Color::LightYellow,
        format_units,
    );
}

fn revenue_rows(products: &[ProductStat]) -> Vec<(String, f64)> {
    products
        .iter()
        .map(|product| {
            (
                product.short_label(views::PRODUCT_LABEL_WIDTH),
                product.revenue,
            )
        })
        .collect()
}

fn quantity_rows(products: &[ProductStat]) -> Vec<(String, f64)> {
    products
        .iter()
        .map(|product| {
            (
                product.short_label(views::PRODUCT_LABEL_WIDTH),
                product.quantity as f64,
            )
        })
        .collect()
}

fn format_units(value: f64) -> String {
    super::super::utils::format_count(value.round() as usize)
}
