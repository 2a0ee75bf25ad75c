//! Overview section
//!
//! KPI cards for the filtered slice, with the revenue trend underneath

use super::super::state::DashboardState;
use super::super::utils::{format_count, format_money, format_money_precise};
use super::charts;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the overview: four KPI cards and the monthly trend.
pub fn render_overview(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(area);

    render_kpi_cards(f, chunks[0], state);
    charts::render_trend_chart(
        f,
        chunks[1],
        "MONTHLY REVENUE",
        &state.view.monthly_revenue,
        Color::Cyan,
        format_money,
    );
}

fn render_kpi_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let kpis = &state.view.kpis;
    render_card(
        f,
        cards[0],
        "TOTAL REVENUE",
        format_money(kpis.total_revenue),
        format!("{:.1}% of total", kpis.revenue_share),
        Color::LightGreen,
    );
    render_card(
        f,
        cards[1],
        "TRANSACTIONS",
        format_count(kpis.transaction_count),
        format!("{:.1}% of total", kpis.transaction_share),
        Color::LightBlue,
    );
    render_card(
        f,
        cards[2],
        "CUSTOMERS",
        format_count(kpis.customer_count),
        format!("{:.1}% of total", kpis.customer_share),
        Color::LightYellow,
    );
    render_card(
        f,
        cards[3],
        "AVG ORDER VALUE",
        format_money_precise(kpis.avg_order_value),
        "Per Transaction".to_string(),
        Color::LightMagenta,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    caption: String,
    color: Color,
) {
    let lines = vec![
        Line::from(value).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(caption).style(Style::default().fg(Color::DarkGray)),
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title.to_string())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, area);
}
