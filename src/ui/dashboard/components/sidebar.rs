//! Dashboard sidebar component
//!
//! Renders the active filter and the dataset summary

use super::super::state::DashboardState;
use super::super::utils::{format_count, format_money};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::path::Path;

/// Render the sidebar with the filter panel above the dataset panel.
pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Fill(1)])
        .split(area);

    render_filter_panel(f, chunks[0], state);
    render_data_panel(f, chunks[1], state);
}

fn render_filter_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    let range_text = match &state.filter.dates {
        Some(range) => format!("Range: {} -> {}", range.start(), range.end()),
        None => "Range: full history".to_string(),
    };
    lines.push(Line::from(vec![Span::styled(
        range_text,
        Style::default().fg(Color::LightBlue),
    )]));

    lines.push(Line::from(vec![Span::styled(
        format!("Country: {}", state.filter.country),
        Style::default().fg(Color::Yellow),
    )]));

    lines.push(Line::from(vec![Span::styled(
        format!(
            "Rows: {} of {}",
            format_count(state.view.filtered_rows),
            format_count(state.view.total_rows)
        ),
        Style::default().fg(Color::LightGreen),
    )]));

    lines.push(Line::from(vec![Span::styled(
        format!("Revenue share: {:.1}%", state.view.kpis.revenue_share),
        Style::default().fg(Color::LightCyan),
    )]));

    let block = Block::default()
        .title("FILTERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_data_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![Span::styled(
        format!("Transactions: {}", short_name(&state.transactions_path)),
        Style::default().fg(Color::LightBlue),
    )]));
    lines.push(Line::from(vec![Span::styled(
        format!("RFM: {}", short_name(&state.rfm_path)),
        Style::default().fg(Color::LightBlue),
    )]));

    let span_text = match state.data_span {
        Some((first, last)) => format!("Coverage: {} -> {}", first, last),
        None => "Coverage: empty table".to_string(),
    };
    lines.push(Line::from(vec![Span::styled(
        span_text,
        Style::default().fg(Color::Cyan),
    )]));

    lines.push(Line::from(vec![Span::styled(
        format!(
            "Rows: {}  Customers: {}",
            format_count(state.tables.transactions.len()),
            format_count(state.tables.rfm.len())
        ),
        Style::default().fg(Color::LightGreen),
    )]));

    lines.push(Line::from(vec![Span::styled(
        format!("Total revenue: {}", format_money(state.view.base_revenue)),
        Style::default().fg(Color::LightYellow),
    )]));

    if state.tables.rfm_orphans > 0 {
        lines.push(Line::from(vec![Span::styled(
            format!(
                "Unmatched profiles: {}",
                format_count(state.tables.rfm_orphans)
            ),
            Style::default().fg(Color::LightRed),
        )]));
    }

    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 86400 {
        format!(
            "Uptime: {}d {}h {}m",
            uptime.as_secs() / 86400,
            (uptime.as_secs() % 86400) / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    lines.push(Line::from(vec![Span::styled(
        "Source: Online Retail Dataset (UK-based)",
        Style::default().fg(Color::DarkGray),
    )]));

    let block = Block::default()
        .title("DATASET")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn short_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
