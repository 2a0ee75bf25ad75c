//! Shared chart builders for the section panels
//!
//! Every section renders through these helpers so axis styling, empty-state
//! handling, and bar sizing stay consistent across the dashboard.

use crate::analytics::LabeledValue;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    Padding, Paragraph,
};

use super::super::utils::meter;

/// Standard bordered block used by every section panel.
pub fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

/// Placeholder shown when a panel has nothing to draw.
pub fn render_placeholder(f: &mut Frame, area: Rect, title: &str) {
    let notice = Paragraph::new("No rows match the current filter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(section_block(title));
    f.render_widget(notice, area);
}

/// Line chart over an ordered label series (months, typically).
pub fn render_trend_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    series: &[LabeledValue],
    color: Color,
    format_value: fn(f64) -> String,
) {
    if series.is_empty() {
        render_placeholder(f, area, title);
        return;
    }

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, item)| (i as f64, item.value))
        .collect();
    let max_y = series
        .iter()
        .map(|item| item.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Line> = if series.len() >= 3 {
        vec![
            Line::from(series[0].label.clone()),
            Line::from(series[series.len() / 2].label.clone()),
            Line::from(series[series.len() - 1].label.clone()),
        ]
    } else {
        series.iter().map(|item| Line::from(item.label.clone())).collect()
    };
    let y_labels: Vec<Line> = vec![
        Line::from(format_value(0.0)),
        Line::from(format_value(max_y / 2.0)),
        Line::from(format_value(max_y)),
    ];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(&points),
    ];

    let chart = Chart::new(datasets)
        .block(section_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y * 1.1])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

/// One column of a vertical bar chart.
pub struct BarItem {
    pub label: String,
    pub value: u64,
    pub text: String,
}

/// Vertical bar chart sized to the panel width; bars that do not fit
/// are dropped from the tail.
pub fn render_value_bars(f: &mut Frame, area: Rect, title: &str, items: &[BarItem], color: Color) {
    if items.is_empty() {
        render_placeholder(f, area, title);
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let per_bar = (inner_width / items.len().max(1)).max(3);
    let bar_width = (per_bar - 1).clamp(2, 10) as u16;
    let visible = (inner_width / (bar_width as usize + 1)).max(1);

    let bars: Vec<Bar> = items
        .iter()
        .take(visible)
        .map(|item| {
            Bar::default()
                .value(item.value)
                .label(Line::from(item.label.clone()))
                .text_value(item.text.clone())
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .block(section_block(title));
    f.render_widget(chart, area);
}

/// Ranked horizontal rows: index, label, meter, formatted value.
pub fn render_meter_rows(
    f: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[(String, f64)],
    color: Color,
    format_value: fn(f64) -> String,
) {
    if rows.is_empty() {
        render_placeholder(f, area, title);
        return;
    }

    let visible = (area.height.saturating_sub(4) as usize).max(1);
    let max_value = rows
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);

    // Fit label, meter, and value into the inner width.
    let inner_width = area.width.saturating_sub(4) as usize;
    let value_width = 12;
    let meter_width = (inner_width / 4).clamp(8, 24);
    let label_width = inner_width
        .saturating_sub(4 + meter_width + value_width + 2)
        .max(8);

    let lines: Vec<Line> = rows
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, (label, value))| {
            let shown: String = label.chars().take(label_width).collect();
            Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:<width$} ", shown, width = label_width)),
                Span::styled(
                    meter(*value, max_value, meter_width),
                    Style::default().fg(color),
                ),
                Span::styled(
                    format!(" {:>width$}", format_value(*value), width = value_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(section_block(title));
    f.render_widget(paragraph, area);
}
