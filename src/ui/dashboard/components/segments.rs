//! Segments section
//!
//! Segment distribution and revenue, the RFM scatter sample, and the
//! per-segment summary table. These panels always show the whole
//! customer base; the transaction filter does not reach them.

use super::super::state::DashboardState;
use super::super::utils::{category_color, format_count, format_money, meter};
use super::charts::{self, BarItem};

use crate::analytics::rfm::score_bands;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Row, Table};

pub fn render_segments(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    render_distribution(f, top[0], state);

    let revenue_bars: Vec<BarItem> = state
        .view
        .segment_revenue
        .iter()
        .map(|item| BarItem {
            label: item.label.chars().take(8).collect(),
            value: item.value.round() as u64,
            text: format_money(item.value),
        })
        .collect();
    charts::render_value_bars(
        f,
        top[1],
        "REVENUE BY SEGMENT",
        &revenue_bars,
        Color::LightGreen,
    );

    render_scatter(f, bottom[0], state);
    render_summary_table(f, bottom[1], state);
}

/// Customer share per segment, largest first.
fn render_distribution(f: &mut Frame, area: Rect, state: &DashboardState) {
    let counts = &state.view.segment_counts;
    if counts.is_empty() {
        charts::render_placeholder(f, area, "SEGMENT DISTRIBUTION");
        return;
    }

    let total: usize = counts.iter().map(|(_, count)| *count).sum();
    let max = counts
        .iter()
        .map(|(_, count)| *count as f64)
        .fold(0.0_f64, f64::max);
    let visible = (area.height.saturating_sub(4) as usize).max(1);

    let lines: Vec<Line> = counts
        .iter()
        .take(visible)
        .enumerate()
        .map(|(i, (segment, count))| {
            let share = if total > 0 {
                *count as f64 * 100.0 / total as f64
            } else {
                0.0
            };
            let shown: String = segment.chars().take(16).collect();
            Line::from(vec![
                Span::styled("● ", Style::default().fg(category_color(i))),
                Span::raw(format!("{:<16} ", shown)),
                Span::styled(
                    meter(*count as f64, max, 12),
                    Style::default().fg(category_color(i)),
                ),
                Span::styled(
                    format!(" {:>6}  {:>5.1}%", format_count(*count), share),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(charts::section_block("SEGMENT DISTRIBUTION"));
    f.render_widget(paragraph, area);
}

/// Recency against monetary for the fixed sample, colored by score band.
fn render_scatter(f: &mut Frame, area: Rect, state: &DashboardState) {
    let points = &state.view.scatter;
    let Some((low_cut, high_cut)) = score_bands(points) else {
        charts::render_placeholder(f, area, "RECENCY vs MONETARY");
        return;
    };

    let mut low: Vec<(f64, f64)> = Vec::new();
    let mut mid: Vec<(f64, f64)> = Vec::new();
    let mut high: Vec<(f64, f64)> = Vec::new();
    for point in points {
        let xy = (point.recency, point.monetary);
        if point.score <= low_cut {
            low.push(xy);
        } else if point.score <= high_cut {
            mid.push(xy);
        } else {
            high.push(xy);
        }
    }

    let max_x = points
        .iter()
        .map(|point| point.recency)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let max_y = points
        .iter()
        .map(|point| point.monetary)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let datasets = vec![
        Dataset::default()
            .name(format!("score <= {:.1}", low_cut))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightRed))
            .data(&low),
        Dataset::default()
            .name(format!("score <= {:.1}", high_cut))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightYellow))
            .data(&mid),
        Dataset::default()
            .name(format!("score > {:.1}", high_cut))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::LightGreen))
            .data(&high),
    ];

    let x_labels: Vec<Line> = vec![
        Line::from("0"),
        Line::from(format!("{:.0}", max_x / 2.0)),
        Line::from(format!("{:.0} days", max_x)),
    ];
    let y_labels: Vec<Line> = vec![
        Line::from(format_money(0.0)),
        Line::from(format_money(max_y / 2.0)),
        Line::from(format_money(max_y)),
    ];

    let chart = Chart::new(datasets)
        .block(charts::section_block("RECENCY vs MONETARY"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x * 1.05])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y * 1.05])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn render_summary_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let summaries = &state.view.segment_summaries;
    if summaries.is_empty() {
        charts::render_placeholder(f, area, "SEGMENT SUMMARY");
        return;
    }

    let header = Row::new(vec![
        "Segment", "Count", "Avg R", "Avg F", "Avg M", "Revenue", "Share",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = summaries
        .iter()
        .map(|summary| {
            Row::new(vec![
                summary.segment.clone(),
                format_count(summary.count),
                format!("{:.0}", summary.avg_recency),
                format!("{:.1}", summary.avg_frequency),
                format_money(summary.avg_monetary),
                format_money(summary.total_revenue),
                format!("{:.1}%", summary.revenue_share),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(charts::section_block("SEGMENT SUMMARY"));
    f.render_widget(table, area);
}
