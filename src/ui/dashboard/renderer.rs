//! Dashboard main renderer

use super::components::{
    customers, footer, header, logs, overview, products, revenue, segments, sidebar, time_panel,
};
use super::state::{DashboardState, Section};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(26), Constraint::Percentage(74)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, content_chunks[0], state);

    let section_area = content_chunks[1];
    match state.section {
        Section::Overview => overview::render_overview(f, section_area, state),
        Section::Revenue => revenue::render_revenue(f, section_area, state),
        Section::Products => products::render_products(f, section_area, state),
        Section::Customers => customers::render_customers(f, section_area, state),
        Section::Segments => segments::render_segments(f, section_area, state),
        Section::Time => time_panel::render_time(f, section_area, state),
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
