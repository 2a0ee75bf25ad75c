//! Dashboard utility functions
//!
//! Formatting helpers shared across dashboard components

use crate::events::{EventKind, Source};
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on its source
pub fn source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Filter => Color::Yellow,
        Source::Session => Color::Green,
    }
}

/// Status icon shown in front of an activity-log line
pub fn event_icon(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Success => "+",
        EventKind::Error => "!",
        EventKind::Refresh => "~",
        EventKind::Info => " ",
    }
}

/// Palette for categorical series (segments, score bands)
pub const CATEGORY_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
];

pub fn category_color(index: usize) -> Color {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Text meter for horizontal bar rows: filled blocks over a dim track.
pub fn meter(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        (((value / max) * width as f64).round() as usize).min(width)
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Dollar amount rounded to whole units, thousands-grouped.
pub fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.abs().round() as u64))
}

/// Dollar amount with cents, thousands-grouped.
pub fn format_money_precise(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Plain count with thousands grouping.
pub fn format_count(value: usize) -> String {
    group_thousands(value as u64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
