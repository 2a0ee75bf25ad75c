//! Dashboard state update logic
//!
//! Tick processing plus the key handlers that drive sections and filters.

use super::state::{DashboardState, Section};

use crate::analytics::{DashboardFilter, DateRange};
use crate::events::{Event, EventKind};
use crate::logging::LogLevel;

use chrono::{Months, NaiveDate};
use crossterm::event::KeyCode;

impl DashboardState {
    /// Advance the animation tick and surface queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Move queued events into the visible activity log
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Apply a dashboard key press. Quit and reload keys are handled by
    /// the app loop before this is reached.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Right => self.section = self.section.next(),
            KeyCode::BackTab | KeyCode::Left => self.section = self.section.prev(),
            KeyCode::Char(digit @ '1'..='9') => {
                if let Some(section) = Section::from_digit(digit) {
                    self.section = section;
                }
            }
            KeyCode::Char(',') => self.step_start_month(-1),
            KeyCode::Char('.') => self.step_start_month(1),
            KeyCode::Char('<') => self.step_end_month(-1),
            KeyCode::Char('>') => self.step_end_month(1),
            KeyCode::Char('c') => self.cycle_country(1),
            KeyCode::Char('C') => self.cycle_country(-1),
            KeyCode::Char('a') => self.reset_filters(),
            _ => {}
        }
    }

    /// Move the range start by whole months, clamped to the data span.
    fn step_start_month(&mut self, delta: i32) {
        let Some((min_day, max_day)) = self.data_span else {
            return;
        };
        let (start, end) = self.current_range(min_day, max_day);
        let stepped = step_month(start, delta).clamp(min_day, max_day);
        self.set_range(stepped.min(end), end, min_day, max_day);
    }

    /// Move the range end by whole months, clamped to the data span.
    fn step_end_month(&mut self, delta: i32) {
        let Some((min_day, max_day)) = self.data_span else {
            return;
        };
        let (start, end) = self.current_range(min_day, max_day);
        let stepped = step_month(end, delta).clamp(min_day, max_day);
        self.set_range(start, stepped.max(start), min_day, max_day);
    }

    fn current_range(&self, min_day: NaiveDate, max_day: NaiveDate) -> (NaiveDate, NaiveDate) {
        match &self.filter.dates {
            Some(range) => (range.start(), range.end()),
            None => (min_day, max_day),
        }
    }

    /// Store the range, collapsing back to "no filter" at full span.
    fn set_range(&mut self, start: NaiveDate, end: NaiveDate, min_day: NaiveDate, max_day: NaiveDate) {
        self.filter.dates = if start == min_day && end == max_day {
            None
        } else {
            DateRange::from_endpoints(Some(start), Some(end))
        };
        self.rebuild_view();
    }

    /// Step through the country selector, wrapping at both ends.
    fn cycle_country(&mut self, delta: i32) {
        if self.country_choices.is_empty() {
            return;
        }
        let len = self.country_choices.len() as i32;
        let index = (self.country_index() as i32 + delta).rem_euclid(len) as usize;
        self.set_country_index(index);
        self.filter.country = self.country().clone();
        self.rebuild_view();
    }

    /// Drop every filter and show the whole dataset again.
    fn reset_filters(&mut self) {
        self.filter = DashboardFilter::default();
        self.set_country_index(0);
        self.rebuild_view();
        self.add_event(Event::filter(
            "Filters reset to the full dataset".to_string(),
            EventKind::Info,
            LogLevel::Info,
        ));
    }
}

fn step_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let stepped = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    stepped.unwrap_or(date)
}
