//! Dashboard state management
//!
//! Holds the loaded tables, the active filter, and the aggregates the
//! renderer draws from. Every filter mutation rebuilds the view.

use crate::analytics::{
    CountryFilter, DashboardFilter, DashboardView, build_dashboard_view,
};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::data::Tables;
use crate::events::{Event, EventKind};
use crate::logging::LogLevel;
use crate::ui::app::UIConfig;

use chrono::NaiveDate;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Sections of the dashboard, cycled with Tab or selected by digit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Section {
    Overview,
    Revenue,
    Products,
    Customers,
    Segments,
    Time,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Revenue,
        Section::Products,
        Section::Customers,
        Section::Segments,
        Section::Time,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Maps the digit row onto sections, 1-based.
    pub fn from_digit(digit: char) -> Option<Section> {
        let index = digit.to_digit(10)? as usize;
        if index == 0 {
            return None;
        }
        Self::ALL.get(index - 1).copied()
    }
}

/// State for the dashboard screen.
#[derive(Debug)]
pub struct DashboardState {
    /// Tables every aggregation runs over.
    pub tables: Arc<Tables>,
    /// Active filter; `view` is always derived from it.
    pub filter: DashboardFilter,
    /// Aggregates for the current filter.
    pub view: DashboardView,
    /// Section shown in the main panel.
    pub section: Section,
    /// Country selector entries, "All" first, then sorted names.
    pub country_choices: Vec<CountryFilter>,
    country_index: usize,
    /// First and last invoice day across the unfiltered table.
    pub data_span: Option<(NaiveDate, NaiveDate)>,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Where the transaction table was read from, shown in the sidebar.
    pub transactions_path: PathBuf,
    /// Where the RFM table was read from.
    pub rfm_path: PathBuf,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(tables: Arc<Tables>, start_time: Instant, ui_config: &UIConfig) -> Self {
        let data_span = tables.date_span();
        let country_choices = country_choices(&tables);
        let filter = DashboardFilter::default();
        let view = build_dashboard_view(&tables, &filter);
        let mut state = Self {
            tables,
            filter,
            view,
            section: Section::Overview,
            country_choices,
            country_index: 0,
            data_span,
            start_time,
            transactions_path: ui_config.transactions_path.clone(),
            rfm_path: ui_config.rfm_path.clone(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
        };
        state.add_event(Event::loader(
            format!(
                "Loaded {} transactions and {} customer profiles",
                state.tables.transactions.len(),
                state.tables.rfm.len()
            ),
            EventKind::Success,
            LogLevel::Info,
        ));
        if state.tables.rfm_orphans > 0 {
            state.add_event(orphan_notice(&state.tables));
        }
        state
    }

    /// Currently selected country choice.
    pub fn country(&self) -> &CountryFilter {
        self.country_choices
            .get(self.country_index)
            .unwrap_or(&CountryFilter::All)
    }

    // Getter and setter for the selector position (used by updaters)
    pub fn country_index(&self) -> usize {
        self.country_index
    }

    pub fn set_country_index(&mut self, index: usize) {
        self.country_index = index.min(self.country_choices.len().saturating_sub(1));
    }

    /// Swaps in freshly loaded tables, keeping the filter where possible.
    pub fn replace_tables(&mut self, tables: Arc<Tables>) {
        self.tables = tables;
        self.data_span = self.tables.date_span();
        self.country_choices = country_choices(&self.tables);
        // The selected country may be gone from the reloaded table.
        if let CountryFilter::Only(name) = self.filter.country.clone() {
            match self.country_choices.iter().position(|c| c.matches(&name)) {
                Some(index) => self.country_index = index,
                None => {
                    self.country_index = 0;
                    self.filter.country = CountryFilter::All;
                    self.add_event(Event::filter(
                        format!("Country '{}' absent after reload, showing all", name),
                        EventKind::Info,
                        LogLevel::Info,
                    ));
                }
            }
        }
        self.rebuild_view();
        if self.tables.rfm_orphans > 0 {
            let notice = orphan_notice(&self.tables);
            self.add_event(notice);
        }
    }

    /// Recomputes every aggregate from the tables and the filter.
    pub fn rebuild_view(&mut self) {
        self.view = build_dashboard_view(&self.tables, &self.filter);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

fn country_choices(tables: &Tables) -> Vec<CountryFilter> {
    let mut choices = vec![CountryFilter::All];
    choices.extend(tables.countries().into_iter().map(CountryFilter::Only));
    choices
}

fn orphan_notice(tables: &Tables) -> Event {
    Event::loader(
        format!(
            "{} customer profiles have no transactions in the loaded table",
            tables.rfm_orphans
        ),
        EventKind::Error,
        LogLevel::Warn,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Overview.next(), Section::Revenue);
        assert_eq!(Section::Time.next(), Section::Overview);
        assert_eq!(Section::Overview.prev(), Section::Time);
    }

    #[test]
    fn test_section_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Overview));
        assert_eq!(Section::from_digit('6'), Some(Section::Time));
        assert_eq!(Section::from_digit('7'), None);
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('x'), None);
    }
}
