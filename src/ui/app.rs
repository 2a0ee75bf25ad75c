//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui_timing;
use crate::data::{DataError, LoadedTables, Tables, store};
use crate::events::{Event as ActivityEvent, EventKind};
use crate::logging::LogLevel;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub transactions_path: PathBuf,
    pub rfm_path: PathBuf,
}

impl UIConfig {
    pub fn new(with_background_color: bool, transactions_path: PathBuf, rfm_path: PathBuf) -> Self {
        Self {
            with_background_color,
            transactions_path,
            rfm_path,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the aggregated views.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Most recently loaded tables; replaced on successful reload.
    tables: Arc<Tables>,

    /// UI configuration, including where reloads read from.
    config: UIConfig,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receiver for an in-flight reload, if one is running.
    reload_receiver: Option<mpsc::Receiver<Result<LoadedTables, DataError>>>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(tables: Arc<Tables>, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            tables,
            config: ui_config,
            current_screen: Screen::Splash,
            reload_receiver: None,
        }
    }

    fn open_dashboard(&mut self) {
        let mut state =
            DashboardState::new(Arc::clone(&self.tables), self.start_time, &self.config);
        state.add_event(ActivityEvent::session(
            "Dashboard ready; Tab cycles sections, A resets filters".to_string(),
            EventKind::Info,
            LogLevel::Info,
        ));
        self.current_screen = Screen::Dashboard(Box::new(state));
    }

    /// Kick off a background reload unless one is already running.
    fn request_reload(&mut self, force: bool) {
        if self.reload_receiver.is_some() {
            self.push_event(ActivityEvent::loader(
                "Reload already in progress".to_string(),
                EventKind::Info,
                LogLevel::Info,
            ));
            return;
        }
        if force {
            store::clear();
        }
        let message = if force {
            "Reloading tables from disk (cache cleared)"
        } else {
            "Checking tables for changes"
        };
        self.push_event(ActivityEvent::loader(
            message.to_string(),
            EventKind::Refresh,
            LogLevel::Info,
        ));
        self.reload_receiver = Some(store::spawn_load(
            self.config.transactions_path.clone(),
            self.config.rfm_path.clone(),
        ));
    }

    /// Deliver a finished reload, if any. A failed reload keeps the
    /// tables already on screen.
    fn poll_reload(&mut self) {
        let Some(mut receiver) = self.reload_receiver.take() else {
            return;
        };
        match receiver.try_recv() {
            Err(mpsc::error::TryRecvError::Empty) => {
                self.reload_receiver = Some(receiver);
            }
            Ok(Ok(loaded)) => self.apply_loaded(loaded),
            Ok(Err(error)) => {
                self.push_event(ActivityEvent::loader(
                    format!("Reload failed, keeping current tables: {}", error),
                    EventKind::Error,
                    LogLevel::Error,
                ));
            }
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.push_event(ActivityEvent::loader(
                    "Reload task stopped before finishing".to_string(),
                    EventKind::Error,
                    LogLevel::Error,
                ));
            }
        }
    }

    fn apply_loaded(&mut self, loaded: LoadedTables) {
        self.tables = Arc::clone(&loaded.tables);
        let event = if loaded.from_cache {
            ActivityEvent::loader(
                "Tables unchanged on disk, kept cached copy".to_string(),
                EventKind::Info,
                LogLevel::Info,
            )
        } else {
            ActivityEvent::loader(
                format!(
                    "Reloaded {} transactions and {} customer profiles",
                    loaded.tables.transactions.len(),
                    loaded.tables.rfm.len()
                ),
                EventKind::Success,
                LogLevel::Info,
            )
        };
        self.push_event(event);
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.replace_tables(Arc::clone(&self.tables));
        }
    }

    fn push_event(&mut self, event: ActivityEvent) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.add_event(event);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Deliver any finished reload before drawing
        app.poll_reload();

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui_timing::tick_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                let mut reload_request = None;
                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        KeyCode::Char('r') => reload_request = Some(false),
                        KeyCode::Char('R') => reload_request = Some(true),
                        other => state.handle_key(other),
                    },
                }
                if let Some(force) = reload_request {
                    app.request_reload(force);
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
