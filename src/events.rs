//! Activity Events
//!
//! Timestamped entries for the dashboard activity log. The TUI has no stderr
//! to write to, so anything the loader or the filter layer wants to tell the
//! user flows through these.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// Table loading and the content-fingerprint cache.
    Loader,
    /// Filter mutations, including the incomplete-range fallback.
    Filter,
    /// Session lifecycle (startup, reload requests).
    Session,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventKind {
    Success,
    Error,
    Refresh,
    Info,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub kind: EventKind,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            log_level,
        }
    }

    pub fn loader(msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, kind, log_level)
    }

    pub fn filter(msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self::new(Source::Filter, msg, kind, log_level)
    }

    pub fn session(msg: String, kind: EventKind, log_level: LogLevel) -> Self {
        Self::new(Source::Session, msg, kind, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.kind == EventKind::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}
