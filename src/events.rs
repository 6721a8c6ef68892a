//! Event System
//!
//! Worker events delivered to the UI loop. Every background job reports its
//! outcome as an [`Event`]; data-bearing outcomes additionally carry a typed
//! [`Payload`] that the dashboard state applies.

use crate::api::types::{Course, Stats, User};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The two list views the dashboard can display. Exactly one is active at a
/// time; the active one is polled alongside the stats.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Tab {
    Users,
    Courses,
}

impl Tab {
    pub fn other(self) -> Tab {
        match self {
            Tab::Users => Tab::Courses,
            Tab::Courses => Tab::Users,
        }
    }
}

/// Backend reachability as reported by the startup health probe.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConnectionStatus {
    /// Probe has not completed yet.
    Checking,
    Connected,
    /// Backend answered but did not report a healthy status.
    Unhealthy,
    /// The probe never completed (network failure).
    Unreachable,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// One-shot health probe issued at startup.
    HealthProbe,
    /// Worker that refreshes the summary statistics.
    StatsFetcher,
    /// Worker that refreshes one of the list views.
    ListFetcher(Tab),
    /// Worker that loads the instructor choices for the course form.
    FormLoader,
    /// Worker that performs create/delete mutations.
    Mutator,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Typed payload carried by events that update dashboard data.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Health(ConnectionStatus),
    Stats(Stats),
    /// A completed users list fetch, tagged with its fetch generation.
    Users { seq: u64, users: Vec<User> },
    /// A completed courses list fetch, tagged with its fetch generation.
    Courses { seq: u64, courses: Vec<Course> },
    /// Users filtered to those who may be assigned as course instructors.
    Instructors(Vec<User>),
    /// A create succeeded for the given tab.
    Created(Tab),
    /// A delete succeeded for the given tab.
    Deleted(Tab),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional data payload applied to the dashboard state.
    pub payload: Option<Payload>,
}

impl Event {
    pub fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    pub fn with_payload(
        worker: Worker,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
        payload: Payload,
    ) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(worker, msg, event_type, log_level)
        }
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
