//! Status output
//!
//! Verbs never return failures; everything the user should see goes through
//! a [`StatusSink`].

/// Receiver of user-facing output
pub trait StatusSink {
    /// One-line status message
    fn on_status(&mut self, line: &str);

    /// Multi-line listing, delivered as one unit
    fn on_status_long(&mut self, lines: &[String]);

    /// One-line error message
    fn on_error(&mut self, line: &str);
}

/// One recorded sink call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    Status(String),
    StatusLong(Vec<String>),
    Error(String),
}

impl StatusEvent {
    pub fn is_error(&self) -> bool {
        matches!(self, StatusEvent::Error(_))
    }
}

/// Sink that keeps every event in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingStatusSink {
    events: Vec<StatusEvent>,
}

impl RecordingStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Error messages in arrival order
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StatusEvent::Error(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Single-line status messages in arrival order
    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StatusEvent::Status(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent listing, if any
    pub fn last_listing(&self) -> Option<&[String]> {
        self.events.iter().rev().find_map(|e| match e {
            StatusEvent::StatusLong(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// Removes and returns every recorded event
    pub fn take(&mut self) -> Vec<StatusEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StatusSink for RecordingStatusSink {
    fn on_status(&mut self, line: &str) {
        self.events.push(StatusEvent::Status(line.to_string()));
    }

    fn on_status_long(&mut self, lines: &[String]) {
        self.events.push(StatusEvent::StatusLong(lines.to_vec()));
    }

    fn on_error(&mut self, line: &str) {
        self.events.push(StatusEvent::Error(line.to_string()));
    }
}

/// Sink that forwards output to the `log` facade
///
/// Status lines go out at `info`, errors at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn on_status(&mut self, line: &str) {
        log::info!("{}", line);
    }

    fn on_status_long(&mut self, lines: &[String]) {
        for line in lines {
            log::info!("{}", line);
        }
    }

    fn on_error(&mut self, line: &str) {
        log::warn!("{}", line);
    }
}
