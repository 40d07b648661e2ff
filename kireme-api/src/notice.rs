//! Transient user notices
//!
//! Auto-corrections surface as short-lived status messages rather than
//! errors. `NoticeBoard` keeps at most one notice alive: posting replaces
//! whatever is showing, so rapid triggers move the deadline forward instead
//! of stacking banners.

use std::time::{Duration, Instant};

/// Default lifetime of a transient notice
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A short-lived, self-dismissing status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    duration: Duration,
}

impl Notice {
    /// Create a notice with the default lifetime
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_duration(message, DEFAULT_NOTICE_DURATION)
    }

    /// Create a notice with an explicit lifetime
    pub fn with_duration(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration,
        }
    }

    pub(crate) fn baseline_language_reset() -> Self {
        Notice::new("Baseline method only supports English. Language switched to English.")
    }

    /// The message to display
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How long the notice stays visible
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Single-slot holder for the currently visible notice
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
}

impl NoticeBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing any notice that is still visible
    pub fn post(&mut self, notice: Notice, now: Instant) {
        let deadline = now + notice.duration();
        self.current = Some((notice, deadline));
    }

    /// The notice that should be visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        match &self.current {
            Some((notice, deadline)) if now < *deadline => Some(notice),
            _ => None,
        }
    }

    /// Drop an expired notice; returns true when one was cleared
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, deadline)) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Dismiss the notice regardless of its deadline
    pub fn clear(&mut self) {
        self.current = None;
    }
}
