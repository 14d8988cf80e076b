// Load status for the status bar.
// Tracks whether data is loading, loaded, or failed, and when.

use chrono::{DateTime, Local, Utc};

use crate::github::RateLimit;

/// Outcome of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded { at: DateTime<Utc> },
    Failed { at: DateTime<Utc> },
}

/// Status bar state.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub load: LoadStatus,
    /// A refresh is running, possibly on top of already loaded data.
    pub refreshing: bool,
    pub rate_limit: RateLimit,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.refreshing = true;
        if self.load == LoadStatus::Idle {
            self.load = LoadStatus::Loading;
        }
    }

    pub fn finish(&mut self, ok: bool, at: DateTime<Utc>, rate_limit: RateLimit) {
        self.refreshing = false;
        self.rate_limit = rate_limit;
        self.load = if ok {
            LoadStatus::Loaded { at }
        } else {
            LoadStatus::Failed { at }
        };
    }

    /// Get status display string and colour name.
    pub fn display(&self) -> (String, &'static str) {
        let (text, color) = match &self.load {
            LoadStatus::Idle => ("Idle".to_string(), "gray"),
            LoadStatus::Loading => ("Loading GitHub data".to_string(), "yellow"),
            LoadStatus::Loaded { at } => (
                format!("Updated {}", at.with_timezone(&Local).format("%H:%M:%S")),
                "green",
            ),
            LoadStatus::Failed { at } => (
                format!("Load failed {}", at.with_timezone(&Local).format("%H:%M:%S")),
                "red",
            ),
        };
        if self.refreshing && !matches!(self.load, LoadStatus::Loading) {
            (format!("{} (refreshing)", text), "yellow")
        } else {
            (text, color)
        }
    }
}
