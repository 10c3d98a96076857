use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::choices::LogStatus;

/// A recorded attempt to reach a plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLogEntry {
    pub id: Uuid,
    pub log_status: Option<LogStatus>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PlotLogEntry {
    pub fn new(log_status: LogStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            log_status: Some(log_status),
            reason: None,
        }
    }

    pub fn is_accessible(&self) -> bool {
        self.log_status == Some(LogStatus::Accessible)
    }
}

/// Container for every access attempt made against one plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLog {
    pub id: Uuid,
    #[serde(default)]
    pub entries: Vec<PlotLogEntry>,
}

impl PlotLog {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            entries: Vec::new(),
        }
    }

    pub fn has_accessible_entry(&self) -> bool {
        self.entries.iter().any(PlotLogEntry::is_accessible)
    }
}

impl Default for PlotLog {
    fn default() -> Self {
        Self::new()
    }
}

/// What a plot's log history says about whether the plot may be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLogState {
    /// No log container has been created for the plot.
    Missing,
    /// A log exists but no attempt reached the plot.
    NoAccessibleEntry,
    AccessibleEntry,
}

/// The plot a log belongs to, reduced to what log entry rules need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRef {
    pub id: Uuid,
    #[serde(default)]
    pub confirmed: bool,
}

/// Reference from a log entry to its log container and owning plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotLogRef {
    pub id: Uuid,
    pub plot: PlotRef,
}

impl PlotLogRef {
    pub fn for_plot(confirmed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            plot: PlotRef {
                id: Uuid::new_v4(),
                confirmed,
            },
        }
    }
}

/// Field values submitted for a new or changed plot log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLogEntryCandidate {
    pub plot_log: Option<PlotLogRef>,
    pub log_status: Option<LogStatus>,
    pub reason: Option<String>,
    pub reason_other: Option<String>,
}

impl PlotLogEntryCandidate {
    pub fn new(plot_log: PlotLogRef) -> Self {
        Self {
            plot_log: Some(plot_log),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, log_status: LogStatus) -> Self {
        self.log_status = Some(log_status);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_reason_other(mut self, reason_other: impl Into<String>) -> Self {
        self.reason_other = Some(reason_other.into());
        self
    }

    pub fn is_accessible(&self) -> bool {
        self.log_status == Some(LogStatus::Accessible)
    }

    /// Whether the owning plot is confirmed, or `None` when no log was given.
    pub fn is_confirmed(&self) -> Option<bool> {
        self.plot_log.as_ref().map(|log| log.plot.confirmed)
    }
}
