use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::choices::{PlotStatus, TimeOfDay, TimeOfWeek};
use super::field::Field;
use super::log::{PlotLog, PlotLogState};

/// Field values submitted for a plot, either to add a new one or to change
/// an existing one. `None` fields were left blank on the form; the
/// conditional fields also record whether the form submitted them at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotCandidate {
    pub status: Option<PlotStatus>,
    pub map_area: Option<String>,
    /// Eligible survey site.
    pub ess: Option<bool>,
    pub target_radius: Option<f64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub eligible_members: Field<u32>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub household_count: Field<u32>,
    pub location_name: Option<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub time_of_week: Field<TimeOfWeek>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub time_of_day: Field<TimeOfDay>,
}

impl PlotCandidate {
    pub fn is_residential_habitable(&self) -> bool {
        self.status == Some(PlotStatus::ResidentialHabitable)
    }

    pub fn is_ess(&self) -> bool {
        self.ess.unwrap_or(false)
    }
}

/// Snapshot of the plot as currently stored, loaded by the caller.
///
/// A plot without an `id` has never been saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedPlot {
    pub id: Option<Uuid>,
    pub plot_identifier: Option<String>,
    pub target_radius: Option<f64>,
    pub location_name: Option<String>,
    pub confirmed: bool,
    pub plot_log: Option<PlotLog>,
}

impl PersistedPlot {
    /// An unsaved plot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn plot_log_state(&self) -> PlotLogState {
        match &self.plot_log {
            None => PlotLogState::Missing,
            Some(log) if log.has_accessible_entry() => PlotLogState::AccessibleEntry,
            Some(_) => PlotLogState::NoAccessibleEntry,
        }
    }
}

/// The account submitting the form and the groups it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub groups: Vec<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Whether the user belongs to at least one of `names`.
    pub fn in_any_group<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        names.into_iter().any(|name| self.groups.contains(name))
    }
}
