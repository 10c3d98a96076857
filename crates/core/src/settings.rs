use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deployment-specific lists consulted by the plot rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Map areas in which new plots may be added.
    pub add_plot_map_areas: BTreeSet<String>,
    /// Location names of plots that may never be changed.
    pub special_locations: BTreeSet<String>,
    /// Groups whose members may change a plot's target radius.
    pub supervisor_groups: BTreeSet<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            add_plot_map_areas: BTreeSet::new(),
            special_locations: BTreeSet::new(),
            supervisor_groups: BTreeSet::from(["supervisor".to_string()]),
        }
    }
}

impl ValidationSettings {
    pub fn with_map_area(mut self, map_area: impl Into<String>) -> Self {
        self.add_plot_map_areas.insert(map_area.into());
        self
    }

    pub fn with_special_location(mut self, name: impl Into<String>) -> Self {
        self.special_locations.insert(name.into());
        self
    }

    pub fn with_supervisor_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supervisor_groups = groups.into_iter().map(Into::into).collect();
        self
    }
}
