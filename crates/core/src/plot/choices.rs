use serde::{Deserialize, Serialize};

/// Sentinel stored in a choice field when the respondent picked "other" and
/// must explain in a companion free-text field.
pub const OTHER: &str = "OTHER";

/// Residential status of a plot as recorded by the field worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotStatus {
    ResidentialHabitable,
    ResidentialNotHabitable,
    NonResidential,
    Inaccessible,
}

impl PlotStatus {
    /// Human-readable label shown on the data-entry form.
    pub fn display(&self) -> &'static str {
        match self {
            PlotStatus::ResidentialHabitable => "Residential - habitable",
            PlotStatus::ResidentialNotHabitable => "Residential - not habitable",
            PlotStatus::NonResidential => "Non-residential",
            PlotStatus::Inaccessible => "Inaccessible",
        }
    }
}

/// Outcome of a single attempt to reach a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Accessible,
    Inaccessible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfWeek {
    Weekdays,
    Weekends,
    Anytime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Anytime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&PlotStatus::ResidentialHabitable).unwrap();
        assert_eq!(json, "\"residential_habitable\"");

        let status: PlotStatus = serde_json::from_str("\"residential_not_habitable\"").unwrap();
        assert_eq!(status, PlotStatus::ResidentialNotHabitable);
    }

    #[test]
    fn habitable_display_label() {
        assert_eq!(
            PlotStatus::ResidentialHabitable.display(),
            "Residential - habitable"
        );
    }
}
