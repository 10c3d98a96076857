//! Rules for adding and changing a plot.

use super::errors::{ErrorCode, ValidationErrors, NON_FIELD_ERRORS};
use super::rules::{required_if, required_if_true};
use crate::plot::choices::PlotStatus;
use crate::plot::log::PlotLogState;
use crate::plot::model::{PersistedPlot, PlotCandidate, User};
use crate::settings::ValidationSettings;

/// Who is submitting the plot, and under which settings.
#[derive(Debug, Clone, Copy)]
pub struct PlotContext<'a> {
    pub settings: &'a ValidationSettings,
    pub user: Option<&'a User>,
}

impl<'a> PlotContext<'a> {
    pub fn new(settings: &'a ValidationSettings) -> Self {
        Self {
            settings,
            user: None,
        }
    }

    pub fn with_user(mut self, user: &'a User) -> Self {
        self.user = Some(user);
        self
    }

    fn user_is_supervisor(&self) -> bool {
        self.user
            .is_some_and(|user| user.in_any_group(&self.settings.supervisor_groups))
    }
}

/// Checks a submitted plot against the stored plot it would create or
/// replace.
#[derive(Debug, Clone, Copy)]
pub struct PlotValidator<'a> {
    candidate: &'a PlotCandidate,
    plot: &'a PersistedPlot,
    context: PlotContext<'a>,
}

impl<'a> PlotValidator<'a> {
    pub fn new(
        candidate: &'a PlotCandidate,
        plot: &'a PersistedPlot,
        context: PlotContext<'a>,
    ) -> Self {
        Self {
            candidate,
            plot,
            context,
        }
    }

    /// Run every rule and return all violations together.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.plot.is_new() {
            self.allow_new_plot(&mut errors);
        } else if let Some(location) = self.special_location() {
            errors.add_coded(
                NON_FIELD_ERRORS,
                format!(
                    "Plot may not be changed. Plot is listed as a special location. \
                     Got '{location}'."
                ),
                ErrorCode::SpecialLocation,
            );
        } else {
            self.validate_plot_log(&mut errors);
        }

        let candidate = self.candidate;
        let habitable = candidate.is_residential_habitable();
        required_if(habitable, "household_count", &candidate.household_count, &mut errors);
        required_if(habitable, "eligible_members", &candidate.eligible_members, &mut errors);
        required_if_true(
            &candidate.eligible_members,
            "time_of_week",
            &candidate.time_of_week,
            &mut errors,
        );
        required_if_true(
            &candidate.eligible_members,
            "time_of_day",
            &candidate.time_of_day,
            &mut errors,
        );

        self.validate_radius_change(&mut errors);

        if !errors.is_empty() {
            tracing::debug!(
                plot_id = ?self.plot.id,
                plot_identifier = ?self.plot.plot_identifier,
                error_count = errors.len(),
                "plot rejected"
            );
        }
        errors.into_result()
    }

    /// New plots are only admitted as habitable ESS plots in an allowed map
    /// area. Only the first unmet condition is reported.
    fn allow_new_plot(&self, errors: &mut ValidationErrors) {
        let candidate = self.candidate;
        let map_area = candidate.map_area.as_deref().unwrap_or_default();

        let message = if !self.context.settings.add_plot_map_areas.contains(map_area) {
            format!("Plots may not be added in this map area. Got map area='{map_area}'.")
        } else if !candidate.is_ess() {
            "Only ESS plots may be added. See Categories.".to_string()
        } else if !candidate.is_residential_habitable() {
            format!(
                "Only '{}' plots may be added.",
                PlotStatus::ResidentialHabitable.display()
            )
        } else {
            return;
        };
        errors.add_coded(NON_FIELD_ERRORS, message, ErrorCode::InvalidNewPlot);
    }

    fn special_location(&self) -> Option<&'a str> {
        let special = &self.context.settings.special_locations;
        [&self.plot.location_name, &self.candidate.location_name]
            .into_iter()
            .filter_map(|name| name.as_deref())
            .find(|name| special.contains(*name))
    }

    fn validate_plot_log(&self, errors: &mut ValidationErrors) {
        match self.plot.plot_log_state() {
            PlotLogState::Missing => errors.add_coded(
                NON_FIELD_ERRORS,
                "Complete the plot log before attempting to modify this plot.",
                ErrorCode::PlotLog,
            ),
            PlotLogState::NoAccessibleEntry => errors.add_coded(
                NON_FIELD_ERRORS,
                "Complete the plot log \"entry\" before attempting to modify this plot.",
                ErrorCode::PlotLogEntry,
            ),
            PlotLogState::AccessibleEntry => {}
        }
    }

    /// Changing the target radius of a stored plot is reserved for
    /// supervisors. NaN never equals the stored radius, so it is rejected
    /// outright.
    fn validate_radius_change(&self, errors: &mut ValidationErrors) {
        if let Some(radius) = self.candidate.target_radius.filter(|r| !r.is_finite()) {
            errors.add("target_radius", format!("Enter a finite radius. Got {radius}."));
            return;
        }
        if self.plot.is_new() || self.candidate.target_radius == self.plot.target_radius {
            return;
        }
        if !self.context.user_is_supervisor() {
            errors.add("target_radius", "Insufficient permissions to change.");
        }
    }
}
