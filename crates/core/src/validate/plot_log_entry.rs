//! Rules for recording an attempt to reach a plot.

use super::errors::{ValidationErrors, REQUIRED_MSG};
use super::rules::{required_if, validate_other_specify};
use crate::plot::choices::LogStatus;
use crate::plot::log::PlotLogEntryCandidate;

#[derive(Debug, Clone, Copy)]
pub struct PlotLogEntryValidator<'a> {
    candidate: &'a PlotLogEntryCandidate,
}

impl<'a> PlotLogEntryValidator<'a> {
    pub fn new(candidate: &'a PlotLogEntryCandidate) -> Self {
        Self { candidate }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let candidate = self.candidate;

        // Nothing else can be checked without the plot behind the log.
        let Some(is_confirmed) = candidate.is_confirmed() else {
            errors.add("plot_log", REQUIRED_MSG);
            return errors.into_result();
        };

        if is_confirmed && !candidate.is_accessible() {
            errors.add(
                "log_status",
                "This plot has been 'confirmed'. Must be accessible.",
            );
        }

        required_if(
            candidate.log_status == Some(LogStatus::Inaccessible),
            "reason",
            &candidate.reason,
            &mut errors,
        );
        validate_other_specify(
            candidate.reason.as_deref(),
            "reason_other",
            &candidate.reason_other,
            &mut errors,
        );

        if !errors.is_empty() {
            tracing::debug!(
                plot_log_id = ?candidate.plot_log.as_ref().map(|log| log.id),
                error_count = errors.len(),
                "plot log entry rejected"
            );
        }
        errors.into_result()
    }
}
