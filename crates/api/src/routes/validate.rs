use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use plot_survey_core::plot::{PersistedPlot, PlotCandidate, PlotLogEntryCandidate, User};
use plot_survey_core::validate::{PlotContext, PlotLogEntryValidator, PlotValidator};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/validate/plot", post(validate_plot))
        .route("/v1/validate/plot-log-entry", post(validate_plot_log_entry))
}

/// A submitted plot form together with the stored plot it applies to.
#[derive(Debug, Deserialize)]
pub struct PlotSubmission {
    pub candidate: PlotCandidate,
    /// Omitted when adding a new plot.
    #[serde(default)]
    pub plot: PersistedPlot,
    #[serde(default)]
    pub user: Option<User>,
}

async fn validate_plot(
    State(state): State<AppState>,
    payload: Result<Json<PlotSubmission>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(submission) = payload?;

    let mut context = PlotContext::new(state.validation());
    if let Some(user) = &submission.user {
        context = context.with_user(user);
    }
    PlotValidator::new(&submission.candidate, &submission.plot, context).validate()?;

    tracing::debug!(plot_id = ?submission.plot.id, "plot accepted");
    Ok(Json(json!({ "valid": true })))
}

async fn validate_plot_log_entry(
    payload: Result<Json<PlotLogEntryCandidate>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(candidate) = payload?;

    PlotLogEntryValidator::new(&candidate).validate()?;

    tracing::debug!("plot log entry accepted");
    Ok(Json(json!({ "valid": true })))
}
