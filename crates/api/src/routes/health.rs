use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Health check reporting the loaded validation settings.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let settings = state.validation();
    Json(json!({
        "status": "ok",
        "addPlotMapAreas": settings.add_plot_map_areas.len(),
        "specialLocations": settings.special_locations.len(),
        "supervisorGroups": settings.supervisor_groups.len(),
    }))
}

async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
