use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "GRC Risk Assessment API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /assess-risk": "Submit a new risk assessment",
            "GET /risks": "Retrieve all risks (optional ?level= filter)",
            "GET /risks/{id}": "Get specific risk by ID",
            "GET /compliance-hint/{level}": "Get the compliance hint for a risk level",
            "GET /reports/heatmap": "Likelihood x impact matrix of stored risks",
            "GET /reports/summary": "Risk counts per level",
            "GET /reports/risks.csv": "Export risks as CSV (optional ?level= filter)"
        }
    }))
}

async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.db.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}
