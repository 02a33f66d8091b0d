use crate::error::ApiError;
use crate::services::RiskService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use domain::RiskRecord;
use shared::dto::{AssessRiskRequest, RiskListQuery};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assess-risk", post(assess_risk))
        .route("/risks", get(list_risks))
        .route("/risks/:id", get(get_risk))
}

/// Validates, scores and stores a new assessment.
pub async fn assess_risk(
    State(state): State<AppState>,
    payload: Result<Json<AssessRiskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RiskRecord>), ApiError> {
    let Json(request) = payload?;
    let risk = request.into_new_risk()?;

    let record = RiskService::new(state.db.clone()).assess(risk).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_risks(
    State(state): State<AppState>,
    query: Result<Query<RiskListQuery>, QueryRejection>,
) -> Result<Json<Vec<RiskRecord>>, ApiError> {
    let Query(query) = query?;
    let level = query.level_filter()?;
    let risks = RiskService::new(state.db.clone()).list(level).await?;

    Ok(Json(risks))
}

pub async fn get_risk(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RiskRecord>, ApiError> {
    let Path(id) = id?;
    let risk = RiskService::new(state.db.clone()).get(id).await?;
    Ok(Json(risk))
}
