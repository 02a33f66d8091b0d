use crate::error::ApiError;
use crate::services::{RiskCsvExporter, RiskService};
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::{RiskLevel, RiskMatrix};
use shared::dto::{LevelCountsResponse, RiskListQuery, RiskSummaryResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/heatmap", get(heatmap))
        .route("/reports/summary", get(summary))
        .route("/reports/risks.csv", get(export_csv))
}

pub async fn heatmap(State(state): State<AppState>) -> Result<Json<RiskMatrix>, ApiError> {
    let matrix = RiskService::new(state.db.clone()).heatmap().await?;
    Ok(Json(matrix))
}

pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<RiskSummaryResponse>, ApiError> {
    let counts = RiskService::new(state.db.clone()).level_counts().await?;

    Ok(Json(RiskSummaryResponse {
        total: counts.total(),
        average_score: counts.average_score(),
        counts: LevelCountsResponse {
            low: counts.get(RiskLevel::Low),
            medium: counts.get(RiskLevel::Medium),
            high: counts.get(RiskLevel::High),
            critical: counts.get(RiskLevel::Critical),
        },
    }))
}

pub async fn export_csv(
    State(state): State<AppState>,
    query: Result<Query<RiskListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let level = query.level_filter()?;
    let risks = RiskService::new(state.db.clone()).list(level).await?;
    let csv = RiskCsvExporter::new().export(&risks)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"risks.csv\"",
            ),
        ],
        csv,
    ))
}
