use crate::state::AppState;
use axum::{extract::Path, routing::get, Json, Router};
use domain::hint_for_label;
use shared::dto::ComplianceHintResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/compliance-hint/:level", get(get_hint))
}

/// Never fails: unknown labels get the default hint and are echoed back as sent.
pub async fn get_hint(Path(level): Path<String>) -> Json<ComplianceHintResponse> {
    let hint = hint_for_label(&level).to_string();
    Json(ComplianceHintResponse { level, hint })
}
