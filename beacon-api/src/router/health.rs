use crate::app::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// 健康检查处理器
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "probe_timeout_ms": state.config.settings.probe_timeout_ms,
        "static_candidates": state.config.candidates.len(),
        "timestamp": chrono::Utc::now().timestamp()
    }))
}
