use crate::app::AppState;
use axum::extract::{rejection::JsonRejection, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use beacon_core::{parse_candidate_lists, Candidate};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// GET /servers/find 的查询参数
#[derive(Debug, Deserialize)]
pub struct FindServerQuery {
    pub urls: Option<String>,
    pub priorities: Option<String>,
}

/// 查询参数版本：urls和priorities是逗号分隔列表，按位置一一配对
///
/// 两个参数都缺省时回退到配置文件中的静态候选列表。
pub async fn find_server(
    State(state): State<AppState>,
    Query(params): Query<FindServerQuery>,
) -> axum::response::Response {
    info!("Received request to find server");

    let candidates = match (params.urls, params.priorities) {
        (Some(urls), Some(priorities)) => match parse_candidate_lists(&urls, &priorities) {
            Ok(candidates) => candidates,
            Err(e) => return validation_error_response(&e.to_string()),
        },
        (None, None) => state.config.candidates.clone(),
        _ => return validation_error_response("'urls' and 'priorities' must be provided together"),
    };

    run_selection(&state, &candidates).await
}

/// JSON body版本：直接提交候选者数组
///
/// body无法反序列化时同样返回统一的400错误格式，不走extractor的默认拒绝。
pub async fn find_server_with_body(
    State(state): State<AppState>,
    body: Result<Json<Vec<Candidate>>, JsonRejection>,
) -> axum::response::Response {
    info!("Received request to find server");

    let candidates = match body {
        Ok(Json(candidates)) => candidates,
        Err(e) => return validation_error_response(&e.body_text()),
    };

    for candidate in &candidates {
        if let Err(e) = candidate.validate() {
            return validation_error_response(&e.to_string());
        }
    }

    run_selection(&state, &candidates).await
}

async fn run_selection(state: &AppState, candidates: &[Candidate]) -> axum::response::Response {
    match state.selector.select(candidates).await {
        Ok(selected) => Json(selected).into_response(),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": {
                    "type": "no_servers_online",
                    "message": e.to_string(),
                    "code": 503
                }
            })),
        )
            .into_response(),
    }
}

fn validation_error_response(message: &str) -> axum::response::Response {
    (
        axum::http::StatusCode::BAD_REQUEST,
        Json(json!({
            "error": {
                "type": "validation_error",
                "message": message,
                "code": 400
            }
        })),
    )
        .into_response()
}
