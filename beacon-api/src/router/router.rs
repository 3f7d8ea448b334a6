use crate::app::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{
    health::health_check,
    servers::{find_server, find_server_with_body},
};

/// 创建应用路由
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/servers/find", get(find_server).post(find_server_with_body))
        .layer(TraceLayer::new_for_http())
}

/// 首页处理器
pub async fn index() -> &'static str {
    "Beacon API - Priority Failover Server Finder"
}
