use crate::router::router::create_app_router;
use beacon_core::config::loader::load_config_or_default;
use beacon_core::config::model::Config;
use beacon_failover::{HttpProber, Selector};

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 应用状态，包含故障转移选择器和配置
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<Selector>,
    pub config: Arc<Config>,
}

impl AppState {
    /// 从磁盘配置创建应用状态
    pub fn new() -> Result<Self> {
        let config = load_config_or_default();
        Self::from_config(config)
    }

    /// 从给定配置创建应用状态
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;

        let prober = HttpProber::with_timeout(config.settings.probe_timeout())?;
        let selector = Arc::new(Selector::new(Arc::new(prober)));

        Ok(Self {
            selector,
            config: Arc::new(config),
        })
    }
}

/// 创建应用路由
pub fn create_app(state: AppState) -> Router {
    create_app_router().with_state(state)
}

/// 启动应用服务器
pub async fn start_server() -> Result<()> {
    // 初始化日志 - 完全依赖RUST_LOG环境变量
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting Beacon API server...");

    // 显示配置信息
    let config_path = beacon_core::config::loader::get_config_path();
    info!("Configuration file: {}", config_path);

    if let Ok(config_env) = std::env::var("CONFIG_PATH") {
        info!("CONFIG_PATH environment variable: {}", config_env);
    } else {
        info!("CONFIG_PATH environment variable: not set (using default paths)");
    }

    // 创建应用状态
    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            return Err(e);
        }
    };

    // 创建应用
    let app = create_app(app_state.clone());

    // 启动服务器：BIND_ADDRESS环境变量优先于配置文件
    let bind_addr = std::env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| app_state.config.settings.bind_address.clone());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /              - API information");
    info!("  GET  /health        - Health check");
    info!("  GET  /servers/find  - Find the online server with the lowest priority");
    info!("  POST /servers/find  - Find the online server with the lowest priority (JSON body)");

    // 设置优雅关闭
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {}", e);
        }
        info!("Shutdown signal received");
    };

    // 启动服务器
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal);

    if let Err(e) = server.await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Application shutdown complete");
    Ok(())
}
