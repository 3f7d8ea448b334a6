use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// 默认探测超时预算
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

/// 存活探测接口
///
/// 这个trait定义了单个候选者的存活判定，允许不同的探测实现
/// 并支持依赖注入和单元测试
#[async_trait]
pub trait Probe: Send + Sync {
    /// 探测单个URL当前是否存活
    ///
    /// 只回答"现在能不能用"：超时预算内收到2xx响应为存活，
    /// 其余情况（网络错误、超时、非2xx、畸形URL）一律为不存活。
    /// 实现不返回错误也不panic，探测失败就是false。
    async fn is_alive(&self, url: &str) -> bool;
}

/// 基于HTTP GET的存活探测器
///
/// 对目标URL发起一次GET请求，每次探测独立，不缓存任何结果。
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    /// 创建默认超时预算（5秒）的探测器
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    /// 创建指定超时预算的探测器
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        // 超时作用于整个请求，包括建连和读取响应头
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn is_alive(&self, url: &str) -> bool {
        let start_time = Instant::now();
        debug!("Probing candidate: {}", url);

        // 畸形URL会在send阶段报错，走同一条失败路径
        match self.client.get(url).send().await {
            Ok(response) => {
                let latency = start_time.elapsed();
                let status = response.status();
                info!(
                    "Checked server {} - Status: {} ({}ms)",
                    url,
                    status,
                    latency.as_millis()
                );
                status.is_success()
            }
            Err(e) => {
                error!("Error checking server {}: {}", url, e);
                false
            }
        }
    }
}
