use super::prober::Probe;
use beacon_core::Candidate;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// 选择失败的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// 没有任何候选者存活（包括候选列表为空的情况）
    #[error("No servers are online")]
    NoLiveCandidate { probed: usize },
}

/// 优先级故障转移选择器
///
/// 对一批候选服务器并发探测存活状态，从存活者中选出priority数值
/// 最小的一个。选择是一次性的：每次调用都重新探测全部候选者。
pub struct Selector {
    prober: Arc<dyn Probe>,
}

impl Selector {
    pub fn new(prober: Arc<dyn Probe>) -> Self {
        Self { prober }
    }

    /// 从候选列表中选出存活且优先级最高（数值最小）的服务器
    ///
    /// 所有候选者各探测一次，等全部探测结束后再汇总，不会因为
    /// 先返回的结果提前结束。同优先级时保持输入顺序，先出现者胜出。
    pub async fn select(&self, candidates: &[Candidate]) -> Result<Candidate, SelectionError> {
        info!("Starting to find the server with the lowest priority");

        let mut tasks = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            debug!(
                "Scheduling probe for candidate: {} (priority: {})",
                candidate.url, candidate.priority
            );
            let prober = self.prober.clone();
            let url = candidate.url.clone();
            tasks.push(tokio::spawn(async move { prober.is_alive(&url).await }));
        }

        // 等待所有探测任务完成
        debug!("Waiting for {} probe tasks to complete", tasks.len());
        let outcomes = join_all(tasks).await;

        // 每个候选者恰好对应一个探测结果，按输入位置配对
        let mut live: Vec<&Candidate> = Vec::new();
        for (candidate, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                Ok(true) => live.push(candidate),
                Ok(false) => {}
                Err(e) => {
                    // 探测任务崩溃按不存活处理，选择流程照常进行
                    error!("Probe task failed for {}: {}", candidate.url, e);
                }
            }
        }

        // 稳定排序：同优先级保持输入顺序，结果是确定性的
        live.sort_by_key(|c| c.priority);

        match live.first() {
            Some(&candidate) => {
                info!(
                    "Selected server: {} with priority {}",
                    candidate.url, candidate.priority
                );
                Ok(candidate.clone())
            }
            None => {
                warn!("No servers are online");
                Err(SelectionError::NoLiveCandidate {
                    probed: candidates.len(),
                })
            }
        }
    }
}
