use crate::candidate::Candidate;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// 静态候选列表：未在请求中提供候选时的回退来源
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// 单次探测的超时预算（毫秒）
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// HTTP服务监听地址
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            candidates: Vec::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probe_timeout_ms: default_probe_timeout_ms(),
            bind_address: default_bind_address(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        // 验证settings
        if self.settings.probe_timeout_ms == 0 {
            anyhow::bail!("probe_timeout_ms must be greater than 0");
        }
        if self.settings.probe_timeout_ms > 300_000 {
            anyhow::bail!(
                "probe_timeout_ms {} is too large (maximum 300000)",
                self.settings.probe_timeout_ms
            );
        }
        if self.settings.bind_address.trim().is_empty() {
            anyhow::bail!("bind_address must not be empty");
        }

        // 验证静态候选列表
        for candidate in &self.candidates {
            candidate.validate()?;
        }

        Ok(())
    }
}

impl Settings {
    /// 探测超时预算
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}
