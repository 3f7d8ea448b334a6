use crate::config::model::Config;
use tracing::warn;

/// 配置文件路径：优先CONFIG_PATH环境变量，否则使用当前目录下的config.toml
pub fn get_config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_config() -> Result<Config, anyhow::Error> {
    load_config_from_path(&get_config_path())
}

pub fn load_config_from_path(config_path: &str) -> Result<Config, anyhow::Error> {
    let config_str = std::fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

/// 加载配置，文件缺失或损坏时回退到默认配置
///
/// 候选列表通常由请求提供，本地没有config.toml不是致命错误。
pub fn load_config_or_default() -> Config {
    let config_path = get_config_path();
    match load_config_from_path(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "Failed to load config from '{}': {}. Using default settings",
                config_path, e
            );
            Config::default()
        }
    }
}
