//! Beacon CLI Tool
//!
//! Command line interface for probing servers and running failover selection

use anyhow::Result;
use beacon_core::{parse_candidate_lists, Candidate};
use beacon_failover::{HttpProber, Probe, Selector, DEFAULT_PROBE_TIMEOUT};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Parser)]
#[command(name = "beacon-cli")]
#[command(about = "A CLI tool for the Beacon server finding service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the online server with the lowest priority
    Find {
        /// Comma-separated list of server URLs
        #[arg(short, long)]
        urls: Option<String>,
        /// Comma-separated list of server priorities
        #[arg(short, long)]
        priorities: Option<String>,
        /// Path to configuration file (used when no URLs are given)
        #[arg(short, long, default_value = "config.toml")]
        config: String,
        /// Probe timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Probe a single server URL
    Probe {
        /// Server URL to probe
        url: String,
        /// Probe timeout in milliseconds
        #[arg(long, default_value_t = 5000)]
        timeout_ms: u64,
    },
    /// Validate configuration file
    ValidateConfig {
        /// Path to configuration file
        #[arg(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Generate example configuration file
    GenerateConfig {
        /// Output path for configuration file
        #[arg(short, long, default_value = "config_example.toml")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            urls,
            priorities,
            config,
            timeout_ms,
        } => {
            let candidates = match (urls, priorities) {
                (Some(urls), Some(priorities)) => parse_candidate_lists(&urls, &priorities)?,
                (None, None) => {
                    println!("No URLs given, using candidates from: {}", config);
                    let cfg = beacon_core::config::loader::load_config_from_path(&config)?;
                    cfg.validate()?;
                    cfg.candidates
                }
                _ => {
                    eprintln!("❌ --urls and --priorities must be provided together");
                    std::process::exit(1);
                }
            };
            find_server(candidates, timeout_ms).await?;
        }
        Commands::Probe { url, timeout_ms } => {
            probe_url(&url, timeout_ms).await?;
        }
        Commands::ValidateConfig { config } => {
            println!("Validating configuration file: {}", config);
            match beacon_core::config::loader::load_config_from_path(&config) {
                Ok(cfg) => match cfg.validate() {
                    Ok(()) => {
                        println!("✅ Configuration is valid");
                        println!("  - probe timeout: {}ms", cfg.settings.probe_timeout_ms);
                        println!("  - bind address: {}", cfg.settings.bind_address);
                        println!("  - {} static candidates configured", cfg.candidates.len());
                    }
                    Err(e) => {
                        eprintln!("❌ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("❌ Configuration validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::GenerateConfig { output } => {
            println!("Generating configuration file: {}", output);
            generate_config_file(&output)?;
            println!("✅ Configuration file generated successfully");
        }
    }

    Ok(())
}

/// 执行一次故障转移选择并打印结果
async fn find_server(candidates: Vec<Candidate>, timeout_ms: Option<u64>) -> Result<()> {
    if candidates.is_empty() {
        eprintln!("❌ No candidates to probe");
        std::process::exit(1);
    }

    println!("🔍 Probing {} candidates...", candidates.len());

    let timeout = timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_PROBE_TIMEOUT);
    debug!("Using probe timeout: {}ms", timeout.as_millis());

    let prober = HttpProber::with_timeout(timeout)?;
    let selector = Selector::new(Arc::new(prober));

    match selector.select(&candidates).await {
        Ok(selected) => {
            println!(
                "✅ Selected server: {} (priority {})",
                selected.url, selected.priority
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// 探测单个URL并打印存活状态
async fn probe_url(url: &str, timeout_ms: u64) -> Result<()> {
    println!("🔍 Probing {} (timeout {}ms)", url, timeout_ms);

    let prober = HttpProber::with_timeout(Duration::from_millis(timeout_ms))?;
    if prober.is_alive(url).await {
        println!("✅ {} is online", url);
    } else {
        eprintln!("❌ {} is offline", url);
        std::process::exit(1);
    }

    Ok(())
}

/// 生成配置文件
fn generate_config_file(output_path: &str) -> Result<()> {
    let config_content = r#"# Beacon API Configuration File
# This is a basic configuration example

[settings]
# Probe timeout in milliseconds
probe_timeout_ms = 5000
# Address the HTTP server listens on
bind_address = "127.0.0.1:3000"

# Static candidate list, used when a request does not carry its own.
# Lower priority values win.
[[candidates]]
url = "https://primary.example.com"
priority = 1

[[candidates]]
url = "https://backup.example.com"
priority = 2
"#;

    std::fs::write(output_path, config_content)?;
    Ok(())
}
