//! Beacon Core Library
//!
//! This library provides core functionality for the Beacon API system including:
//! - Candidate server model and validation
//! - Configuration management

pub mod candidate;
pub mod config;

// Re-export commonly used types
pub use candidate::{parse_candidate_lists, Candidate, CandidateError};
pub use config::loader::{get_config_path, load_config, load_config_from_path, load_config_or_default};
pub use config::model::{Config, Settings};
