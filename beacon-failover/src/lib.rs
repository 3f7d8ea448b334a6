//! Beacon Failover Library
//!
//! This library provides failover selection functionality for the Beacon API system including:
//! - HTTP liveness probing
//! - Concurrent candidate fan-out
//! - Priority based selection

pub mod failover;

// Re-export commonly used types
pub use failover::{HttpProber, Probe, SelectionError, Selector, DEFAULT_PROBE_TIMEOUT};
