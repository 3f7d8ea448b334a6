//! Beacon API Server Library
//!
//! This library provides the HTTP shell for the Beacon server finding system

pub mod app;
pub mod router;

// Re-export the main server function
pub use app::start_server;
