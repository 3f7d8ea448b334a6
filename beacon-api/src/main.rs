//! Beacon API Server
//!
//! Main entry point for the Beacon server finding service

use beacon_api::start_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    start_server().await?;
    Ok(())
}
