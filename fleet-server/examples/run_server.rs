//! Run the fleet server standalone
//!
//! Run with: cargo run -p fleet-server --example run_server

use fleet_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();
    println!("Try http://localhost:{}/api/fleet-summary", config.port);

    run_server(config).await
}
