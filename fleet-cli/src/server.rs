//! Server command - start the fleet dashboard API
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to fleet-server crate)
//! - Level 4: configuration validation

use std::net::IpAddr;

use anyhow::Result;
use clap::Args;

use fleet_server::{run_server, ServerConfig, DEFAULT_PORT};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port number to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerArgs {
    fn default() -> Self {
        let config = ServerConfig::default();
        Self {
            host: config.host,
            port: config.port,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Start server (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting Fleet Dashboard API on {}", config.addr());

    start_server(config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_port(args.port)?;

    Ok(ServerConfig {
        host: args.host,
        port: args.port,
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_server(config).await })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// The API must listen on a known port
fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        anyhow::bail!("Port 0 is not allowed; pass a fixed port with --port");
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_server_defaults() {
        let config = configure_server(&ServerArgs::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_configure_server_custom() {
        let args = ServerArgs {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
        };

        let config = configure_server(&args).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_port_zero_rejected() {
        let args = ServerArgs {
            port: 0,
            ..ServerArgs::default()
        };
        assert!(configure_server(&args).is_err());
    }
}
