//! Fleet CLI - Command-line interface
//!
//! Commands:
//! - serve: Start the fleet dashboard API (default when no command is given)

mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use server::ServerArgs;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(about = "Fleet dashboard API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve(ServerArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => server::run(args),
        None => server::run(ServerArgs::default()),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: info)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["fleet"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["fleet", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.port, 8080);
                assert_eq!(args.host.to_string(), "0.0.0.0");
            }
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["fleet", "serve", "--port", "70000"]).is_err());
    }
}
