//! AutoApply - job application automation service
//!
//! Main entry point for the AutoApply CLI and server.

mod adapters;
mod cli;
mod cmd_config;
mod server;

use clap::Parser;

use autoapply_config::ConfigLoader;

use crate::adapters::resolve_config_path;
use crate::cli::{Cli, Commands};
use crate::cmd_config::handle_config_command;
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = ConfigLoader::load_or_default(&resolve_config_path(&cli.config))?;

    match cli.command {
        None => {
            init_tracing(&config.logging)?;
            run_server(config).await
        }
        Some(Commands::Run { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            init_tracing(&config.logging)?;
            run_server(config).await
        }
        Some(Commands::Config { action }) => handle_config_command(action, &config),
    }
}
