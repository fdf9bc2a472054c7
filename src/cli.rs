//! CLI definitions for AutoApply.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AutoApply CLI.
#[derive(Parser)]
#[command(name = "autoapply")]
#[command(about = "Job application automation service")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides `server.port`
        #[arg(long)]
        port: Option<u16>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Check the configuration for errors and warnings
    Validate,

    /// Print the effective configuration as TOML
    Show,
}
