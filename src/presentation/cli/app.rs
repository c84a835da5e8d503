use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pulsewatch: HTTP uptime monitor
///
/// Probes registered websites on a fixed cadence and raises an alert when
/// one goes down or comes back up.
#[derive(Parser, Debug)]
#[command(name = "pulsewatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `daemon`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Monitor the configured targets until Ctrl+C
    #[command(alias = "d")]
    Daemon,

    /// Probe one or more URLs once
    #[command(alias = "c")]
    Check {
        /// URLs to probe
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the configured targets once and show their status
    #[command(alias = "s")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
