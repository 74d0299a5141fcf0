//! CLI module for the job tracking API
//!
//! Currently a single subcommand, `serve`, which runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Job application tracking API
#[derive(Parser)]
#[command(name = "jobtrack-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
