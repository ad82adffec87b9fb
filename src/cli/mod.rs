//! CLI module for Rately
//!
//! Provides subcommands for operating the platform:
//! - `serve`: run the API server (default mode)
//! - `schema`: print the PostgreSQL schema for provisioning

pub mod serve;

use clap::{Parser, Subcommand};

/// Rately - Store rating platform API
#[derive(Parser)]
#[command(name = "rately")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print the PostgreSQL schema to stdout
    Schema,
}
