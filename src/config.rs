//! Command-line and environment configuration.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;

/// Folio portfolio admin and task roadmap.
#[derive(Debug, Parser)]
#[command(name = "folio", about = "Portfolio admin and task roadmap", version)]
pub struct Cli {
    /// `PostgreSQL` connection URL; the in-memory store is used when unset
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Directory holding the seed JSON files and the resume
    #[arg(long, env = "FOLIO_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: Utf8PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, env = "FOLIO_LOG_JSON", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the admin HTTP server
    Serve(ServeArgs),

    /// Load the seed JSON files into the database
    Seed {
        /// Remove every existing record first
        #[arg(long)]
        reset: bool,
    },
}

/// Options for the `serve` subcommand.
#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FOLIO_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Password for the single admin account
    #[arg(long, env = "FOLIO_ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Resume file name inside the data directory
    #[arg(long, env = "FOLIO_RESUME_FILE", default_value = "resume.pdf")]
    pub resume_file: String,
}
