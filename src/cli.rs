//! CLI mode implementation
//!
//! Provides the command-line interface for the jobsift tools

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jobsift CLI
#[derive(Parser)]
#[command(name = "jobsift")]
#[command(about = "Job listing search, filter and sort utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search, filter and sort a job listing snapshot
    Query(QueryArgs),
    /// Manage the saved-listings store
    Saved(SavedArgs),
}

/// Query command arguments
#[derive(Parser, Clone, Debug)]
pub struct QueryArgs {
    /// Path to the snapshot file (JSON array of listings)
    #[arg(short = 'i', long, env = "JOBSIFT_SNAPSHOT")]
    pub input: PathBuf,

    /// Optional enrichment file (JSON map of listing URL to field patch)
    #[arg(long)]
    pub enrich: Option<PathBuf>,

    /// Search text; supports @age:N, @company:TEXT and @location:TEXT tags
    #[arg(short = 'q', long, default_value = "")]
    pub query: String,

    /// Sort order: title, company, location, recent, experience or salary
    #[arg(short = 's', long, default_value = "recent")]
    pub sort: String,

    /// Only keep listings posted within this many days
    #[arg(long)]
    pub age: Option<u32>,

    /// Maximum number of results (default 50, max 200)
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Only show listings present in the saved store
    #[arg(long)]
    pub saved_only: bool,

    /// Match threshold for @company: (0 to 1)
    #[arg(long)]
    pub company_threshold: Option<f64>,

    /// Match threshold for @location: (0 to 1)
    #[arg(long)]
    pub location_threshold: Option<f64>,

    /// Match threshold for general text (0 to 1)
    #[arg(long)]
    pub general_threshold: Option<f64>,
}

/// Saved-listings management arguments
#[derive(Parser, Debug)]
pub struct SavedArgs {
    #[command(subcommand)]
    pub command: SavedCommands,
}

#[derive(Subcommand, Debug)]
pub enum SavedCommands {
    /// Save a listing by URL
    Add {
        /// Listing URL
        url: String,
    },
    /// Remove a saved listing
    Remove {
        /// Listing URL
        url: String,
    },
    /// List saved listings
    List,
}
