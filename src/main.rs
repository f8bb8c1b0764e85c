//! jobsift CLI (Rust)
//!
//! Command-line utility over a job listing snapshot:
//! - `query` - search, filter and sort listings
//! - `saved` - manage the saved-listings store

use anyhow::Result;
use clap::Parser;

use jobsift::cli::{Cli, Commands};
use jobsift::commands;
use jobsift::error::AppError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    // Execute command
    let result = match cli.command {
        Some(Commands::Query(args)) => commands::query::execute_query(args),
        Some(Commands::Saved(args)) => commands::saved::execute_saved(args),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    // Handle result and exit with appropriate code
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidInput(_) | AppError::Configuration(_) => 1,
        AppError::ParseError(_) => 2,
        AppError::NotFound(_) => 3,
        AppError::StoreError(_) => 4,
        AppError::Internal(_) => 5,
    }
}
