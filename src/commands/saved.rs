//! Saved-listings command implementation

use crate::cli::{SavedArgs, SavedCommands};
use crate::error::AppError;
use crate::saved::SavedStore;

/// Execute a saved-listings subcommand
pub fn execute_saved(args: SavedArgs) -> Result<String, AppError> {
    let store = SavedStore::open_default()?;

    match args.command {
        SavedCommands::Add { url } => {
            if store.add(&url)? {
                Ok(format!("✓ Saved {}", url))
            } else {
                Ok(format!("Already saved: {}", url))
            }
        }
        SavedCommands::Remove { url } => {
            if store.remove(&url)? {
                Ok(format!("✓ Removed {}", url))
            } else {
                Err(AppError::NotFound(format!("{} is not saved", url)))
            }
        }
        SavedCommands::List => {
            let saved = store.list()?;
            if saved.is_empty() {
                return Ok(
                    "No saved listings. Use 'jobsift saved add <url>' to save one.".to_string()
                );
            }

            let mut output = format!("Saved listings ({}):\n", saved.len());
            for url in saved {
                output.push_str(&format!("  • {}\n", url));
            }

            Ok(output)
        }
    }
}
