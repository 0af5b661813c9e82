//! Watched command - inspect or edit the rated collection

use crate::{CinemateError, cli::WatchedCommands, output, store::RatedStore};

type Result<T> = std::result::Result<T, CinemateError>;

/// Execute a watched subcommand
///
/// # Errors
/// Returns an error if the entry does not exist or the store cannot be written.
pub fn execute(store: &mut RatedStore, command: &WatchedCommands, quiet: bool) -> Result<()> {
    match command {
        WatchedCommands::List => list(store, quiet),
        WatchedCommands::Summary => {
            println!("{}", output::summary(&store.summary(), quiet));
            Ok(())
        }
        WatchedCommands::Remove { id } => remove(store, id, quiet),
    }
}

fn list(store: &RatedStore, quiet: bool) -> Result<()> {
    if store.is_empty() {
        if !quiet {
            println!("No rated movies yet.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Watched movies:");
    }
    for entry in store.entries() {
        println!("{}", output::rated_entry(entry, quiet));
    }
    Ok(())
}

fn remove(store: &mut RatedStore, id: &str, quiet: bool) -> Result<()> {
    let title = store
        .get(id)
        .map(|entry| entry.title.clone())
        .ok_or_else(|| CinemateError::InvalidInput(format!("'{id}' is not in the watched list")))?;

    store.remove(id)?;

    if !quiet {
        println!("Removed {title} ({id})");
    }
    Ok(())
}
