//! Sync command implementation

use std::path::Path;

use colored::Colorize;
use vault_core::{Error, FsVaultStore, IndexSyncer, SyncOptions};

use crate::error::{CliError, Result};

use super::{load_config, resolve_start, resolve_vault};

/// Run the sync command.
///
/// A policy rejection is a notice, not a failure: the run does not start and
/// the exit is clean. Per-node errors are printed and turn into a non-zero
/// exit after the rest of the tree has been processed.
pub fn run_sync(
    folder: &str,
    vault: Option<&Path>,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let vault_root = resolve_vault(vault)?;
    let config = load_config(&vault_root, config_path)?;
    let start = resolve_start(&vault_root, folder);

    let store = FsVaultStore::new();
    let syncer = IndexSyncer::new(&store, &config, vault_root);

    let report = match syncer.sync_with_options(&start, SyncOptions { dry_run }) {
        Ok(report) => report,
        Err(Error::IneligibleRoot { name, reason }) => {
            println!(
                "{} Folder \"{}\" was not indexed: {}",
                "skipped".yellow().bold(),
                name,
                reason
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for action in &report.actions {
        println!("{} {}", "=>".blue().bold(), action);
    }
    for error in &report.errors {
        eprintln!("{} {}", "error".red().bold(), error);
    }

    if !report.success {
        return Err(CliError::user(format!(
            "{} folder(s) failed to index",
            report.errors.len()
        )));
    }

    println!(
        "{} {} document(s) written, {} up to date.",
        "OK".green().bold(),
        report.written(),
        report.actions.len().saturating_sub(report.written())
    );
    Ok(())
}
