//! Check command implementation

use std::path::Path;

use colored::Colorize;
use vault_core::{CheckStatus, Error, FsVaultStore, IndexSyncer};

use crate::error::{CliError, Result};

use super::{load_config, resolve_start, resolve_vault};

/// Run the check command.
///
/// Exits non-zero when the index tree is missing documents or out of date,
/// so the command is usable as a guard in scripts.
pub fn run_check(folder: &str, vault: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let vault_root = resolve_vault(vault)?;
    let config = load_config(&vault_root, config_path)?;
    let start = resolve_start(&vault_root, folder);

    let store = FsVaultStore::new();
    let syncer = IndexSyncer::new(&store, &config, vault_root);

    let report = match syncer.check(&start) {
        Ok(report) => report,
        Err(Error::IneligibleRoot { name, reason }) => {
            println!(
                "{} Folder \"{}\" cannot be checked: {}",
                "skipped".yellow().bold(),
                name,
                reason
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match report.status {
        CheckStatus::Healthy => {
            println!("{} Index is up to date.", "OK".green().bold());
            Ok(())
        }
        CheckStatus::Missing | CheckStatus::Stale => {
            for item in &report.missing {
                println!(
                    "{} {}: {}",
                    "missing".yellow().bold(),
                    item.document,
                    item.description
                );
            }
            for item in &report.stale {
                println!(
                    "{} {}: {}",
                    "stale".yellow().bold(),
                    item.document,
                    item.description
                );
            }
            Err(CliError::user(
                "index is out of date; run `vault-index sync`",
            ))
        }
    }
}
