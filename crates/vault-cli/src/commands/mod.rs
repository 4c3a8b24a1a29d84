//! Command implementations

mod check;
mod sync;

pub use check::run_check;
pub use sync::run_sync;

use std::path::Path;

use vault_core::{CONFIG_FILE_NAME, IndexConfig};
use vault_fs::NormalizedPath;

use crate::error::Result;

/// Resolve the vault root from the `--vault` flag or the current directory.
pub(crate) fn resolve_vault(vault: Option<&Path>) -> Result<NormalizedPath> {
    match vault {
        Some(path) => Ok(NormalizedPath::new(path)),
        None => Ok(NormalizedPath::new(std::env::current_dir()?)),
    }
}

/// Resolve the start folder path from its vault-relative name.
pub(crate) fn resolve_start(vault: &NormalizedPath, folder: &str) -> NormalizedPath {
    let trimmed = folder.trim_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        return vault.clone();
    }
    vault.join(trimmed)
}

/// Load configuration: an explicit `--config` file, the vault's own
/// `.vault-index.toml` when present, or the defaults.
pub(crate) fn load_config(
    vault: &NormalizedPath,
    explicit: Option<&Path>,
) -> Result<IndexConfig> {
    if let Some(path) = explicit {
        return Ok(IndexConfig::load(&NormalizedPath::new(path))?);
    }
    let candidate = vault.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        return Ok(IndexConfig::load(&candidate)?);
    }
    Ok(IndexConfig::default())
}
