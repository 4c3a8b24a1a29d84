//! Filesystem-backed vault store

use std::fs;

use tracing::debug;
use vault_fs::{NormalizedPath, io};

use super::{ChildEntry, VaultStore};
use crate::Result;

/// Vault store over a real directory tree.
///
/// Directory entries are sorted by name: `std::fs::read_dir` order is
/// platform-dependent, and listing order decides cross-reference order in
/// every generated document.
#[derive(Debug, Default)]
pub struct FsVaultStore;

impl FsVaultStore {
    pub fn new() -> Self {
        Self
    }
}

impl VaultStore for FsVaultStore {
    fn list_children(&self, folder: &NormalizedPath) -> Result<Vec<ChildEntry>> {
        let native = folder.to_native();
        let mut children = Vec::new();

        let entries = fs::read_dir(&native).map_err(|e| vault_fs::Error::io(&native, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| vault_fs::Error::io(&native, e))?;
            let name = entry.file_name().to_string_lossy().to_string();
            let file_type = entry
                .file_type()
                .map_err(|e| vault_fs::Error::io(entry.path(), e))?;
            if file_type.is_dir() {
                children.push(ChildEntry::folder(name));
            } else if file_type.is_file() {
                children.push(ChildEntry::file(name));
            }
            // Symlinks and other entry kinds are ignored
        }

        children.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(folder = %folder, count = children.len(), "listed children");
        Ok(children)
    }

    fn folder_exists(&self, path: &NormalizedPath) -> bool {
        path.is_dir()
    }

    fn create_folder(&self, path: &NormalizedPath) -> Result<()> {
        io::create_dir_all(path)?;
        Ok(())
    }

    fn document_exists(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }

    fn read_document(&self, path: &NormalizedPath) -> Result<String> {
        Ok(io::read_text(path)?)
    }

    fn create_document(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        Ok(io::write_text(path, text)?)
    }

    fn write_document(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        Ok(io::write_text(path, text)?)
    }
}
