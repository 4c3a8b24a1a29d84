//! Vault store abstraction
//!
//! The engine never touches a filesystem directly; it talks to a
//! `VaultStore`. Two backends exist: `FsVaultStore` over a real directory
//! tree and `MemoryVaultStore` for tests and embedding.

mod fs;
mod memory;

pub use fs::FsVaultStore;
pub use memory::MemoryVaultStore;

use vault_fs::NormalizedPath;

use crate::Result;

/// Kind of a folder child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    File,
    Folder,
}

/// One immediate child of a folder, in store listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    /// Child name including any extension
    pub name: String,
    pub kind: ChildKind,
    /// File extension without the dot, if any
    pub extension: Option<String>,
}

impl ChildEntry {
    /// Create a file entry, deriving the extension from the name.
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        let extension = name.rfind('.').and_then(|idx| {
            if idx == 0 {
                None
            } else {
                Some(name[idx + 1..].to_string())
            }
        });
        Self {
            name,
            kind: ChildKind::File,
            extension,
        }
    }

    /// Create a folder entry.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChildKind::Folder,
            extension: None,
        }
    }
}

/// Storage primitives required by the engine.
///
/// Paths are store-absolute: each backend decides what its root means, and
/// the engine only ever extends paths it was given. Every operation either
/// completes or fails outright; nothing is retried.
pub trait VaultStore {
    /// List the immediate children of a folder, in listing order.
    ///
    /// The order returned here is the order cross-reference lines are
    /// rendered in, so it must be stable across calls.
    fn list_children(&self, folder: &NormalizedPath) -> Result<Vec<ChildEntry>>;

    /// Whether a folder exists at `path`. A file at `path` is not a folder.
    fn folder_exists(&self, path: &NormalizedPath) -> bool;

    /// Create a folder. The parent is expected to exist already.
    fn create_folder(&self, path: &NormalizedPath) -> Result<()>;

    /// Whether a document exists at `path`.
    fn document_exists(&self, path: &NormalizedPath) -> bool;

    /// Read a document's full text.
    fn read_document(&self, path: &NormalizedPath) -> Result<String>;

    /// Create a new document with the given text.
    fn create_document(&self, path: &NormalizedPath, text: &str) -> Result<()>;

    /// Replace an existing document's text in one atomic write.
    fn write_document(&self, path: &NormalizedPath, text: &str) -> Result<()>;
}
