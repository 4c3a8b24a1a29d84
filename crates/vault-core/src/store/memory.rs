//! In-memory vault store
//!
//! Backs the engine with a flat list of entries in insertion order, which is
//! also its listing order. Used by tests and by embedders that stage content
//! before committing it anywhere.

use std::cell::RefCell;
use std::io::ErrorKind;

use vault_fs::NormalizedPath;

use super::{ChildEntry, VaultStore};
use crate::Result;

#[derive(Debug, Clone)]
enum MemNode {
    Folder,
    Document(String),
}

/// Vault store over in-memory entries. The root folder is `/`.
#[derive(Debug)]
pub struct MemoryVaultStore {
    nodes: RefCell<Vec<(String, MemNode)>>,
}

impl Default for MemoryVaultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVaultStore {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![("/".to_string(), MemNode::Folder)]),
        }
    }

    /// The store's root path.
    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new("/")
    }

    /// Add a folder, builder-style.
    pub fn with_folder(self, path: &str) -> Self {
        self.nodes
            .borrow_mut()
            .push((path.to_string(), MemNode::Folder));
        self
    }

    /// Add a document with content, builder-style.
    pub fn with_document(self, path: &str, content: &str) -> Self {
        self.nodes
            .borrow_mut()
            .push((path.to_string(), MemNode::Document(content.to_string())));
        self
    }

    /// Fetch a document's content, if present.
    pub fn document(&self, path: &str) -> Option<String> {
        self.nodes.borrow().iter().rev().find_map(|(p, node)| {
            if p == path {
                match node {
                    MemNode::Document(text) => Some(text.clone()),
                    MemNode::Folder => None,
                }
            } else {
                None
            }
        })
    }

    /// All entry paths currently in the store, in insertion order.
    pub fn paths(&self) -> Vec<String> {
        self.nodes.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.nodes.borrow().iter().position(|(p, _)| p == path)
    }

    fn missing(path: &NormalizedPath) -> crate::Error {
        vault_fs::Error::io(
            path.to_native(),
            std::io::Error::new(ErrorKind::NotFound, "no such entry"),
        )
        .into()
    }
}

impl VaultStore for MemoryVaultStore {
    fn list_children(&self, folder: &NormalizedPath) -> Result<Vec<ChildEntry>> {
        if !self.folder_exists(folder) {
            return Err(Self::missing(folder));
        }
        let children = self
            .nodes
            .borrow()
            .iter()
            .filter(|(path, _)| {
                NormalizedPath::new(path).parent().as_ref() == Some(folder)
            })
            .map(|(path, node)| {
                let name = NormalizedPath::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string();
                match node {
                    MemNode::Folder => ChildEntry::folder(name),
                    MemNode::Document(_) => ChildEntry::file(name),
                }
            })
            .collect();
        Ok(children)
    }

    fn folder_exists(&self, path: &NormalizedPath) -> bool {
        self.nodes
            .borrow()
            .iter()
            .any(|(p, node)| p == path.as_str() && matches!(node, MemNode::Folder))
    }

    fn create_folder(&self, path: &NormalizedPath) -> Result<()> {
        if !self.folder_exists(path) {
            self.nodes
                .borrow_mut()
                .push((path.as_str().to_string(), MemNode::Folder));
        }
        Ok(())
    }

    fn document_exists(&self, path: &NormalizedPath) -> bool {
        self.nodes
            .borrow()
            .iter()
            .any(|(p, node)| p == path.as_str() && matches!(node, MemNode::Document(_)))
    }

    fn read_document(&self, path: &NormalizedPath) -> Result<String> {
        self.document(path.as_str()).ok_or_else(|| Self::missing(path))
    }

    fn create_document(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        self.nodes
            .borrow_mut()
            .push((path.as_str().to_string(), MemNode::Document(text.to_string())));
        Ok(())
    }

    fn write_document(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        match self.position(path.as_str()) {
            Some(idx) => {
                self.nodes.borrow_mut()[idx].1 = MemNode::Document(text.to_string());
                Ok(())
            }
            None => Err(Self::missing(path)),
        }
    }
}
