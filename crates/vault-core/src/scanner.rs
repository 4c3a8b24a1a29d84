//! Tree scanner
//!
//! Walks a folder subtree through the store and builds the in-memory model
//! the synthesizer renders from. Read-only; skip decisions happen here and
//! nowhere later in the pipeline.

use tracing::debug;
use vault_fs::NormalizedPath;

use crate::store::{ChildKind, VaultStore};
use crate::{Error, Result, policy};

/// Extension of the documents that participate in indexing.
pub const DOC_EXTENSION: &str = "md";

/// One folder at scan time.
///
/// Built once per scan and immutable afterwards. `subfolders` and
/// `documents` keep store listing order; skipped children appear in neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// The folder's own name, not a path
    pub name: String,
    pub subfolders: Vec<FolderNode>,
    /// Document names with the extension stripped
    pub documents: Vec<String>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subfolders: Vec::new(),
            documents: Vec::new(),
        }
    }

    /// Total number of folders in this subtree, self included.
    pub fn folder_count(&self) -> usize {
        1 + self
            .subfolders
            .iter()
            .map(FolderNode::folder_count)
            .sum::<usize>()
    }
}

/// Scan a folder subtree into a `FolderNode` tree.
///
/// Depth-first, children in listing order. A child whose name matches a skip
/// rule is omitted entirely: documents are not recorded and subfolders are
/// not descended into. Files without the `md` extension are ignored.
///
/// Fails with `NotADirectory` if `folder` is not a folder in the store.
pub fn scan(
    store: &dyn VaultStore,
    folder: &NormalizedPath,
    skip_rules: &[String],
) -> Result<FolderNode> {
    if !store.folder_exists(folder) {
        return Err(Error::NotADirectory {
            path: folder.clone(),
        });
    }
    let name = folder.file_name().unwrap_or_default().to_string();
    scan_folder(store, folder, name, skip_rules)
}

fn scan_folder(
    store: &dyn VaultStore,
    folder: &NormalizedPath,
    name: String,
    skip_rules: &[String],
) -> Result<FolderNode> {
    let mut node = FolderNode::new(name);

    for child in store.list_children(folder)? {
        if policy::should_skip(&child.name, skip_rules) {
            debug!(folder = %folder, child = %child.name, "skipped by rule");
            continue;
        }
        match child.kind {
            ChildKind::File => {
                if child.extension.as_deref() == Some(DOC_EXTENSION) {
                    let stem = child
                        .name
                        .strip_suffix(&format!(".{DOC_EXTENSION}"))
                        .unwrap_or(&child.name);
                    node.documents.push(stem.to_string());
                }
            }
            ChildKind::Folder => {
                let child_path = folder.join(&child.name);
                node.subfolders
                    .push(scan_folder(store, &child_path, child.name, skip_rules)?);
            }
        }
    }

    Ok(node)
}
