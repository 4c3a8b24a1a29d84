//! Core synchronization engine for Vault Indexer
//!
//! Scans a folder subtree of a note vault and maintains one generated index
//! document per folder under a mirrored output tree, preserving user prose
//! in each document's summary region.

pub mod config;
pub mod error;
pub mod policy;
pub mod scanner;
pub mod store;
pub mod sync;
pub mod synthesis;

pub use config::{CONFIG_FILE_NAME, IndexConfig};
pub use error::{Error, Result};
pub use policy::RejectReason;
pub use scanner::FolderNode;
pub use store::{ChildEntry, ChildKind, FsVaultStore, MemoryVaultStore, VaultStore};
pub use sync::{CheckReport, CheckStatus, IndexSyncer, SyncOptions, SyncReport};
pub use synthesis::{DocumentSynthesizer, SectionTemplates};
