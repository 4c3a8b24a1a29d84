//! Filesystem primitives for Vault Indexer
//!
//! Provides normalized path handling and atomic document writes.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
