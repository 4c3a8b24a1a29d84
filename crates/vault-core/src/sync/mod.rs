//! Tree synchronization
//!
//! Orchestrates scanning and synthesis over a whole subtree and reports what
//! happened.

mod check;
mod engine;

pub use check::{CheckItem, CheckReport, CheckStatus};
pub use engine::{IndexSyncer, SyncOptions, SyncReport};
