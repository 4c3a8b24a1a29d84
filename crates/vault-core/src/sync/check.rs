//! Check types for index validation
//!
//! Reports whether the mirrored index tree matches what a sync would
//! produce, without writing anything.

use serde::{Deserialize, Serialize};

/// Status of an index check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Every index document exists with current content
    Healthy,
    /// Some index documents are missing
    Missing,
    /// Some index documents exist but no longer match the tree
    Stale,
}

/// One index document that is missing or stale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckItem {
    /// Path of the index document
    pub document: String,
    /// Human-readable description of the problem
    pub description: String,
}

/// Report from an index check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    /// Documents a sync would create
    pub missing: Vec<CheckItem>,
    /// Documents a sync would rewrite
    pub stale: Vec<CheckItem>,
}

impl CheckReport {
    /// Create a healthy check report with no issues
    pub fn healthy() -> Self {
        Self {
            status: CheckStatus::Healthy,
            missing: Vec::new(),
            stale: Vec::new(),
        }
    }

    /// Build a report from collected items, deriving the overall status.
    /// Missing documents dominate stale ones.
    pub fn from_items(missing: Vec<CheckItem>, stale: Vec<CheckItem>) -> Self {
        let status = if !missing.is_empty() {
            CheckStatus::Missing
        } else if !stale.is_empty() {
            CheckStatus::Stale
        } else {
            CheckStatus::Healthy
        };
        Self {
            status,
            missing,
            stale,
        }
    }
}
