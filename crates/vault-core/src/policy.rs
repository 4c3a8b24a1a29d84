//! Path policy
//!
//! Pure decision component: which folders may start a run, which names are
//! excluded from traversal. Mirrored output paths are built incrementally by
//! the synchronizer (parent mirrored path joined with the child name), so no
//! path arithmetic lives here.

use vault_fs::NormalizedPath;

use crate::{Error, Result};

/// Why a folder was rejected as the start of an indexing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The entry is the vault root itself and has no parent
    NoParent,
    /// The entry is the output root and must not index itself
    IsOutputRoot,
    /// The entry's name matches a skip rule
    MatchesSkipRule,
    /// The entry is nested below a top-level folder
    NotTopLevel,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::NoParent => "it is the vault root and has no parent folder",
            Self::IsOutputRoot => "it is the output folder itself",
            Self::MatchesSkipRule => "its name matches a skip rule",
            Self::NotTopLevel => "only folders directly under the vault root can be indexed",
        };
        write!(f, "{}", message)
    }
}

/// Check whether `name` is excluded by the skip rules.
///
/// Containment match: a folder or document is skipped if its name contains
/// any rule as a substring. Case-sensitive, no globbing. This is the single
/// filtering mechanism for both folders and documents.
pub fn should_skip(name: &str, skip_rules: &[String]) -> bool {
    skip_rules.iter().any(|rule| name.contains(rule.as_str()))
}

/// Check whether `start` may begin an indexing run.
///
/// A start folder is eligible only when it sits directly under the vault
/// root, is not the output root, and is not itself excluded by a skip rule.
/// This keeps the run from ever summarizing the summary tree.
pub fn check_eligible_root(
    start: &NormalizedPath,
    vault_root: &NormalizedPath,
    skip_rules: &[String],
    output_root_name: &str,
) -> Result<()> {
    let reject = |name: &str, reason: RejectReason| Error::IneligibleRoot {
        name: name.to_string(),
        reason,
    };

    if start == vault_root {
        return Err(reject(start.as_str(), RejectReason::NoParent));
    }

    let name = match start.file_name() {
        Some(name) => name,
        None => return Err(reject(start.as_str(), RejectReason::NoParent)),
    };

    if name == output_root_name {
        return Err(reject(name, RejectReason::IsOutputRoot));
    }

    if should_skip(name, skip_rules) {
        return Err(reject(name, RejectReason::MatchesSkipRule));
    }

    if start.parent().as_ref() != Some(vault_root) {
        return Err(reject(name, RejectReason::NotTopLevel));
    }

    Ok(())
}
