//! IndexSyncer implementation
//!
//! The syncer ties the pipeline together: eligibility check, subtree scan,
//! then a pre-order walk that synthesizes one index document per folder
//! node. Pre-order is a correctness requirement, not a convenience: a
//! parent's mirrored folder must exist before any child creates its own
//! nested output folder.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vault_fs::NormalizedPath;

use crate::config::IndexConfig;
use crate::scanner::{self, FolderNode};
use crate::store::VaultStore;
use crate::synthesis::{DocumentSynthesizer, SynthesisAction, SynthesisOutcome};
use crate::{Result, policy};

use super::check::{CheckItem, CheckReport};

/// Report from a sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether the run completed without per-node errors
    pub success: bool,
    /// Actions taken, one entry per folder or document touched
    pub actions: Vec<String>,
    /// Per-node failures, each naming the node and the cause
    pub errors: Vec<String>,
}

impl SyncReport {
    /// Create an empty successful report
    pub fn success() -> Self {
        Self {
            success: true,
            actions: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Add an action to the report
    pub fn with_action(mut self, action: String) -> Self {
        self.actions.push(action);
        self
    }

    /// Number of documents created or updated (dry-run entries included)
    pub fn written(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| !a.contains("Up to date") && !a.contains("output folder"))
            .count()
    }
}

/// Options for sync runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, compute outcomes without modifying the store.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Engine for synchronizing a folder subtree into its mirrored index tree.
///
/// Two operations:
/// - **sync**: create or refresh every index document for the subtree
/// - **check**: report which index documents are missing or stale
pub struct IndexSyncer<'a> {
    store: &'a dyn VaultStore,
    config: &'a IndexConfig,
    /// Store path of the vault root; top-level eligibility and the output
    /// root location are both judged against it
    vault_root: NormalizedPath,
}

impl<'a> IndexSyncer<'a> {
    pub fn new(
        store: &'a dyn VaultStore,
        config: &'a IndexConfig,
        vault_root: NormalizedPath,
    ) -> Self {
        Self {
            store,
            config,
            vault_root,
        }
    }

    /// Path of the mirrored output tree's top folder.
    pub fn output_root(&self) -> NormalizedPath {
        self.vault_root.join(&self.config.output_root_name)
    }

    /// Synchronize the subtree rooted at `start`.
    pub fn sync(&self, start: &NormalizedPath) -> Result<SyncReport> {
        self.sync_with_options(start, SyncOptions::default())
    }

    /// Synchronize with options.
    ///
    /// Fails without writing when `start` is not an eligible root or not a
    /// folder. Per-node synthesis failures do not abort the run; they are
    /// recorded in the report and the failed node's subtree is left alone
    /// (its output folder may not exist).
    pub fn sync_with_options(
        &self,
        start: &NormalizedPath,
        options: SyncOptions,
    ) -> Result<SyncReport> {
        self.check_start(start)?;
        let tree = scanner::scan(self.store, start, &self.config.skip_rules)?;
        debug!(start = %start, folders = tree.folder_count(), "scanned subtree");

        let mut report = SyncReport::success();

        let output_root = self.output_root();
        if !self.store.folder_exists(&output_root) {
            if options.dry_run {
                report = report
                    .with_action(format!("[dry-run] Would create output folder {output_root}"));
            } else {
                self.store.create_folder(&output_root)?;
                report = report.with_action(format!("Created output folder {output_root}"));
            }
        }

        let templates = self.config.section_templates();
        let synthesizer = DocumentSynthesizer::new(self.store, &templates);
        self.sync_node(
            &synthesizer,
            &tree,
            output_root.join(&tree.name),
            options,
            &mut report,
        );

        report.success = report.errors.is_empty();
        Ok(report)
    }

    fn sync_node(
        &self,
        synthesizer: &DocumentSynthesizer<'_>,
        node: &FolderNode,
        mirrored: NormalizedPath,
        options: SyncOptions,
        report: &mut SyncReport,
    ) {
        match synthesizer.synthesize(node, &mirrored, options.dry_run) {
            Ok(outcome) => report.actions.push(describe(&outcome, options.dry_run)),
            Err(e) => {
                warn!(folder = %mirrored, error = %e, "failed to synthesize index document");
                report
                    .errors
                    .push(format!("Failed to index {mirrored}: {e}"));
                return;
            }
        }

        for subfolder in &node.subfolders {
            self.sync_node(
                synthesizer,
                subfolder,
                mirrored.join(&subfolder.name),
                options,
                report,
            );
        }
    }

    /// Check the subtree rooted at `start` without writing.
    pub fn check(&self, start: &NormalizedPath) -> Result<CheckReport> {
        self.check_start(start)?;
        let tree = scanner::scan(self.store, start, &self.config.skip_rules)?;

        let templates = self.config.section_templates();
        let synthesizer = DocumentSynthesizer::new(self.store, &templates);

        let mut missing = Vec::new();
        let mut stale = Vec::new();
        self.check_node(
            &synthesizer,
            &tree,
            self.output_root().join(&tree.name),
            &mut missing,
            &mut stale,
        )?;

        Ok(CheckReport::from_items(missing, stale))
    }

    fn check_node(
        &self,
        synthesizer: &DocumentSynthesizer<'_>,
        node: &FolderNode,
        mirrored: NormalizedPath,
        missing: &mut Vec<CheckItem>,
        stale: &mut Vec<CheckItem>,
    ) -> Result<()> {
        let path = DocumentSynthesizer::document_path(node, &mirrored);
        if !self.store.document_exists(&path) {
            missing.push(CheckItem {
                document: path.as_str().to_string(),
                description: "Index document not found".to_string(),
            });
        } else {
            let current = self.store.read_document(&path)?;
            if synthesizer.render(node, &current)? != current {
                stale.push(CheckItem {
                    document: path.as_str().to_string(),
                    description: "Index document does not match the folder tree".to_string(),
                });
            }
        }

        for subfolder in &node.subfolders {
            self.check_node(
                synthesizer,
                subfolder,
                mirrored.join(&subfolder.name),
                missing,
                stale,
            )?;
        }
        Ok(())
    }

    fn check_start(&self, start: &NormalizedPath) -> Result<()> {
        policy::check_eligible_root(
            start,
            &self.vault_root,
            &self.config.skip_rules,
            &self.config.output_root_name,
        )
    }
}

fn describe(outcome: &SynthesisOutcome, dry_run: bool) -> String {
    match (outcome.action, dry_run) {
        (SynthesisAction::Created, false) => format!("Created {}", outcome.path),
        (SynthesisAction::Created, true) => format!("[dry-run] Would create {}", outcome.path),
        (SynthesisAction::Updated, false) => format!("Updated {}", outcome.path),
        (SynthesisAction::Updated, true) => format!("[dry-run] Would update {}", outcome.path),
        (SynthesisAction::UpToDate, _) => format!("Up to date: {}", outcome.path),
    }
}
