//! Document synthesis
//!
//! Creates or refreshes one generated index document. The document has three
//! regions: a summary region whose free text the user owns, and two
//! cross-reference lists rebuilt from the current tree shape on every run.
//! The whole document is replaced in one write; preservation works by
//! re-reading the old content first.

use regex::Regex;
use tracing::debug;
use vault_fs::NormalizedPath;

use crate::scanner::{DOC_EXTENSION, FolderNode};
use crate::store::VaultStore;
use crate::{Error, Result};

/// The three configurable template fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTemplates {
    pub summary_heading: String,
    pub subfolder_section_heading: String,
    pub document_section_heading: String,
}

/// What `synthesize` did to the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisAction {
    Created,
    Updated,
    /// Existing content already matches; nothing was written
    UpToDate,
}

/// Outcome of synthesizing one folder node.
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    /// Path of the generated document
    pub path: NormalizedPath,
    pub action: SynthesisAction,
}

/// Synthesizes generated documents against a store.
pub struct DocumentSynthesizer<'a> {
    store: &'a dyn VaultStore,
    templates: &'a SectionTemplates,
}

impl<'a> DocumentSynthesizer<'a> {
    pub fn new(store: &'a dyn VaultStore, templates: &'a SectionTemplates) -> Self {
        Self { store, templates }
    }

    /// Path of the document generated for `node` under `mirrored_path`.
    pub fn document_path(node: &FolderNode, mirrored_path: &NormalizedPath) -> NormalizedPath {
        mirrored_path.join(&format!("{}.{DOC_EXTENSION}", node.name))
    }

    /// Render the content `node`'s document should have, carrying the
    /// preservation window forward from `current`.
    pub fn render(&self, node: &FolderNode, current: &str) -> Result<String> {
        let preserved = extract_preserved(current, self.templates)?;
        Ok(compose(node, &preserved, self.templates))
    }

    /// Create or update the generated document for one folder node.
    ///
    /// Ensures the folder at `mirrored_path` exists first; parents are
    /// guaranteed by the synchronizer's pre-order traversal. With `dry_run`
    /// set, the outcome is computed but nothing is written.
    pub fn synthesize(
        &self,
        node: &FolderNode,
        mirrored_path: &NormalizedPath,
        dry_run: bool,
    ) -> Result<SynthesisOutcome> {
        if !self.store.folder_exists(mirrored_path) && !dry_run {
            self.store.create_folder(mirrored_path)?;
        }

        let path = Self::document_path(node, mirrored_path);
        let existing = if self.store.document_exists(&path) {
            Some(self.store.read_document(&path)?)
        } else {
            None
        };

        let content = self.render(node, existing.as_deref().unwrap_or(""))?;

        if existing.as_deref() == Some(content.as_str()) {
            debug!(path = %path, "document up to date");
            return Ok(SynthesisOutcome {
                path,
                action: SynthesisAction::UpToDate,
            });
        }

        let action = if existing.is_none() {
            SynthesisAction::Created
        } else {
            SynthesisAction::Updated
        };

        if !dry_run {
            match action {
                SynthesisAction::Created => self.store.create_document(&path, &content)?,
                _ => self.store.write_document(&path, &content)?,
            }
        }

        debug!(path = %path, ?action, "synthesized document");
        Ok(SynthesisOutcome { path, action })
    }
}

/// Extract the preservation window from existing document content.
///
/// The window is whatever sits between the summary heading and the first
/// following occurrence of the subfolder section heading, trimmed. Both
/// headings are user-configurable free text, so they are escaped before the
/// pattern is built. First match wins; no match means an empty window.
pub fn extract_preserved(content: &str, templates: &SectionTemplates) -> Result<String> {
    let pattern = format!(
        "(?s){}(.*?){}",
        regex::escape(&templates.summary_heading),
        regex::escape(&templates.subfolder_section_heading),
    );
    let window = Regex::new(&pattern).map_err(|e| Error::MalformedTemplate {
        template: templates.summary_heading.clone(),
        message: e.to_string(),
    })?;

    Ok(window
        .captures(content)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default())
}

/// Compose the full document content for a node.
///
/// Layout: summary heading and preserved text, a blank line, the subfolder
/// list, a blank line, the document list. A section with zero entries still
/// emits its heading. Re-running over an unchanged tree reproduces this
/// byte for byte.
pub fn compose(node: &FolderNode, preserved: &str, templates: &SectionTemplates) -> String {
    let mut summary = format!("{}\n", templates.summary_heading);
    summary.push_str(preserved);

    let subfolders = render_section(
        &templates.subfolder_section_heading,
        node.subfolders.iter().map(|sub| sub.name.as_str()),
    );
    let documents = render_section(
        &templates.document_section_heading,
        node.documents.iter().map(String::as_str),
    );

    format!("{summary}\n\n{subfolders}\n\n{documents}")
}

fn render_section<'a>(heading: &str, names: impl Iterator<Item = &'a str>) -> String {
    let mut section = format!("{heading}\n");
    for name in names {
        section.push_str("- [[");
        section.push_str(name);
        section.push_str("]]\n");
    }
    section
}
