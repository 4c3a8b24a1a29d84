//! Index configuration
//!
//! Configuration is read from a TOML file in the vault root (or supplied by
//! the caller) and passed explicitly into the engine; there is no
//! process-wide settings state.

use serde::{Deserialize, Serialize};
use vault_fs::NormalizedPath;

use crate::Result;
use crate::synthesis::SectionTemplates;

/// Default name of the configuration file looked up in the vault root.
pub const CONFIG_FILE_NAME: &str = ".vault-index.toml";

fn default_summary_heading() -> String {
    "# Summary".to_string()
}

fn default_subfolder_section_heading() -> String {
    "## Folders".to_string()
}

fn default_document_section_heading() -> String {
    "## Notes".to_string()
}

fn default_skip_rules() -> Vec<String> {
    vec!["attachments".to_string(), "untitled".to_string()]
}

fn default_output_root_name() -> String {
    "_index".to_string()
}

/// Configuration for an indexing run.
///
/// The three headings serve double duty: they are rendered into every
/// generated document, and the summary/subfolder pair is reverse-matched to
/// find previously written free text that must be carried forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IndexConfig {
    /// Heading that opens the preserved summary region
    #[serde(default = "default_summary_heading")]
    pub summary_heading: String,

    /// Heading for the subfolder cross-reference list
    #[serde(default = "default_subfolder_section_heading")]
    pub subfolder_section_heading: String,

    /// Heading for the document cross-reference list
    #[serde(default = "default_document_section_heading")]
    pub document_section_heading: String,

    /// Substrings excluding folders and documents from traversal.
    /// Containment match, case-sensitive, no globbing.
    #[serde(default = "default_skip_rules")]
    pub skip_rules: Vec<String>,

    /// Name of the mirrored output tree's top folder
    #[serde(default = "default_output_root_name")]
    pub output_root_name: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            summary_heading: default_summary_heading(),
            subfolder_section_heading: default_subfolder_section_heading(),
            document_section_heading: default_document_section_heading(),
            skip_rules: default_skip_rules(),
            output_root_name: default_output_root_name(),
        }
    }
}

impl IndexConfig {
    /// Parse a configuration from TOML content.
    ///
    /// Missing fields fall back to their defaults, so an empty string parses
    /// to `IndexConfig::default()`.
    pub fn parse(content: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = vault_fs::io::read_text(path)?;
        Self::parse(&content)
    }

    /// The template fragments consumed by the synthesizer.
    pub fn section_templates(&self) -> SectionTemplates {
        SectionTemplates {
            summary_heading: self.summary_heading.clone(),
            subfolder_section_heading: self.subfolder_section_heading.clone(),
            document_section_heading: self.document_section_heading.clone(),
        }
    }
}
