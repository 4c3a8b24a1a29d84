//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vault Indexer - Maintain per-folder index documents for a note vault
#[derive(Parser, Debug)]
#[command(name = "vault-index")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate or refresh the index documents for a top-level folder
    ///
    /// Examples:
    ///   vault-index sync math                  # Index <vault>/math
    ///   vault-index sync math --dry-run        # Show what would change
    ///   vault-index sync math --vault ~/notes  # Vault other than the cwd
    Sync {
        /// Top-level vault folder to index
        folder: String,

        /// Vault root (defaults to the current directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Configuration file (defaults to .vault-index.toml in the vault)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Compute changes without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Report which index documents are missing or stale, without writing
    Check {
        /// Top-level vault folder to check
        folder: String,

        /// Vault root (defaults to the current directory)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Configuration file (defaults to .vault-index.toml in the vault)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
