//! Vault Indexer CLI
//!
//! The command-line adapter around the vault-core engine: loads
//! configuration, invokes sync or check against the filesystem store, and
//! renders reports and rejection notices for the user.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Sync {
            folder,
            vault,
            config,
            dry_run,
        }) => commands::run_sync(&folder, vault.as_deref(), config.as_deref(), dry_run),
        Some(Commands::Check {
            folder,
            vault,
            config,
        }) => commands::run_check(&folder, vault.as_deref(), config.as_deref()),
        None => {
            println!("{} Vault Indexer CLI", "vault-index".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "vault-index --help".cyan()
            );
            Ok(())
        }
    }
}
