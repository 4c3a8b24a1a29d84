//! Error types for vault-core

use vault_fs::NormalizedPath;

use crate::policy::RejectReason;

/// Result type for vault-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vault-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The start folder failed the eligibility policy. Non-fatal for the
    /// caller: the run does not start and nothing is written.
    #[error("Folder \"{name}\" cannot be indexed: {reason}")]
    IneligibleRoot { name: String, reason: RejectReason },

    /// A path expected to be a folder is not one. Caller error, fails fast.
    #[error("Not a folder: {path}")]
    NotADirectory { path: NormalizedPath },

    /// A configured heading could not be turned into a search pattern.
    #[error("Template {template:?} cannot be used as a search pattern: {message}")]
    MalformedTemplate { template: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from vault-fs
    #[error(transparent)]
    Fs(#[from] vault_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
