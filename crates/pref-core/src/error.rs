//! Error types for pref-core

use std::path::PathBuf;

/// Result type for pref-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pref-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No node in the tree has this symbol
    #[error("Unknown preference symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    /// Tree definition file missing
    #[error("Preference definition not found at {path}")]
    DefinitionNotFound { path: PathBuf },

    /// Settings file present but malformed
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Tree construction or addressing error from pref-tree
    #[error(transparent)]
    Tree(#[from] pref_tree::Error),

    /// Persistence error from pref-store
    #[error(transparent)]
    Store(#[from] pref_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
