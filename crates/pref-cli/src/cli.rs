//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Symbol Preferences - Toggle build symbols from a preference tree
#[derive(Parser, Debug)]
#[command(name = "prefs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory containing .prefs/)
    #[arg(long, global = true, env = "PREFS_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create .prefs/ with a settings file and the built-in role tree
    ///
    /// Examples:
    ///   prefs init            # Keep existing files
    ///   prefs init --force    # Overwrite config.toml and tree.toml
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Show the preference tree
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Also expand children of disabled preferences
        #[arg(short, long)]
        all: bool,
    },

    /// Show one preference's effective and raw value
    Get {
        /// Full symbol, e.g. ROLE_ARTIST_TOOL2
        symbol: String,
    },

    /// Turn preferences on and save
    ///
    /// Examples:
    ///   prefs enable ROLE ROLE_ARTIST
    Enable {
        /// Full symbols
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Turn preferences off and save
    Disable {
        /// Full symbols
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Restore every preference to its default and save
    Reset,

    /// Write values and reconcile the active symbol list
    Save,

    /// Print the active symbol list of the configured target group
    Symbols {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
