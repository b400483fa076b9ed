//! Persistence collaborators for preference trees
//!
//! Two external resources surround a preference tree:
//!
//! - a [`PreferenceStore`] that remembers each node's raw value, keyed by symbol
//! - a [`SymbolTarget`] holding the `;`-joined list of active build symbols
//!
//! Both come with in-memory backends for tests and TOML file backends that
//! write atomically under an advisory lock.

pub mod error;
pub mod io;
pub mod store;
pub mod symbols;

pub use error::{Error, Result};
pub use store::{MemoryStore, PreferenceStore, TomlPreferenceStore};
pub use symbols::{ActiveSymbols, DefineSymbolsFile, MemorySymbols, SymbolTarget};
