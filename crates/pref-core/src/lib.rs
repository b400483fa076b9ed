//! Preference sessions for symbol-driven build configuration
//!
//! This crate ties a [`pref_tree::PreferenceTree`] to the collaborators in
//! `pref-store`, implementing:
//!
//! - **Session**: load-once, edit, save protocol with a dirty flag
//! - **Sync**: raw values to the store, effective values to the active
//!   symbol list
//! - **Panel**: serializable snapshot for editors and the CLI
//! - **Settings**: layered resolution of where the definition and state live
//!
//! # Architecture
//!
//! ```text
//!          CLI / editor panel
//!                  |
//!              pref-core
//!                  |
//!         +--------+--------+
//!         |                 |
//!     pref-tree        pref-store
//! ```
//!
//! # Example
//!
//! ```
//! use pref_core::PreferenceSession;
//! use pref_store::{MemoryStore, MemorySymbols};
//! use pref_tree::{PreferenceNode, PreferenceTree};
//!
//! let tree = PreferenceTree::new()
//!     .with(PreferenceNode::builder("Debug", "DEBUG"))
//!     .unwrap();
//! let mut session = PreferenceSession::new(tree, MemoryStore::new(), MemorySymbols::new("LEGACY"));
//!
//! session.set("DEBUG", true).unwrap();
//! let report = session.save().unwrap();
//! assert_eq!(report.symbols, "LEGACY;DEBUG");
//! ```

pub mod error;
pub mod panel;
pub mod session;
pub mod settings;
pub mod sync;

pub use error::{Error, Result};
pub use panel::{NodeView, PanelView};
pub use session::PreferenceSession;
pub use settings::{FileSession, Settings, SettingsFile, SettingsResolver};
pub use sync::SaveReport;
