//! Hierarchical boolean preference tree
//!
//! A preference tree is a small forest of named toggles. Every node is
//! addressed by its *symbol*, the `_`-joined path of segments from its root
//! (`ROLE_ARTIST_TOOL2`), and its effective value is inherited: a node is only
//! on when it and every ancestor are on.
//!
//! - [`PreferenceNode`]: one toggle with its children and a weak parent link
//! - [`PreferenceTree`]: ordered, segment-unique siblings with indexed and
//!   keyed access
//! - [`Traverse`]: independent pre-order cursor over a node or a forest
//! - [`TreeDefinition`]: serde/TOML description of a tree's static shape
//!
//! # Example
//!
//! ```
//! use pref_tree::{PreferenceNode, PreferenceTree};
//!
//! let tools = PreferenceTree::new()
//!     .with(PreferenceNode::builder("Tool 1", "TOOL1").default_value(true))
//!     .unwrap();
//! let tree = PreferenceTree::new()
//!     .with(PreferenceNode::builder("Artist", "ARTIST").children(tools))
//!     .unwrap();
//!
//! let tool = tree.find("ARTIST_TOOL1").unwrap();
//! assert!(tool.raw_value());
//! assert!(!tool.value()); // shadowed: ARTIST is off
//!
//! tree.update("ARTIST", true);
//! assert!(tool.value());
//! ```

pub mod definition;
pub mod error;
pub mod node;
pub mod symbol;
pub mod traverse;
pub mod tree;

pub use definition::{PreferenceDefinition, TreeDefinition};
pub use error::{Error, Result};
pub use node::{NodeBuilder, PreferenceNode};
pub use symbol::{DELIMITER, SEPARATOR, validate_segment};
pub use traverse::Traverse;
pub use tree::{Iter, PreferenceTree};
