//! Reconciliation of tree values with external state
//!
//! Raw values go to the persisted store; effective values decide which
//! symbols appear in the active symbol list.

use pref_store::{ActiveSymbols, PreferenceStore, SymbolTarget};
use pref_tree::PreferenceTree;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Report from a save operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    /// Number of raw values written to the store
    pub written: usize,
    /// Symbols appended to the active list
    pub added: Vec<String>,
    /// Symbols removed from the active list
    pub removed: Vec<String>,
    /// The active symbol string after the save
    pub symbols: String,
}

impl SaveReport {
    /// Whether the active symbol list changed
    pub fn symbols_changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Assign every node's raw value from `store`, falling back to its default.
///
/// Returns the number of nodes loaded.
pub fn pull_values<S>(tree: &PreferenceTree, store: &S) -> Result<usize>
where
    S: PreferenceStore + ?Sized,
{
    let mut count = 0;
    for node in tree.traverse() {
        let value = store.get_bool(&node.symbol(), node.default_value())?;
        node.set_value(value);
        count += 1;
    }
    Ok(count)
}

/// Write every node's raw value to `store` and flush it.
///
/// Returns the number of values written.
pub fn push_values<S>(tree: &PreferenceTree, store: &mut S) -> Result<usize>
where
    S: PreferenceStore + ?Sized,
{
    let mut count = 0;
    for node in tree.traverse() {
        store.set_bool(&node.symbol(), node.raw_value())?;
        count += 1;
    }
    store.flush()?;
    Ok(count)
}

/// Bring `active` in line with the tree's effective values.
///
/// Enabled nodes are appended if missing; disabled nodes are removed.
/// Symbols that belong to no node are left where they are. Returns the
/// `(added, removed)` symbols.
pub fn reconcile(tree: &PreferenceTree, active: &mut ActiveSymbols) -> (Vec<String>, Vec<String>) {
    let mut added = Vec::new();
    let mut removed = Vec::new();
    for node in tree.traverse() {
        let symbol = node.symbol();
        if node.value() {
            if active.insert(&symbol) {
                added.push(symbol);
            }
        } else if active.remove(&symbol) {
            removed.push(symbol);
        }
    }
    (added, removed)
}

/// Reconcile the list held by `target` and write it back when it changed.
pub fn sync_symbols<T>(tree: &PreferenceTree, target: &mut T) -> Result<(Vec<String>, Vec<String>, String)>
where
    T: SymbolTarget + ?Sized,
{
    let before = target.read()?;
    let mut active = ActiveSymbols::parse(&before);
    let (added, removed) = reconcile(tree, &mut active);
    let after = active.to_string();
    if after != before {
        target.write(&after)?;
    }
    Ok((added, removed, after))
}
