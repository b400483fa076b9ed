//! Preference session: one tree bound to its persisted store and symbol target
//!
//! The session owns the load/save protocol:
//!
//! - **load** pulls raw values from the store, once, before the first read
//! - **edits** change raw values and mark the session dirty
//! - **save** pushes raw values back and reconciles the active symbol list
//!   from effective values

use pref_store::{PreferenceStore, SymbolTarget};
use pref_tree::{PreferenceNode, PreferenceTree};

use crate::panel::PanelView;
use crate::sync::{self, SaveReport};
use crate::{Error, Result};

/// A preference tree together with the collaborators it syncs against
///
/// The tree is passed in rather than looked up globally, so every session is
/// isolated and tests can build their own.
#[derive(Debug)]
pub struct PreferenceSession<S, T> {
    tree: PreferenceTree,
    store: S,
    symbols: T,
    loaded: bool,
    dirty: bool,
}

impl<S, T> PreferenceSession<S, T>
where
    S: PreferenceStore,
    T: SymbolTarget,
{
    /// Create a session. Nothing is read until the first access.
    pub fn new(tree: PreferenceTree, store: S, symbols: T) -> Self {
        Self {
            tree,
            store,
            symbols,
            loaded: false,
            dirty: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Pull every raw value from the store, replacing in-memory edits.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(&mut self) -> Result<()> {
        let count = sync::pull_values(&self.tree, &self.store)?;
        self.loaded = true;
        self.dirty = false;
        tracing::debug!(count, "Loaded preference values");
        Ok(())
    }

    /// Load unless a load already happened since the last [`invalidate`](Self::invalidate).
    pub fn ensure_loaded(&mut self) -> Result<()> {
        if !self.loaded {
            self.load()?;
        }
        Ok(())
    }

    /// Force the next access to reload from the store.
    pub fn invalidate(&mut self) {
        self.loaded = false;
    }

    /// The loaded tree.
    pub fn tree(&mut self) -> Result<&PreferenceTree> {
        self.ensure_loaded()?;
        Ok(&self.tree)
    }

    /// Effective value of the node at `symbol`.
    pub fn value(&mut self, symbol: &str) -> Result<bool> {
        Ok(self.node(symbol)?.value())
    }

    /// Raw value of the node at `symbol`.
    pub fn raw_value(&mut self, symbol: &str) -> Result<bool> {
        Ok(self.node(symbol)?.raw_value())
    }

    /// Set the raw value at `symbol`. Returns whether the value changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if no node has that symbol.
    pub fn set(&mut self, symbol: &str, value: bool) -> Result<bool> {
        let node = self.node(symbol)?;
        if node.raw_value() == value {
            return Ok(false);
        }
        node.set_value(value);
        self.dirty = true;
        tracing::debug!(symbol, value, "Preference changed");
        Ok(true)
    }

    /// Flip the raw value at `symbol` and return the new raw value.
    pub fn toggle(&mut self, symbol: &str) -> Result<bool> {
        let value = !self.raw_value(symbol)?;
        self.set(symbol, value)?;
        Ok(value)
    }

    /// Restore every raw value to its default.
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.ensure_loaded()?;
        for node in self.tree.traverse() {
            if node.raw_value() != node.default_value() {
                node.reset();
                self.dirty = true;
            }
        }
        Ok(())
    }

    /// Unsaved edits exist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record an edit made directly on a node obtained from [`tree`](Self::tree).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag without saving.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Persist raw values and reconcile the active symbol list.
    ///
    /// Saving twice without edits in between leaves both the store and the
    /// symbol list unchanged the second time.
    ///
    /// # Errors
    ///
    /// Any store or symbol-target failure is returned as is; nothing is retried.
    pub fn save(&mut self) -> Result<SaveReport> {
        self.ensure_loaded()?;

        let written = sync::push_values(&self.tree, &mut self.store)?;
        let (added, removed, symbols) = sync::sync_symbols(&self.tree, &mut self.symbols)?;
        self.dirty = false;

        tracing::info!(
            written,
            added = added.len(),
            removed = removed.len(),
            "Saved preferences"
        );
        Ok(SaveReport {
            written,
            added,
            removed,
            symbols,
        })
    }

    /// Snapshot for a settings panel.
    pub fn panel(&mut self) -> Result<PanelView> {
        self.ensure_loaded()?;
        Ok(PanelView::from_tree(&self.tree, self.dirty))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn symbols(&self) -> &T {
        &self.symbols
    }

    /// Take the session apart.
    pub fn into_parts(self) -> (PreferenceTree, S, T) {
        (self.tree, self.store, self.symbols)
    }

    fn node(&mut self, symbol: &str) -> Result<&PreferenceNode> {
        self.ensure_loaded()?;
        self.tree.find(symbol).ok_or_else(|| Error::UnknownSymbol {
            symbol: symbol.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pref_store::{MemoryStore, MemorySymbols};
    use pref_test_utils::sample_tree;

    fn session() -> PreferenceSession<MemoryStore, MemorySymbols> {
        PreferenceSession::new(sample_tree(), MemoryStore::new(), MemorySymbols::default())
    }

    #[test]
    fn test_first_read_loads() {
        let store: MemoryStore = [("A", false)].into_iter().collect();
        let mut session = PreferenceSession::new(sample_tree(), store, MemorySymbols::default());

        assert!(!session.is_loaded());
        assert!(!session.value("A").unwrap());
        assert!(session.is_loaded());
    }

    #[test]
    fn test_load_happens_once_until_invalidated() {
        let mut session = session();
        session.set("A", false).unwrap();

        // a second read must not reload and discard the edit
        assert!(!session.raw_value("A").unwrap());

        session.invalidate();
        assert!(session.raw_value("A").unwrap(), "reload restores the default");
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_dirty_tracks_real_changes() {
        let mut session = session();
        assert!(!session.set("A", true).unwrap(), "A already defaults to on");
        assert!(!session.is_dirty());

        assert!(session.set("A_C", true).unwrap());
        assert!(session.is_dirty());

        session.mark_saved();
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_unknown_symbol() {
        let mut session = session();
        let err = session.set("A_Z", true).unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { symbol } if symbol == "A_Z"));
    }

    #[test]
    fn test_toggle() {
        let mut session = session();
        assert!(session.toggle("A_B").unwrap());
        assert!(!session.toggle("A_B").unwrap());
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut session = session();
        session.set("A", false).unwrap();
        session.set("A_C", true).unwrap();
        session.mark_saved();

        session.reset_to_defaults().unwrap();

        assert!(session.raw_value("A").unwrap());
        assert!(!session.raw_value("A_C").unwrap());
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_clears_dirty() {
        let mut session = session();
        session.set("A_B", true).unwrap();
        let report = session.save().unwrap();

        assert!(!session.is_dirty());
        assert_eq!(report.written, 4);
        assert_eq!(report.symbols, "A;A_B;A_B_D");
    }
}
