//! Panel contract for preference editors
//!
//! A [`PanelView`] is a plain, serializable snapshot of the tree that a UI
//! (or the CLI) can render without touching the live nodes.

use std::fmt::Write;

use pref_tree::{PreferenceNode, PreferenceTree};
use serde::{Deserialize, Serialize};

/// One renderable preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub name: String,
    pub description: String,
    pub symbol: String,
    /// Effective value
    pub value: bool,
    /// The node's own toggle state
    pub raw: bool,
    pub children: Vec<NodeView>,
}

impl NodeView {
    pub fn from_node(node: &PreferenceNode) -> Self {
        Self {
            name: node.name().to_string(),
            description: node.description().to_string(),
            symbol: node.symbol(),
            value: node.value(),
            raw: node.raw_value(),
            children: node.children().iter().map(NodeView::from_node).collect(),
        }
    }

    /// `"Name - Description"`, or just the name without a description
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }

    /// Raw value is on but an ancestor is off
    pub fn is_shadowed(&self) -> bool {
        self.raw && !self.value
    }

    fn mark(&self) -> &'static str {
        match (self.raw, self.value) {
            (true, true) => "[x]",
            (true, false) => "[-]",
            _ => "[ ]",
        }
    }
}

/// Snapshot of a whole preference forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelView {
    /// Unsaved edits exist
    pub dirty: bool,
    pub nodes: Vec<NodeView>,
}

impl PanelView {
    pub fn from_tree(tree: &PreferenceTree, dirty: bool) -> Self {
        Self {
            dirty,
            nodes: tree.iter().map(NodeView::from_node).collect(),
        }
    }

    /// Render as an indented checklist.
    ///
    /// Children of a node whose toggle is off are hidden unless `expand_all`
    /// is set; shadowed nodes are then marked `[-]`.
    pub fn render_text(&self, expand_all: bool) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            render_node(&mut out, node, 0, expand_all);
        }
        out
    }
}

fn render_node(out: &mut String, node: &NodeView, depth: usize, expand_all: bool) {
    let _ = writeln!(
        out,
        "{:indent$}{} {}",
        "",
        node.mark(),
        node.label(),
        indent = depth * 2
    );
    if node.raw || expand_all {
        for child in &node.children {
            render_node(out, child, depth + 1, expand_all);
        }
    }
}
