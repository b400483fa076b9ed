//! A single named boolean preference
//!
//! Nodes own their children and hold a non-owning link back to their parent.
//! The full symbol and the effective value are both derived from the ancestor
//! chain on every call, so neither can drift from the tree structure.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::symbol::{self, validate_segment};
use crate::traverse::Traverse;
use crate::tree::PreferenceTree;
use crate::Result;

/// One toggle in the preference tree
#[derive(Debug)]
pub struct PreferenceNode {
    /// Display label, not used for addressing
    name: String,
    /// Optional help text, empty when absent
    description: String,
    /// Identifier contributed to the symbol path, unique among siblings
    segment: String,
    /// Value restored when nothing is persisted for this node
    default: bool,
    /// The node's own setting, independent of its ancestors
    raw: Cell<bool>,
    /// Written when the node is attached as a child
    parent: RefCell<Weak<PreferenceNode>>,
    children: PreferenceTree,
}

/// Builder for [`PreferenceNode`]
///
/// ```
/// use pref_tree::{PreferenceNode, PreferenceTree};
///
/// let mut tools = PreferenceTree::new();
/// tools.add(PreferenceNode::builder("Tool 1", "TOOL1").default_value(true)).unwrap();
///
/// let artist = PreferenceNode::builder("Artist", "ARTIST")
///     .description("Art pipeline helpers")
///     .children(tools)
///     .build()
///     .unwrap();
///
/// assert_eq!(artist.children().by_index(0).unwrap().symbol(), "ARTIST_TOOL1");
/// ```
#[derive(Debug)]
pub struct NodeBuilder {
    name: String,
    segment: String,
    default: bool,
    description: String,
    children: PreferenceTree,
}

impl NodeBuilder {
    /// Set the default value, which is also the initial raw value.
    pub fn default_value(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a child collection built ahead of time.
    pub fn children(mut self, children: PreferenceTree) -> Self {
        self.children = children;
        self
    }

    /// The segment the node will be registered under.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Validate the segment and create the node, re-parenting every child.
    pub fn build(self) -> Result<Rc<PreferenceNode>> {
        validate_segment(&self.segment)?;
        Ok(Rc::new_cyclic(|this| {
            for child in self.children.iter() {
                child.set_parent(this.clone());
            }
            PreferenceNode {
                name: self.name,
                description: self.description,
                segment: self.segment,
                default: self.default,
                raw: Cell::new(self.default),
                parent: RefCell::new(Weak::new()),
                children: self.children,
            }
        }))
    }
}

impl PreferenceNode {
    /// Start building a node with `default = false`, no description and no children.
    pub fn builder(name: impl Into<String>, segment: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            name: name.into(),
            segment: segment.into(),
            default: false,
            description: String::new(),
            children: PreferenceTree::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn default_value(&self) -> bool {
        self.default
    }

    pub fn children(&self) -> &PreferenceTree {
        &self.children
    }

    /// The parent node, if this node has been attached as a child.
    pub fn parent(&self) -> Option<Rc<PreferenceNode>> {
        self.parent.borrow().upgrade()
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Number of ancestors; roots are at depth 0.
    pub fn depth(&self) -> usize {
        self.parent().map_or(0, |parent| parent.depth() + 1)
    }

    /// Full symbol path from the root down to this node.
    pub fn symbol(&self) -> String {
        match self.parent() {
            Some(parent) => symbol::join(&parent.symbol(), &self.segment),
            None => self.segment.clone(),
        }
    }

    /// The locally set value, ignoring ancestors. This is what gets persisted.
    pub fn raw_value(&self) -> bool {
        self.raw.get()
    }

    /// Effective value: the raw value AND the effective value of the parent.
    ///
    /// A node never reports itself enabled while any ancestor is disabled.
    pub fn value(&self) -> bool {
        self.raw.get() && self.parent().is_none_or(|parent| parent.value())
    }

    /// Set the raw value. Ancestors and descendants are left untouched, so a
    /// node under a disabled ancestor stays shadowed until the ancestor is on.
    pub fn set_value(&self, value: bool) {
        self.raw.set(value);
    }

    /// Restore the raw value to the default.
    pub fn reset(&self) {
        self.raw.set(self.default);
    }

    /// Raw value is on but a disabled ancestor hides it.
    pub fn is_shadowed(&self) -> bool {
        self.raw.get() && !self.value()
    }

    /// Find a node by a symbol path relative to this node.
    ///
    /// The first segment of `path` must be this node's segment; each
    /// following segment selects a child. Unmatched or malformed paths yield
    /// `None`.
    pub fn find(&self, path: &str) -> Option<&PreferenceNode> {
        let mut segments = symbol::segments(path);
        if segments.next()? != self.segment {
            return None;
        }
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Set the raw value of the node at `path`, relative to this node.
    ///
    /// Returns `false` and changes nothing when the path does not match.
    pub fn update(&self, path: &str, value: bool) -> bool {
        match self.find(path) {
            Some(node) => {
                node.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Pre-order walk over this node and all of its descendants.
    ///
    /// Every call returns a fresh cursor.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::from_node(self)
    }

    fn set_parent(&self, parent: Weak<PreferenceNode>) {
        *self.parent.borrow_mut() = parent;
    }
}
