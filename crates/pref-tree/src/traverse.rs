//! Pre-order traversal
//!
//! The cursor lives in the iterator, not in the nodes, so any number of walks
//! over the same tree can be in flight at once.

use std::iter::FusedIterator;

use crate::node::PreferenceNode;

/// Pre-order iterator: a node, then each child's subtree in insertion order
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
    /// Pending nodes, next one on top
    stack: Vec<&'a PreferenceNode>,
}

impl<'a> Traverse<'a> {
    pub(crate) fn from_node(node: &'a PreferenceNode) -> Self {
        Self { stack: vec![node] }
    }

    pub(crate) fn from_roots<I>(roots: I) -> Self
    where
        I: DoubleEndedIterator<Item = &'a PreferenceNode>,
    {
        Self {
            stack: roots.rev().collect(),
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = &'a PreferenceNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl FusedIterator for Traverse<'_> {}
