//! Ordered, segment-unique collection of sibling preferences

use std::collections::HashMap;
use std::rc::Rc;

use crate::node::{NodeBuilder, PreferenceNode};
use crate::symbol;
use crate::traverse::Traverse;
use crate::{Error, Result};

/// Sibling preferences in insertion order
///
/// Used both for the top level of a preference forest and for the children
/// of a [`PreferenceNode`]. Segments are unique within one collection; adding
/// a segment a second time is ignored.
#[derive(Debug, Default)]
pub struct PreferenceTree {
    nodes: Vec<Rc<PreferenceNode>>,
    /// Segment -> position in `nodes`
    index: HashMap<String, usize>,
}

impl PreferenceTree {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node unless one with the same segment already exists.
    ///
    /// Returns `Ok(false)` when the segment was already present; the existing
    /// node and its subtree are left untouched (first write wins).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if the new node's segment is invalid.
    pub fn add(&mut self, node: NodeBuilder) -> Result<bool> {
        if self.index.contains_key(node.segment()) {
            tracing::debug!(segment = node.segment(), "Ignoring duplicate preference segment");
            return Ok(false);
        }
        let node = node.build()?;
        self.index.insert(node.segment().to_string(), self.nodes.len());
        self.nodes.push(node);
        Ok(true)
    }

    /// Append a plain toggle with `default = false` and no description.
    pub fn add_toggle(&mut self, name: impl Into<String>, segment: impl Into<String>) -> Result<bool> {
        self.add(PreferenceNode::builder(name, segment))
    }

    /// Chaining form of [`add`](Self::add) for declaring nested trees inline.
    pub fn with(mut self, node: NodeBuilder) -> Result<Self> {
        self.add(node)?;
        Ok(self)
    }

    /// Number of direct members, not counting descendants
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.index.contains_key(segment)
    }

    /// Node with the given segment, if present.
    pub fn get(&self, segment: &str) -> Option<&PreferenceNode> {
        self.index.get(segment).map(|&i| self.nodes[i].as_ref())
    }

    /// Node at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn by_index(&self, index: usize) -> Result<&PreferenceNode> {
        self.nodes
            .get(index)
            .map(Rc::as_ref)
            .ok_or(Error::OutOfRange {
                index,
                len: self.nodes.len(),
            })
    }

    /// Node with the given segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no member has that segment.
    pub fn by_segment(&self, segment: &str) -> Result<&PreferenceNode> {
        self.get(segment).ok_or_else(|| Error::NotFound {
            segment: segment.to_string(),
        })
    }

    /// Direct members in insertion order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    /// Pre-order walk over every member and its descendants.
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse::from_roots(self.iter())
    }

    /// Find a node by symbol path; the first segment selects the member.
    pub fn find(&self, path: &str) -> Option<&PreferenceNode> {
        let first = symbol::segments(path).next()?;
        self.get(first)?.find(path)
    }

    /// Set the raw value of the node at `path`. Returns `false` on a miss.
    pub fn update(&self, path: &str, value: bool) -> bool {
        match self.find(path) {
            Some(node) => {
                node.set_value(value);
                true
            }
            None => false,
        }
    }
}

/// Iterator over the direct members of a [`PreferenceTree`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Rc<PreferenceNode>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PreferenceNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Rc::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Rc::as_ref)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PreferenceTree {
    type Item = &'a PreferenceNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
