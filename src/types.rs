//! Core type definitions for DAG entries, edges and builder instructions.

/// A stored node together with its height.
///
/// Height is 0 for a node without parents, otherwise one more than the highest parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo<T> {
    pub(crate) node: T,
    pub(crate) height: usize,
}

impl<T> NodeInfo<T> {
    pub(crate) fn new(node: T, height: usize) -> Self {
        Self { node, height }
    }

    /// The caller's payload.
    pub fn node(&self) -> &T {
        &self.node
    }

    /// Longest path length from any root to this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Consume the entry, returning the payload.
    pub fn into_node(self) -> T {
        self.node
    }
}

/// A directed edge: `from` is a parent of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub(crate) from: String,
    pub(crate) to: String,
}

impl Edge {
    pub(crate) fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Id of the parent node.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Id of the child node.
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A pending request to insert `node`, wired to each of `parent_ids`, once they all exist.
///
/// Created by [`crate::Builder::add_node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddition<T> {
    pub(crate) node: T,
    pub(crate) parent_ids: Vec<String>,
}

impl<T> NodeAddition<T> {
    pub(crate) fn new(node: T, parent_ids: &[&str]) -> Self {
        Self::with_parents(node, parent_ids.iter().map(|id| id.to_string()).collect())
    }

    pub(crate) fn with_parents(node: T, parent_ids: Vec<String>) -> Self {
        Self { node, parent_ids }
    }

    /// The node to insert.
    pub fn node(&self) -> &T {
        &self.node
    }

    /// Ids of the node's parents, in the order they were given.
    pub fn parent_ids(&self) -> &[String] {
        &self.parent_ids
    }
}
