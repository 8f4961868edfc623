//! The immutable DAG value.
//!
//! A [`Dag`] is only ever grown by [`crate::Builder::build`]. Once handed to the caller it is
//! never modified; extending it means seeding a new builder with it.

use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::builder::Builder;
use crate::node::Node;
use crate::types::{Edge, NodeInfo};

/// An immutable directed acyclic graph of `T` payloads.
///
/// Holds one [`NodeInfo`] per id and one [`Edge`] per parent to child relationship, in the order
/// they were recorded. The following always hold for a `Dag` produced by this crate:
///
/// 1. No two entries share an id.
/// 2. Every edge's endpoints are entries of the graph.
/// 3. For every edge `p -> c`, `height(c) > height(p)`.
/// 4. There are no cycles.
///
/// # Examples
///
/// ```
/// use idag::{Builder, Dag};
///
/// let empty: Dag<String> = Dag::empty();
/// assert_eq!(empty.size(), 0);
/// assert!(empty.edges().is_empty());
///
/// let dag = Builder::new()
///     .add_node("12", &[])
///     .add_node("10", &["12"])
///     .build()
///     .unwrap();
///
/// assert_eq!(dag.edges().len(), 1);
/// assert_eq!(dag.edges()[0].from(), "12");
/// assert_eq!(dag.edges()[0].to(), "10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag<T> {
    pub(crate) nodes: Vec<NodeInfo<T>>,
    pub(crate) index: HashMap<String, usize>, // id -> position in `nodes`
    pub(crate) edges: Vec<Edge>,
}

impl<T> Default for Dag<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Dag<T> {
    /// Create a DAG with no nodes and no edges.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Same as [`Dag::empty`].
    pub fn new() -> Self {
        Self::empty()
    }

    /// All entries, in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeInfo<T>> + '_ {
        self.nodes.iter()
    }

    /// All edges, in the order they were recorded.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Start a new [`Builder`] seeded with this DAG.
    pub fn into_builder(self) -> Builder<T> {
        Builder::from_dag(self)
    }

    pub(crate) fn info(&self, id: &str) -> Option<&NodeInfo<T>> {
        self.index.get(id).map(|&pos| &self.nodes[pos])
    }
}

impl<T: Node> Dag<T> {
    /// Record `node` at `height` with one edge from each parent id.
    ///
    /// Callers must have checked that the id is new and every parent id resolves; this only
    /// runs on the private working copy owned by the resolution algorithm.
    pub(crate) fn insert(&mut self, node: T, height: usize, parent_ids: Vec<String>) {
        let id = node.id().to_string();

        #[cfg(feature = "tracing")]
        debug!(
            node_id = %id,
            height,
            parent_count = parent_ids.len(),
            "inserting node"
        );

        debug_assert!(!self.index.contains_key(&id));

        self.edges.extend(
            parent_ids
                .into_iter()
                .map(|parent_id| Edge::new(parent_id, id.as_str())),
        );
        self.index.insert(id, self.nodes.len());
        self.nodes.push(NodeInfo::new(node, height));
    }
}
