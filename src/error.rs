//! Error types for DAG construction.
//!
//! A single instruction fails with a [`NodeError`]. A failed build surfaces every instruction
//! that never resolved, bundled in a [`BuildError`].

/// Why a single node-addition instruction could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NodeError {
    /// At least one parent id did not resolve at the time of the attempt.
    ///
    /// Carries the id of the node being added, not the id of the missing parent.
    MissingParent { node_id: String },

    /// A node with the same id is already in the graph.
    DuplicateNode { node_id: String },
}

impl NodeError {
    /// Id of the node whose instruction failed.
    pub fn node_id(&self) -> &str {
        match self {
            NodeError::MissingParent { node_id } | NodeError::DuplicateNode { node_id } => node_id,
        }
    }
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::MissingParent { node_id } => {
                write!(
                    f,
                    "Missing Parent: Cannot find one or more parents for node '{}'",
                    node_id
                )
            }
            NodeError::DuplicateNode { node_id } => {
                write!(
                    f,
                    "Duplicate Nodes Not Allowed: node '{}' already in graph.",
                    node_id
                )
            }
        }
    }
}

impl std::error::Error for NodeError {}

/// A failed [`crate::Builder::build`].
///
/// Holds one [`NodeError`] per instruction that was still unresolved when resolution gave up,
/// in the order those instructions last failed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    failures: Vec<NodeError>,
}

impl BuildError {
    pub(crate) fn new(failures: Vec<NodeError>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    /// The individual failures.
    pub fn failures(&self) -> &[NodeError] {
        &self.failures
    }

    /// Ids of the nodes that could not be added.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.failures.iter().map(NodeError::node_id)
    }

    /// Consume the error, returning the individual failures.
    pub fn into_failures(self) -> Vec<NodeError> {
        self.failures
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildError {}

/// Result type for DAG construction
pub type DagResult<T> = Result<T, BuildError>;
