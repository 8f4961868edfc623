//! # Acyclicity by Construction
//!
//! This module documents why every [`crate::Dag`] is acyclic. There is no cycle detection
//! anywhere in the crate: cycles simply cannot be recorded.
//!
//! ## Why Cycles Can't Happen
//!
//! 1. A [`crate::Dag`] is only grown by [`crate::Builder::build`], one node at a time.
//! 2. A node is inserted only if **every** parent id it names is already in the graph.
//! 3. A node is inserted only if its own id is **not** already in the graph.
//! 4. Edges are recorded only at insertion time, and only from those existing parents to the
//!    new node.
//!
//! So every edge points from an older node to a newer one. A cycle would need some edge to
//! point from a newer node back to an older one, which never happens.
//!
//! The same argument gives the height invariant: a new node's height is one more than the
//! highest of its parents, so along every edge `p -> c`, `height(c) > height(p)`.
//!
//! ## Out-of-Order Instructions Don't Change This
//!
//! Instructions can be submitted in any order, but they are *applied* in dependency order: an
//! instruction whose parents are not all present is deferred and retried after the next
//! successful insertion. Submission order only affects when an instruction is tried, never
//! what it is allowed to reference.
//!
//! ## Demonstration: Self-Loops
//!
//! A node cannot be its own parent, because it is never in the graph at the moment its own
//! insertion is attempted:
//!
//! ```
//! use idag::{Builder, NodeError};
//!
//! let err = Builder::new()
//!     .add_node("a", &["a"])
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.failures(),
//!     [NodeError::MissingParent { node_id: "a".to_string() }]
//! );
//! ```
//!
//! ## Demonstration: Two-Node Cycles
//!
//! `a -> b -> a` would need each node present before the other. Neither instruction can ever
//! be applied, so both are reported:
//!
//! ```
//! use idag::Builder;
//!
//! let err = Builder::new()
//!     .add_node("a", &["b"])
//!     .add_node("b", &["a"])
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err.node_ids().collect::<Vec<_>>(), ["a", "b"]);
//! ```
//!
//! ## Demonstration: Existing Nodes Can't Gain Parents
//!
//! Re-adding an existing node with new parents is a duplicate, not an edge update, so a
//! seeded builder cannot close a cycle through a node that is already in the graph:
//!
//! ```
//! use idag::{Builder, NodeError};
//!
//! let dag = Builder::new()
//!     .add_node("a", &[])
//!     .add_node("b", &["a"])
//!     .build()
//!     .unwrap();
//!
//! let err = dag.into_builder()
//!     .add_node("a", &["b"])
//!     .build()
//!     .unwrap_err();
//!
//! assert!(matches!(
//!     &err.failures()[0],
//!     NodeError::DuplicateNode { node_id } if node_id == "a"
//! ));
//! ```
//!
//! ## Implications
//!
//! Because cycles are impossible by construction:
//! - No cycle detection is needed, at build time or at query time
//! - Upward walks such as [`crate::Dag::is_descendant_of`] always terminate
//! - Heights are well defined and never need recomputing
