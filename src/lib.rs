//! Immutable, Height-Aware DAGs
//!
//! A small library for building and querying immutable directed acyclic graphs whose nodes
//! carry arbitrary payload data identified by a unique string id.
//!
//! # Features
//!
//! - **Acyclic by construction**: A node can only be wired to parents that already exist in the
//!   graph at the moment it is inserted, so a cycle can never be recorded. See the
//!   [`acyclicity`] module for the full argument.
//! - **Heights for free**: Every node knows its height (the longest path from any root) as soon
//!   as it is inserted. Roots have height 0.
//! - **Order-independent construction**: Instructions can be submitted in any order. The
//!   resolution algorithm retries blocked instructions every time a new node lands.
//! - **Aggregated errors**: A failed build reports every instruction that could not be applied,
//!   not just the first one.
//! - **Immutable values**: [`Builder::add_node`] and [`Builder::build`] return new values. A
//!   published [`Dag`] is never modified, so it can be shared freely across threads.
//! - **Bring your own node type**: Anything implementing [`Node`] works. Plain strings do out of
//!   the box, and `#[derive(Node)]` covers structs.
//!
//! # Quick Start
//!
//! ```
//! use idag::Builder;
//!
//! let dag = Builder::new()
//!     .add_node("admin", &[])
//!     .add_node("edit", &["admin"])
//!     .add_node("view", &["edit", "admin"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dag.size(), 3);
//! assert_eq!(dag.get_height("admin"), Some(0));
//! assert_eq!(dag.get_height("edit"), Some(1));
//! assert_eq!(dag.get_height("view"), Some(2));
//! ```
//!
//! # Core Concepts
//!
//! ## Node
//!
//! The [`Node`] trait is the identity contract: a node exposes a unique string id, and two nodes
//! are the same node iff their ids are equal. Use the derive macro for your own types:
//!
//! ```
//! use idag::{Builder, Node};
//!
//! #[derive(Debug, Clone, Node)]
//! struct Privilege {
//!     id: String,
//!     label: String,
//! }
//!
//! impl Privilege {
//!     fn new(id: &str, label: &str) -> Self {
//!         Self { id: id.to_string(), label: label.to_string() }
//!     }
//! }
//!
//! let dag = Builder::new()
//!     .add_node(Privilege::new("Admin", "Admin"), &[])
//!     .add_node(Privilege::new("Edit All Nodes", "Nodes:Edit:All"), &["Admin"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dag.get("Edit All Nodes").unwrap().label, "Nodes:Edit:All");
//! ```
//!
//! A field other than `id` can carry the identity with `#[node(id)]`:
//!
//! ```
//! use idag::Node;
//!
//! #[derive(Node)]
//! struct Step {
//!     #[node(id)]
//!     name: String,
//!     weight: u32,
//! }
//!
//! let step = Step { name: "fetch".to_string(), weight: 3 };
//! assert_eq!(step.id(), "fetch");
//! ```
//!
//! ## Builder
//!
//! A [`Builder`] accumulates node-addition instructions on top of a starting [`Dag`] (empty by
//! default). Each call to [`Builder::add_node`] returns a new builder. Nothing is validated until
//! [`Builder::build`] runs.
//!
//! ## Dag
//!
//! A [`Dag`] maps ids to [`NodeInfo`] entries (payload plus height) and records every parent to
//! child relationship as an [`Edge`]. It is read through the query methods:
//! [`Dag::size`], [`Dag::contains`], [`Dag::get`], [`Dag::get_parents`], [`Dag::get_children`],
//! [`Dag::get_height`] and [`Dag::is_descendant_of`].
//!
//! # Out-of-Order Instructions
//!
//! Instructions do not need to be sorted by dependency. A child submitted before its parent is
//! simply deferred and retried as soon as the parent has been inserted:
//!
//! ```
//! use idag::Builder;
//!
//! let dag = Builder::new()
//!     .add_node("view own", &["view all", "edit own"])
//!     .add_node("edit own", &["edit all"])
//!     .add_node("view all", &["edit all"])
//!     .add_node("edit all", &["admin"])
//!     .add_node("admin", &[])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dag.get_height("view own"), Some(3));
//! ```
//!
//! # Extending an Existing Dag
//!
//! A built [`Dag`] can seed a new builder. All prior ids, edges and heights are preserved:
//!
//! ```
//! use idag::{Builder, Dag};
//!
//! let base = Builder::new()
//!     .add_node("a", &[])
//!     .add_node("b", &["a"])
//!     .build()
//!     .unwrap();
//!
//! let extended = Builder::from_dag(base.clone())
//!     .add_node("c", &["b"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(base.size(), 2);
//! assert_eq!(extended.size(), 3);
//! assert_eq!(extended.get_height("c"), Some(2));
//! ```
//!
//! # Error Handling
//!
//! [`Builder::build`] returns [`DagResult<Dag<T>>`](DagResult). On failure the [`BuildError`]
//! lists one [`NodeError`] per instruction that could never be applied. Its `Display` output joins
//! the individual messages with `"; "`:
//!
//! ```
//! use idag::{Builder, NodeError};
//!
//! let err = Builder::new()
//!     .add_node("a", &[])
//!     .add_node("a", &[])
//!     .add_node("orphan", &["nowhere"])
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Duplicate Nodes Not Allowed: node 'a' already in graph.; \
//!      Missing Parent: Cannot find one or more parents for node 'orphan'"
//! );
//! assert!(matches!(err.failures()[1], NodeError::MissingParent { .. }));
//! ```
//!
//! No partial graph is ever returned: either every instruction lands, or none do.
//!
//! # Optional Tracing Support
//!
//! The resolution algorithm is instrumented with the `tracing` crate behind the `tracing` cargo
//! feature. When the feature is disabled (the default) the instrumentation is compiled out
//! entirely.
//!
//! ```toml
//! [dependencies]
//! idag = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ```ignore
//! use tracing_subscriber::{fmt, EnvFilter};
//!
//! fmt()
//!     .with_env_filter(
//!         EnvFilter::try_from_default_env()
//!             .unwrap_or_else(|_| EnvFilter::new("idag=info"))
//!     )
//!     .init();
//! ```
//!
//! ## Log Levels
//!
//! - **INFO**: Build start, completion and failure
//! - **DEBUG**: Node insertions, seeding from a starting Dag
//! - **TRACE**: Individual attempts, deferrals and requeues
//!
//! # Performance Characteristics
//!
//! - Instructions submitted in dependency order resolve in O(n) attempts.
//! - Maximally out-of-order instructions take O(n²) attempts in the worst case.
//! - Lookups by id are O(1); [`Dag::get_parents`] and [`Dag::get_children`] scan the edge list.
//! - [`Dag::is_descendant_of`] visits each ancestor at most once per call.
//!
//! Run `cargo bench` for measurements on your hardware.

extern crate self as idag;

// Module declarations
pub mod acyclicity;
mod builder;
mod dag;
mod error;
mod node;
mod query;
mod resolve;
mod types;

// Public re-exports
pub use builder::Builder;
pub use dag::Dag;
pub use error::{BuildError, DagResult, NodeError};
pub use node::{same_node, Node};
pub use types::{Edge, NodeAddition, NodeInfo};

// Re-export the derive macro
pub use idag_macros::Node;
