//! The identity contract for DAG nodes.
//!
//! Every payload stored in a [`crate::Dag`] exposes a unique string id through the [`Node`]
//! trait. Identity is the id and nothing else: two values with the same id are the same node,
//! whatever else they carry.

use std::rc::Rc;
use std::sync::Arc;

/// A value that can be stored as a node in a [`crate::Dag`].
///
/// Implementations must return the same id for the lifetime of the value. Ids are compared
/// byte-for-byte; no normalization takes place.
///
/// Implement it by hand, or derive it:
///
/// ```
/// use idag::Node;
///
/// #[derive(Node)]
/// struct Job {
///     id: String,
///     retries: u8,
/// }
///
/// let job = Job { id: "nightly".to_string(), retries: 3 };
/// assert_eq!(job.id(), "nightly");
/// ```
pub trait Node {
    /// The node's unique id.
    fn id(&self) -> &str;
}

impl Node for str {
    fn id(&self) -> &str {
        self
    }
}

impl Node for String {
    fn id(&self) -> &str {
        self.as_str()
    }
}

impl<N: Node + ?Sized> Node for &N {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<N: Node + ?Sized> Node for Rc<N> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

impl<N: Node + ?Sized> Node for Arc<N> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// Returns true iff both values identify the same node.
///
/// ```
/// use idag::same_node;
///
/// assert!(same_node("a", &"a".to_string()));
/// assert!(!same_node("a", "b"));
/// ```
pub fn same_node<A, B>(a: &A, b: &B) -> bool
where
    A: Node + ?Sized,
    B: Node + ?Sized,
{
    a.id() == b.id()
}
