//! Immutable accumulator of node-addition instructions.
//!
//! A [`Builder`] never validates anything on its own. It records what the caller asked for and
//! hands the whole batch to the resolution algorithm in [`Builder::build`].

use crate::dag::Dag;
use crate::types::NodeAddition;

/// Pending node additions layered on a starting [`Dag`].
///
/// Every method that adds an instruction consumes the builder and returns a new one, so calls
/// chain fluently. Clone a builder to branch a partial chain.
///
/// # Examples
///
/// ```
/// use idag::Builder;
///
/// let shared = Builder::new()
///     .add_node("base", &[]);
///
/// let left = shared.clone().add_node("left", &["base"]).build().unwrap();
/// let right = shared.add_node("right", &["base"]).build().unwrap();
///
/// assert!(left.contains("left") && !left.contains("right"));
/// assert!(right.contains("right") && !right.contains("left"));
/// ```
#[derive(Debug, Clone)]
pub struct Builder<T> {
    pub(crate) starting_dag: Dag<T>,
    pub(crate) instructions: Vec<NodeAddition<T>>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Dag<T>> for Builder<T> {
    fn from(dag: Dag<T>) -> Self {
        Self::from_dag(dag)
    }
}

impl<T> Builder<T> {
    /// Create a builder with no instructions over an empty DAG.
    pub fn new() -> Self {
        Self::from_dag(Dag::empty())
    }

    /// Create a builder with no instructions over an existing DAG.
    ///
    /// Every id, edge and height of `dag` is carried into the result of [`Builder::build`].
    pub fn from_dag(dag: Dag<T>) -> Self {
        Self {
            starting_dag: dag,
            instructions: Vec::new(),
        }
    }

    /// Request that `node` be added with the given parents.
    ///
    /// Parents do not need to exist yet: they may come from the starting DAG or from any other
    /// instruction of this builder, in any order. Parent order is kept for the recorded edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use idag::Builder;
    ///
    /// // Child first, parent second
    /// let dag = Builder::new()
    ///     .add_node("10", &["12"])
    ///     .add_node("12", &[])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(dag.get_height("10"), Some(1));
    /// ```
    pub fn add_node(mut self, node: T, parent_ids: &[&str]) -> Self {
        self.instructions.push(NodeAddition::new(node, parent_ids));
        self
    }

    /// Like [`add_node`](Self::add_node), for parent ids held in any iterable of string-likes.
    ///
    /// Handy when the ids are owned `String`s computed at runtime.
    ///
    /// ```
    /// use idag::Builder;
    ///
    /// let parents: Vec<String> = (0..3).map(|i| format!("p{i}")).collect();
    /// let dag = Builder::new()
    ///     .add_node_iter("child".to_string(), &parents)
    ///     .add_node("p0".to_string(), &[])
    ///     .add_node("p1".to_string(), &[])
    ///     .add_node("p2".to_string(), &[])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(dag.get_parents("child").len(), 3);
    /// ```
    pub fn add_node_iter<I>(mut self, node: T, parent_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let parent_ids = parent_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        self.instructions.push(NodeAddition::with_parents(node, parent_ids));
        self
    }

    /// The DAG this builder extends.
    pub fn starting_dag(&self) -> &Dag<T> {
        &self.starting_dag
    }

    /// Instructions recorded so far, in submission order.
    pub fn instructions(&self) -> &[NodeAddition<T>] {
        &self.instructions
    }

    /// Number of recorded instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True iff no instructions have been recorded.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
