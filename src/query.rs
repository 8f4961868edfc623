//! Read-only queries over a [`Dag`].

use std::collections::HashSet;

use crate::dag::Dag;
use crate::node::Node;

impl<T> Dag<T> {
    /// Number of nodes in the graph.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Same as [`Dag::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The stored payload for `id`, if any.
    ///
    /// ```
    /// use idag::{Builder, Dag};
    ///
    /// let dag = Builder::new().add_node("10", &[]).build().unwrap();
    /// assert_eq!(dag.get("10"), Some(&"10"));
    /// assert_eq!(dag.get("13"), None);
    /// assert_eq!(Dag::<String>::empty().get("10"), None);
    /// ```
    pub fn get(&self, id: &str) -> Option<&T> {
        self.info(id).map(|info| &info.node)
    }

    /// The stored height for `id`, if any.
    pub fn get_height(&self, id: &str) -> Option<usize> {
        self.info(id).map(|info| info.height)
    }

    /// True iff a node with `id` is in the graph.
    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

impl<T: Node> Dag<T> {
    /// True iff a node with the same id as `node` is in the graph.
    pub fn contains<N: Node + ?Sized>(&self, node: &N) -> bool {
        self.contains_id(node.id())
    }

    /// Payloads of every parent of `node`, in edge order.
    ///
    /// Empty when `node` is a root or is not in the graph.
    ///
    /// ```
    /// use idag::Builder;
    ///
    /// let dag = Builder::new()
    ///     .add_node("10", &[])
    ///     .add_node("12", &["10"])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(dag.get_parents("12"), [&"10"]);
    /// assert!(dag.get_parents("13").is_empty());
    /// ```
    pub fn get_parents<N: Node + ?Sized>(&self, node: &N) -> Vec<&T> {
        let id = node.id();
        self.edges
            .iter()
            .filter(|edge| edge.to == id)
            .filter_map(|edge| self.get(&edge.from))
            .collect()
    }

    /// Payloads of every child of `node`, in edge order.
    ///
    /// Empty when `node` is a leaf or is not in the graph.
    pub fn get_children<N: Node + ?Sized>(&self, node: &N) -> Vec<&T> {
        let id = node.id();
        self.edges
            .iter()
            .filter(|edge| edge.from == id)
            .filter_map(|edge| self.get(&edge.to))
            .collect()
    }

    /// True iff walking parent edges upward from `target` reaches any of `ancestors`.
    ///
    /// Ancestors are compared by id. `target` itself is not part of the walk, so a node is
    /// never its own descendant. Each ancestor is visited at most once per call.
    ///
    /// ```
    /// use idag::Builder;
    ///
    /// let dag = Builder::new()
    ///     .add_node("root", &[])
    ///     .add_node("left", &["root"])
    ///     .add_node("right", &["root"])
    ///     .add_node("leaf", &["left", "right"])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(dag.is_descendant_of("leaf", ["root"]));
    /// assert!(dag.is_descendant_of("leaf", ["right", "nowhere"]));
    /// assert!(!dag.is_descendant_of("left", ["right"]));
    /// assert!(!dag.is_descendant_of("root", ["root"]));
    /// ```
    pub fn is_descendant_of<N, I>(&self, target: &N, ancestors: I) -> bool
    where
        N: Node + ?Sized,
        I: IntoIterator,
        I::Item: Node,
    {
        let ancestors: Vec<I::Item> = ancestors.into_iter().collect();
        let wanted: HashSet<&str> = ancestors.iter().map(Node::id).collect();
        if wanted.is_empty() {
            return false;
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = self.parent_ids(target.id()).collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if wanted.contains(id) {
                return true;
            }
            stack.extend(self.parent_ids(id).filter(|parent| !visited.contains(parent)));
        }

        false
    }

    fn parent_ids<'s>(&'s self, id: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.edges
            .iter()
            .filter(move |edge| edge.to == id)
            .map(|edge| edge.from.as_str())
    }
}
