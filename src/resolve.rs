//! Resolution of builder instructions into a [`Dag`].
//!
//! Instructions are applied with an iterative worklist. An instruction that cannot be applied
//! yet is deferred; every successful insertion puts all deferred instructions back at the front
//! of the queue, ahead of the ones not tried yet. Resolution ends when the queue drains: with a
//! new DAG if nothing is left deferred, otherwise with one error per deferred instruction.

use std::collections::VecDeque;

#[cfg(feature = "tracing")]
use tracing::{debug, info, trace};

use crate::builder::Builder;
use crate::dag::Dag;
use crate::error::{BuildError, DagResult, NodeError};
use crate::node::Node;
use crate::types::NodeAddition;

impl<T: Node> Builder<T> {
    /// Resolve every instruction into a new [`Dag`].
    ///
    /// Instructions may be given in any order relative to their dependencies. The result is
    /// all-or-nothing: either every instruction is applied, or a [`BuildError`] lists each
    /// instruction that never could be, in the order they last failed. No partial DAG is
    /// returned on failure.
    ///
    /// # Errors
    ///
    /// - [`NodeError::DuplicateNode`] when a node's id is already in the graph, whether from
    ///   the starting DAG or an earlier instruction.
    /// - [`NodeError::MissingParent`] when a parent id never appears. It names the node being
    ///   added. A node listing itself as a parent always ends up here.
    ///
    /// # Examples
    ///
    /// ```
    /// use idag::Builder;
    ///
    /// let err = Builder::new()
    ///     .add_node("12", &["12"])
    ///     .build()
    ///     .unwrap_err();
    ///
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Missing Parent: Cannot find one or more parents for node '12'"
    /// );
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n) attempts for n instructions given in dependency order, O(n²) in the worst case.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build(self) -> DagResult<Dag<T>> {
        let Builder {
            starting_dag,
            instructions,
        } = self;

        #[cfg(feature = "tracing")]
        info!(
            instruction_count = instructions.len(),
            starting_size = starting_dag.size(),
            "starting DAG build"
        );

        #[cfg(feature = "tracing")]
        {
            if !starting_dag.is_empty() {
                debug!(
                    node_count = starting_dag.size(),
                    edge_count = starting_dag.edges().len(),
                    "seeding from existing DAG"
                );
            }
        }

        let mut dag = starting_dag;
        let mut pending: VecDeque<NodeAddition<T>> = instructions.into();
        let mut deferred: Vec<(NodeAddition<T>, NodeError)> = Vec::new();

        while let Some(head) = pending.pop_front() {
            #[cfg(feature = "tracing")]
            trace!(node_id = head.node.id(), "attempting instruction");

            match attempt(&dag, &head) {
                Ok(height) => {
                    let NodeAddition { node, parent_ids } = head;
                    dag.insert(node, height, parent_ids);

                    if !deferred.is_empty() {
                        #[cfg(feature = "tracing")]
                        trace!(
                            requeued = deferred.len(),
                            "requeueing deferred instructions"
                        );

                        // Deferred instructions go back in front, keeping their order
                        for (instruction, _) in deferred.drain(..).rev() {
                            pending.push_front(instruction);
                        }
                    }
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    trace!(error = %err, "deferring instruction");

                    deferred.push((head, err));
                }
            }
        }

        if deferred.is_empty() {
            #[cfg(feature = "tracing")]
            info!(
                node_count = dag.size(),
                edge_count = dag.edges().len(),
                "DAG build completed successfully"
            );

            return Ok(dag);
        }

        let err = BuildError::new(deferred.into_iter().map(|(_, err)| err).collect());

        #[cfg(feature = "tracing")]
        tracing::error!(
            failure_count = err.failures().len(),
            error = %err,
            "DAG build failed"
        );

        Err(err)
    }
}

/// Check whether `instruction` can be applied to `dag` right now, returning the node's height.
fn attempt<T: Node>(dag: &Dag<T>, instruction: &NodeAddition<T>) -> Result<usize, NodeError> {
    let node_id = instruction.node.id();

    if dag.contains_id(node_id) {
        return Err(NodeError::DuplicateNode {
            node_id: node_id.to_string(),
        });
    }

    height_for(dag, &instruction.parent_ids).ok_or_else(|| NodeError::MissingParent {
        node_id: node_id.to_string(),
    })
}

/// `1 + max(parent heights)`, 0 without parents, `None` if any parent is absent.
fn height_for<T>(dag: &Dag<T>, parent_ids: &[String]) -> Option<usize> {
    parent_ids.iter().try_fold(0, |height, parent_id| {
        dag.get_height(parent_id)
            .map(|parent_height| height.max(parent_height + 1))
    })
}
