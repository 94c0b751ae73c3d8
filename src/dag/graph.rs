// src/dag/graph.rs

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::task_info::{Task, TaskId};
use crate::errors::{DayplanError, Result};

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Direct dependencies: tasks that must complete before this one.
    deps: Vec<TaskId>,
    /// Direct dependents: tasks that list this one as a dependency.
    dependents: Vec<TaskId>,
}

/// In-memory DAG keyed by task id.
///
/// Keeps both directions of every edge so that releasing dependents on
/// completion does not need a scan over the whole task list. Nodes are kept
/// in a `BTreeMap`, so every iteration is in ascending id order no matter how
/// the input was ordered.
#[derive(Debug, Clone)]
pub struct DagGraph {
    nodes: BTreeMap<TaskId, DagNode>,
}

impl DagGraph {
    /// Build the graph from tasks whose dependency ids are already known to
    /// exist.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut nodes: BTreeMap<TaskId, DagNode> = BTreeMap::new();

        for task in tasks {
            let node = nodes.entry(task.id).or_default();
            node.deps = task.dependencies.iter().copied().collect();
        }

        let edges: Vec<(TaskId, TaskId)> = nodes
            .iter()
            .flat_map(|(&id, node)| node.deps.iter().map(move |&dep| (dep, id)))
            .collect();

        for (dep, dependent) in edges {
            if let Some(dep_node) = nodes.get_mut(&dep) {
                dep_node.dependents.push(dependent);
            }
        }

        Self { nodes }
    }

    /// All task ids, ascending.
    pub fn tasks(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Immediate dependencies of a task.
    pub fn dependencies_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task.
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.nodes
            .get(&id)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Fail with [`DayplanError::DagCycle`] if the graph has a cycle.
    ///
    /// Edge direction is dep -> task, so a successful toposort is also a
    /// valid execution order ignoring priorities.
    pub fn ensure_acyclic(&self) -> Result<Vec<TaskId>> {
        let mut graph: DiGraphMap<TaskId, ()> = DiGraphMap::new();

        for &id in self.nodes.keys() {
            graph.add_node(id);
        }
        for (&id, node) in &self.nodes {
            for &dep in &node.deps {
                graph.add_edge(dep, id, ());
            }
        }

        toposort(&graph, None).map_err(|cycle| {
            DayplanError::DagCycle(format!(
                "cycle detected in task DAG involving task {}",
                cycle.node_id()
            ))
        })
    }
}
