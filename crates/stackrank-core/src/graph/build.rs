//! Graph construction from a task batch.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A **depends on** B": traversal follows dependency
//! chains outward, which is the direction cycle detection walks.
//!
//! ## Unknown references
//!
//! A dependency entry naming a title absent from the batch produces no node
//! and no edge. Dependencies resolve only within the current call, never
//! against stored history.
//!
//! ## Duplicate titles
//!
//! If the batch contains the same title twice, the later dependency list
//! wins and the node keeps its first position. Accepted quirk, matching the
//! last-write-wins adjacency the engine documents; the CLI boundary rejects
//! duplicates before they get here.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::Task;

/// A directed dependency graph over one task batch.
///
/// Nodes are task titles. Node insertion order follows first occurrence in
/// the batch, and edges follow dependency-list order, so traversal order is
/// deterministic for a given input.
#[derive(Debug)]
pub struct DepGraph {
    /// Directed graph: nodes = titles, edges = dependency relationships.
    pub graph: DiGraph<String, ()>,
    /// Mapping from title to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
}

impl DepGraph {
    /// Build the dependency graph for `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        // Resolve adjacency first so duplicate titles settle before any
        // edges exist: later dependency lists replace earlier ones.
        let mut order: Vec<&str> = Vec::with_capacity(tasks.len());
        let mut adjacency: HashMap<&str, &[String]> = HashMap::with_capacity(tasks.len());
        for task in tasks {
            if adjacency
                .insert(task.title.as_str(), task.dependencies.as_slice())
                .is_none()
            {
                order.push(task.title.as_str());
            }
        }

        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(order.len());

        for title in &order {
            let idx = graph.add_node((*title).to_string());
            node_map.insert((*title).to_string(), idx);
        }

        for title in &order {
            let from = node_map[*title];
            for dep in adjacency[*title] {
                // Unknown titles are leaves: skipped, not an error.
                let Some(&to) = node_map.get(dep.as_str()) else {
                    continue;
                };
                // petgraph allows parallel edges; keep one per pair.
                if !graph.contains_edge(from, to) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        Self { graph, node_map }
    }

    /// Number of nodes (distinct titles) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a title.
    #[must_use]
    pub fn node_index(&self, title: &str) -> Option<NodeIndex> {
        self.node_map.get(title).copied()
    }

    /// The title label for a node.
    #[must_use]
    pub fn title(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }
}
