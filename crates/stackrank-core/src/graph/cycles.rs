//! Cycle detection over the per-call dependency graph.
//!
//! Marks every title that is part of, or leads into, a dependency cycle.
//! The distinction matters for scoring: a task whose dependency chain runs
//! into a cycle can never be unblocked, so it carries the same penalty as
//! the cycle members themselves.

use std::collections::HashSet;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use super::build::DepGraph;

/// Return the set of titles on or leading into at least one cycle.
///
/// Iterative DFS with an explicit frame stack, so arbitrarily deep
/// dependency chains cannot overflow the call stack. When traversal reaches
/// a node already on the active path, the entire path is marked cyclic: the
/// revisited node closes the cycle and everything above it on the path
/// depends into it. A self-dependency is a cycle of length one.
///
/// Unvisited nodes are taken in node-insertion order and neighbors in
/// dependency-list order, so the result is deterministic for a given batch.
#[must_use]
pub fn cyclic_titles(dep_graph: &DepGraph) -> HashSet<String> {
    let graph = &dep_graph.graph;
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut on_path = FixedBitSet::with_capacity(graph.node_count());
    let mut cyclic: HashSet<NodeIndex> = HashSet::new();

    // Each frame: (node, neighbors in dependency-list order, next index).
    let mut frames: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();
    let mut path: Vec<NodeIndex> = Vec::new();

    for start in graph.node_indices() {
        if visited.contains(start.index()) {
            continue;
        }
        enter(dep_graph, start, &mut visited, &mut on_path, &mut path, &mut frames);

        while let Some(frame) = frames.last_mut() {
            let current = frame.0;
            if frame.2 < frame.1.len() {
                let neighbor = frame.1[frame.2];
                frame.2 += 1;

                if on_path.contains(neighbor.index()) {
                    // Back edge: everything on the active path is cyclic.
                    cyclic.extend(path.iter().copied());
                } else if !visited.contains(neighbor.index()) {
                    enter(dep_graph, neighbor, &mut visited, &mut on_path, &mut path, &mut frames);
                }
            } else {
                frames.pop();
                on_path.set(current.index(), false);
                path.pop();
            }
        }
    }

    cyclic
        .into_iter()
        .filter_map(|idx| graph.node_weight(idx).cloned())
        .collect()
}

fn enter(
    dep_graph: &DepGraph,
    node: NodeIndex,
    visited: &mut FixedBitSet,
    on_path: &mut FixedBitSet,
    path: &mut Vec<NodeIndex>,
    frames: &mut Vec<(NodeIndex, Vec<NodeIndex>, usize)>,
) {
    visited.insert(node.index());
    on_path.insert(node.index());
    path.push(node);

    // petgraph iterates out-edges newest-first; reverse to dependency order.
    let mut neighbors: Vec<NodeIndex> = dep_graph.graph.neighbors(node).collect();
    neighbors.reverse();
    frames.push((node, neighbors, 0));
}
