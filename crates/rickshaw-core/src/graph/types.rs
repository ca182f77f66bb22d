//! Graph container and algorithm result types

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Node identifier: an opaque integer (a city intersection in the
/// rickshaw domain).
pub type NodeId = i64;

/// Weighted undirected graph stored as an adjacency list.
///
/// Edges are stored symmetrically: `add_edge(u, v, w)` makes `v`
/// reachable from `u` and `u` reachable from `v` at the same weight.
/// Adjacency entries keep insertion order and parallel edges are kept
/// as-is. Weights must be non-negative; the algorithms do not defend
/// against negative weights.
///
/// The graph is read-only for the duration of any algorithm call.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<(NodeId, f64)>>,
    nodes: HashSet<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weighted undirected edge, inserting missing endpoints.
    /// Repeated calls add parallel edges; nothing is merged.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) {
        self.adjacency.entry(u).or_default().push((v, weight));
        self.adjacency.entry(v).or_default().push((u, weight));
        self.nodes.insert(u);
        self.nodes.insert(v);
    }

    /// Neighbors of a node with edge weights, in insertion order.
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node identifiers in ascending order. This is the deterministic
    /// ordering the wire codec indexes against.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.nodes.iter().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}

/// Shortest-path query result in original node identifiers.
///
/// An unreachable target is not an error: distance is infinite and the
/// path is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub distance: f64,
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// The defined "no path" result
    pub fn no_path() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// One edge of a spanning tree, in original node identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MstEdge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = Graph::new();
        g.add_edge(1, 2, 3.5);

        assert_eq!(g.neighbors(1), &[(2, 3.5)]);
        assert_eq!(g.neighbors(2), &[(1, 3.5)]);
        assert!(g.contains(1));
        assert!(g.contains(2));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let g = Graph::new();
        assert!(g.neighbors(42).is_empty());
        assert!(!g.contains(42));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = Graph::new();
        g.add_edge(0, 1, 2.0);
        g.add_edge(0, 1, 5.0);

        assert_eq!(g.neighbors(0), &[(1, 2.0), (1, 5.0)]);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_sorted_nodes_ascending() {
        let mut g = Graph::new();
        g.add_edge(7, 3, 1.0);
        g.add_edge(3, 5, 1.0);

        assert_eq!(g.sorted_nodes(), vec![3, 5, 7]);
    }

    #[test]
    fn test_no_path_result() {
        let result = PathResult::no_path();
        assert!(!result.is_reachable());
        assert!(result.path.is_empty());
    }
}
