//! Dependency ordering (Kahn topological sort)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::shared::IndexedGraph;

/// Order the vertices of a directed dependency graph so every arc
/// `u -> v` places `u` before `v`.
///
/// Kahn's algorithm over in-degrees. The zero-in-degree frontier is a
/// min-heap, so the smallest index is always removed first and the
/// ordering is reproducible. Returns `None` when a cycle prevents a
/// complete ordering; a partial order is never returned.
pub fn topological_order(graph: &IndexedGraph) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let mut in_degree = vec![0usize; n];
    for u in 0..n {
        for &(v, _) in graph.adjacency(u) {
            in_degree[v] += 1;
        }
    }

    let mut frontier: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&v| in_degree[v] == 0)
        .map(Reverse)
        .collect();

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(u)) = frontier.pop() {
        order.push(u);
        for &(v, _) in graph.adjacency(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                frontier.push(Reverse(v));
            }
        }
    }

    if order.len() == n {
        Some(order)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_orders_in_sequence() {
        let mut g = IndexedGraph::new(3);
        g.add_arc(0, 1, 1.0);
        g.add_arc(1, 2, 1.0);

        assert_eq!(topological_order(&g), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut g = IndexedGraph::new(2);
        g.add_arc(0, 1, 1.0);
        g.add_arc(1, 0, 1.0);

        assert_eq!(topological_order(&g), None);
    }

    #[test]
    fn test_partial_cycle_never_returns_partial_order() {
        // 0 feeds a 1 <-> 2 cycle; 0 alone could be emitted but must not be.
        let mut g = IndexedGraph::new(3);
        g.add_arc(0, 1, 1.0);
        g.add_arc(1, 2, 1.0);
        g.add_arc(2, 1, 1.0);

        assert_eq!(topological_order(&g), None);
    }

    #[test]
    fn test_empty_graph_is_trivially_ordered() {
        assert_eq!(topological_order(&IndexedGraph::new(0)), Some(vec![]));
    }

    #[test]
    fn test_independent_vertices_emit_smallest_first() {
        let mut g = IndexedGraph::new(4);
        g.add_arc(3, 1, 1.0);

        assert_eq!(topological_order(&g), Some(vec![0, 2, 3, 1]));
    }

    #[test]
    fn test_prerequisite_precedes_dependent() {
        let mut g = IndexedGraph::new(5);
        g.add_arc(4, 0, 1.0);
        g.add_arc(0, 2, 1.0);
        g.add_arc(3, 2, 1.0);

        let order = topological_order(&g).unwrap();
        let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
        assert!(pos(4) < pos(0));
        assert!(pos(0) < pos(2));
        assert!(pos(3) < pos(2));
        assert_eq!(order.len(), 5);
    }
}
