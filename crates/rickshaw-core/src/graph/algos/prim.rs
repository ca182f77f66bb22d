//! Minimum spanning tree (Prim)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::shared::{HeapEntry, IndexedEdge, IndexedGraph};

/// Grow a minimum spanning tree from vertex 0.
///
/// Maintains a min-heap of candidate crossing edges keyed by weight;
/// each finalized vertex emits the edge that pulled it into the tree,
/// in finalization order.
///
/// On a disconnected graph this spans only the component containing
/// vertex 0; vertices unreachable from it are left out of the result.
pub fn spanning_tree(graph: &IndexedGraph) -> Vec<IndexedEdge> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut tree = Vec::new();

    key[0] = 0.0;
    heap.push(Reverse(HeapEntry {
        weight: 0.0,
        vertex: 0,
    }));

    while let Some(Reverse(HeapEntry { vertex, .. })) = heap.pop() {
        if in_tree[vertex] {
            continue;
        }
        in_tree[vertex] = true;

        if let Some(from) = parent[vertex] {
            tree.push(IndexedEdge {
                u: from,
                v: vertex,
                weight: key[vertex],
            });
        }

        for &(next, weight) in graph.adjacency(vertex) {
            if !in_tree[next] && weight < key[next] {
                key[next] = weight;
                parent[next] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    weight,
                    vertex: next,
                }));
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_drops_heavy_edge() {
        let mut g = IndexedGraph::new(3);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(0, 2, 5.0);

        let tree = spanning_tree(&g);
        assert_eq!(tree.len(), 2);
        let total: f64 = tree.iter().map(|e| e.weight).sum();
        assert_eq!(total, 2.0);
    }

    #[test]
    fn test_spanning_tree_has_n_minus_one_edges() {
        let mut g = IndexedGraph::new(5);
        g.add_edge(0, 1, 4.0);
        g.add_edge(0, 2, 3.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(1, 3, 2.0);
        g.add_edge(2, 3, 4.0);
        g.add_edge(3, 4, 2.0);

        let tree = spanning_tree(&g);
        assert_eq!(tree.len(), 4);
        let total: f64 = tree.iter().map(|e| e.weight).sum();
        assert_eq!(total, 8.0);
    }

    #[test]
    fn test_disconnected_spans_start_component_only() {
        let mut g = IndexedGraph::new(5);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(3, 4, 1.0);

        let tree = spanning_tree(&g);
        assert_eq!(tree.len(), 2);
        for edge in &tree {
            assert!(edge.u <= 2 && edge.v <= 2);
        }
    }

    #[test]
    fn test_empty_graph() {
        assert!(spanning_tree(&IndexedGraph::new(0)).is_empty());
    }
}
