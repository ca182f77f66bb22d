//! Minimum spanning tree (Kruskal)

use super::shared::{DisjointSet, IndexedEdge, IndexedGraph};

/// Build a minimum spanning tree from the sorted edge list.
///
/// Edges are scanned in ascending weight order (stable sort, so equal
/// weights keep insertion order) and an edge is taken whenever its
/// endpoints sit in different components. Stops once `n - 1` edges are
/// chosen or the list is exhausted; on a disconnected graph the result
/// is a spanning forest.
pub fn spanning_tree(graph: &IndexedGraph) -> Vec<IndexedEdge> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut edges: Vec<IndexedEdge> = graph.edges().to_vec();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut dsu = DisjointSet::new(n);
    let mut tree = Vec::new();

    for edge in edges {
        if dsu.union(edge.u, edge.v) {
            tree.push(edge);
            if tree.len() == n - 1 {
                break;
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::prim;

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
    fn test_skips_cycle_closing_edges() {
        let mut g = IndexedGraph::new(4);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 0, 1.0);
        g.add_edge(2, 3, 2.0);

        let tree = spanning_tree(&g);
        assert_eq!(tree.len(), 3);
        let total: f64 = tree.iter().map(|e| e.weight).sum();
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_matches_prim_total_weight_with_ties() {
        // Repeated weights: chosen edges may differ from Prim but
        // total weight must not.
        let mut g = IndexedGraph::new(6);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 1.0);
        g.add_edge(3, 0, 1.0);
        g.add_edge(1, 4, 2.0);
        g.add_edge(2, 4, 2.0);
        g.add_edge(4, 5, 3.0);
        g.add_edge(3, 5, 3.0);

        let kruskal_total: f64 = spanning_tree(&g).iter().map(|e| e.weight).sum();
        let prim_total: f64 = prim::spanning_tree(&g).iter().map(|e| e.weight).sum();
        assert_eq!(kruskal_total, prim_total);
    }

    #[test]
    fn test_disconnected_yields_forest() {
        let mut g = IndexedGraph::new(4);
        g.add_edge(0, 1, 1.0);
        g.add_edge(2, 3, 2.0);

        let tree = spanning_tree(&g);
        assert_eq!(tree.len(), 2);
    }
}
