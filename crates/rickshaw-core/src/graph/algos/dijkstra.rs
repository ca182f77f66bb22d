//! Single-source shortest path (Dijkstra)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::shared::{HeapEntry, IndexedGraph};

/// Find the minimum-weight path from `start` to `end`.
///
/// Classic Dijkstra with a binary min-heap of tentative distances.
/// Stale heap entries are skipped; the search stops as soon as `end` is
/// finalized. Returns the total weight and the vertex sequence from
/// `start` to `end` inclusive, or `None` when `end` is unreachable.
///
/// Both endpoints must be valid vertex indices. Negative weights are
/// out of contract.
pub fn shortest_path(graph: &IndexedGraph, start: usize, end: usize) -> Option<(f64, Vec<usize>)> {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist[start] = 0.0;
    heap.push(Reverse(HeapEntry {
        weight: 0.0,
        vertex: start,
    }));

    while let Some(Reverse(HeapEntry { weight, vertex })) = heap.pop() {
        if weight > dist[vertex] {
            continue;
        }
        if vertex == end {
            break;
        }

        for &(next, edge_weight) in graph.adjacency(vertex) {
            let candidate = dist[vertex] + edge_weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                parent[next] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    weight: candidate,
                    vertex: next,
                }));
            }
        }
    }

    if dist[end].is_infinite() {
        return None;
    }

    // Walk the parent chain back from the target, then flip it so the
    // path reads start -> end.
    let mut path = Vec::new();
    let mut cursor = Some(end);
    while let Some(vertex) = cursor {
        path.push(vertex);
        cursor = parent[vertex];
    }
    path.reverse();

    Some((dist[end], path))
}
