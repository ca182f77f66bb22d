//! Weighted graph representation and algorithms
//!
//! Provides the graph primitives the engine computes over:
//! - Adjacency-list graph container over integer node identifiers
//! - Shortest-path finding (Dijkstra)
//! - Minimum spanning trees (Prim, Kruskal)
//! - Dependency ordering (Kahn topological sort)

pub mod algos;
pub mod types;

pub use types::{Graph, MstEdge, NodeId, PathResult};
