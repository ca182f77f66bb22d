//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Weighted shortest path finding
//! - `prim`: Minimum spanning tree grown from a start vertex
//! - `kruskal`: Minimum spanning tree via sorted edges and union-find
//! - `topo`: Kahn dependency ordering with cycle detection
//! - `shared`: Common substrate used by multiple algorithms
//!
//! Algorithms operate on dense vertex indices `0..n` (see
//! [`shared::IndexedGraph`]); the wire codec owns the mapping between
//! indices and caller-facing node identifiers.

pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod shared;
pub mod topo;

pub use shared::{DisjointSet, IndexedEdge, IndexedGraph};
