//! Engine front door
//!
//! Single dispatch point for the graph algorithms. A request names an
//! algorithm and carries a serialized graph body (plus start/end
//! indices for path queries); the outcome is a typed result that
//! renders to, and parses from, the line-oriented response protocol.
//!
//! The engine is stateless: every call is a complete, synchronous
//! computation over the request's own graph, so concurrent calls need
//! no coordination. Failures are always typed errors or sentinel
//! outcomes, never panics, and never leave partial state behind.

use std::fmt;
use std::str::FromStr;

use crate::error::{RickshawError, Result};
use crate::graph::algos::{dijkstra, kruskal, prim, topo, IndexedEdge};
use crate::graph::{Graph, MstEdge, NodeId, PathResult};
use crate::wire::{self, DependencyMap};

/// Sentinel token for an unorderable (cyclic) dependency set.
pub const CYCLE_TOKEN: &str = "CYCLE";

/// The algorithms the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Prim,
    Kruskal,
    Topo,
}

impl Algorithm {
    /// Topological sort is the only algorithm fed a directed graph.
    pub fn is_directed(self) -> bool {
        matches!(self, Algorithm::Topo)
    }
}

impl FromStr for Algorithm {
    type Err = RickshawError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            "topo" => Ok(Algorithm::Topo),
            other => Err(RickshawError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Prim => write!(f, "prim"),
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::Topo => write!(f, "topo"),
        }
    }
}

/// A serialized computation request.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub algorithm: Algorithm,
    /// Request body in wire form (`N M` header plus edge lines)
    pub body: String,
    /// Start vertex index, required by dijkstra
    pub start: Option<usize>,
    /// End vertex index, required by dijkstra
    pub end: Option<usize>,
}

/// The result of a computation, in dense vertex indices.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Shortest path found
    Path { distance: f64, path: Vec<usize> },
    /// Target unreachable from start: a defined result, not an error
    NoPath,
    /// Spanning tree (or forest) edges in selection order
    Tree { edges: Vec<IndexedEdge> },
    /// Complete dependency ordering
    Order { indices: Vec<usize> },
    /// The dependency set cannot be ordered
    Cycle,
}

/// Decode, dispatch, and compute a request.
///
/// Malformed bodies, a missing or out-of-range dijkstra endpoint, and
/// unknown algorithms all surface as typed errors; everything the
/// algorithms themselves can produce (no path, cycle) is an outcome.
#[tracing::instrument(skip(request), fields(algorithm = %request.algorithm))]
pub fn solve(request: &SolveRequest) -> Result<SolveOutcome> {
    let graph = wire::parse_graph(&request.body, request.algorithm.is_directed())?;

    match request.algorithm {
        Algorithm::Dijkstra => {
            let start = required_endpoint(request.start, "start", graph.node_count())?;
            let end = required_endpoint(request.end, "end", graph.node_count())?;
            match dijkstra::shortest_path(&graph, start, end) {
                Some((distance, path)) => Ok(SolveOutcome::Path { distance, path }),
                None => Ok(SolveOutcome::NoPath),
            }
        }
        Algorithm::Prim => Ok(SolveOutcome::Tree {
            edges: prim::spanning_tree(&graph),
        }),
        Algorithm::Kruskal => Ok(SolveOutcome::Tree {
            edges: kruskal::spanning_tree(&graph),
        }),
        Algorithm::Topo => match topo::topological_order(&graph) {
            Some(indices) => Ok(SolveOutcome::Order { indices }),
            None => Ok(SolveOutcome::Cycle),
        },
    }
}

fn required_endpoint(value: Option<usize>, name: &str, node_count: usize) -> Result<usize> {
    let index =
        value.ok_or_else(|| RickshawError::usage(format!("dijkstra requires a {} index", name)))?;
    if index >= node_count {
        return Err(RickshawError::malformed(format!(
            "{} index {} out of range for {} nodes",
            name, index, node_count
        )));
    }
    Ok(index)
}

impl SolveOutcome {
    /// Render the response in wire form.
    pub fn to_wire(&self) -> String {
        match self {
            SolveOutcome::Path { distance, path } => {
                let indices: Vec<String> = path.iter().map(|i| i.to_string()).collect();
                format!("{}\n{}\n", distance, indices.join(" "))
            }
            // Distance sentinel plus an empty path line
            SolveOutcome::NoPath => format!("{}\n\n", f64::INFINITY),
            SolveOutcome::Tree { edges } => {
                let mut out = String::new();
                for edge in edges {
                    out.push_str(&format!("{} {} {}\n", edge.u, edge.v, edge.weight));
                }
                out
            }
            SolveOutcome::Order { indices } => {
                let tokens: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
                format!("{}\n", tokens.join(" "))
            }
            SolveOutcome::Cycle => format!("{}\n", CYCLE_TOKEN),
        }
    }

    /// Parse a wire-form response for the given algorithm.
    pub fn from_wire(algorithm: Algorithm, text: &str) -> Result<Self> {
        match algorithm {
            Algorithm::Dijkstra => {
                let mut lines = text.lines();
                let distance: f64 = lines
                    .next()
                    .ok_or_else(|| RickshawError::malformed("missing distance line"))?
                    .trim()
                    .parse()
                    .map_err(|_| RickshawError::malformed("non-numeric distance"))?;
                if distance.is_infinite() {
                    return Ok(SolveOutcome::NoPath);
                }
                let path = parse_indices(lines.next().unwrap_or(""))?;
                Ok(SolveOutcome::Path { distance, path })
            }
            Algorithm::Prim | Algorithm::Kruskal => {
                let mut edges = Vec::new();
                for line in text.lines().filter(|l| !l.trim().is_empty()) {
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    if tokens.len() != 3 {
                        return Err(RickshawError::malformed(format!(
                            "bad tree edge line: {:?}",
                            line
                        )));
                    }
                    let u = tokens[0].parse().map_err(|_| {
                        RickshawError::malformed(format!("non-numeric endpoint: {:?}", line))
                    })?;
                    let v = tokens[1].parse().map_err(|_| {
                        RickshawError::malformed(format!("non-numeric endpoint: {:?}", line))
                    })?;
                    let weight = tokens[2].parse().map_err(|_| {
                        RickshawError::malformed(format!("non-numeric weight: {:?}", line))
                    })?;
                    edges.push(IndexedEdge { u, v, weight });
                }
                Ok(SolveOutcome::Tree { edges })
            }
            Algorithm::Topo => {
                let line = text.lines().next().unwrap_or("");
                if line.trim() == CYCLE_TOKEN {
                    return Ok(SolveOutcome::Cycle);
                }
                Ok(SolveOutcome::Order {
                    indices: parse_indices(line)?,
                })
            }
        }
    }
}

fn parse_indices(line: &str) -> Result<Vec<usize>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| RickshawError::malformed(format!("non-numeric index: {:?}", token)))
        })
        .collect()
}

/// Minimum-weight path between two nodes of a caller-built graph.
///
/// Unknown endpoints and unreachable targets both yield the defined
/// no-path result.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Result<PathResult> {
    if !graph.contains(start) || !graph.contains(end) {
        return Ok(PathResult::no_path());
    }

    let encoding = wire::encode_graph(graph);
    let request = SolveRequest {
        algorithm: Algorithm::Dijkstra,
        body: encoding.body.clone(),
        start: encoding.index_of(start),
        end: encoding.index_of(end),
    };

    match solve(&request)? {
        SolveOutcome::Path { distance, path } => Ok(PathResult {
            distance,
            path: path.into_iter().map(|i| encoding.nodes[i]).collect(),
        }),
        SolveOutcome::NoPath => Ok(PathResult::no_path()),
        _ => Err(RickshawError::Other(
            "engine returned a non-path outcome for dijkstra".to_string(),
        )),
    }
}

/// Minimum spanning tree via Prim's algorithm, in original node
/// identifiers. Spans only the lowest-identifier node's component when
/// the graph is disconnected.
pub fn prim_mst(graph: &Graph) -> Result<Vec<MstEdge>> {
    mst(graph, Algorithm::Prim)
}

/// Minimum spanning tree via Kruskal's algorithm, in original node
/// identifiers. Produces a spanning forest when the graph is
/// disconnected.
pub fn kruskal_mst(graph: &Graph) -> Result<Vec<MstEdge>> {
    mst(graph, Algorithm::Kruskal)
}

fn mst(graph: &Graph, algorithm: Algorithm) -> Result<Vec<MstEdge>> {
    let encoding = wire::encode_graph(graph);
    let request = SolveRequest {
        algorithm,
        body: encoding.body.clone(),
        start: None,
        end: None,
    };

    match solve(&request)? {
        SolveOutcome::Tree { edges } => Ok(edges
            .into_iter()
            .map(|edge| MstEdge {
                u: encoding.nodes[edge.u],
                v: encoding.nodes[edge.v],
                weight: edge.weight,
            })
            .collect()),
        _ => Err(RickshawError::Other(format!(
            "engine returned a non-tree outcome for {}",
            algorithm
        ))),
    }
}

/// Dependency-ordered schedule for a task set.
///
/// Returns the task names with every prerequisite before its
/// dependents, or [`RickshawError::DependencyCycle`] when no such order
/// exists. The empty set is valid and yields an empty schedule.
pub fn topological_sort(dependencies: &DependencyMap) -> Result<Vec<String>> {
    let encoding = wire::encode_dependencies(dependencies);
    let request = SolveRequest {
        algorithm: Algorithm::Topo,
        body: encoding.body.clone(),
        start: None,
        end: None,
    };

    match solve(&request)? {
        SolveOutcome::Order { indices } => Ok(indices
            .into_iter()
            .map(|i| encoding.tasks[i].clone())
            .collect()),
        SolveOutcome::Cycle => Err(RickshawError::DependencyCycle),
        _ => Err(RickshawError::Other(
            "engine returned a non-order outcome for topo".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests;
