//! Line-oriented text protocol between callers and the engine
//!
//! A request body is a renumbered graph: header line `N M` (node and
//! edge counts), then `M` lines `u_idx v_idx weight` over dense indices
//! `0..N-1`. Encoding sorts node identifiers (or task names) to make
//! the index assignment deterministic; the returned lookup table maps
//! indices back to identifiers after the engine responds.

use std::collections::BTreeMap;

use crate::error::{RickshawError, Result};
use crate::graph::algos::IndexedGraph;
use crate::graph::{Graph, NodeId};

/// Dependency set for scheduling: task name to ordered prerequisite
/// list. Prerequisites that are not themselves tasks are ignored.
pub type DependencyMap = BTreeMap<String, Vec<String>>;

/// An encoded graph request body plus the index-to-identifier table
/// needed to decode the response.
#[derive(Debug, Clone)]
pub struct GraphEncoding {
    pub body: String,
    /// Node identifiers in index order: `nodes[i]` is the identifier
    /// wire index `i` stands for.
    pub nodes: Vec<NodeId>,
}

impl GraphEncoding {
    /// Wire index of a node identifier. The table is sorted, so this
    /// is a binary search.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.binary_search(&node).ok()
    }
}

/// An encoded dependency DAG plus the index-to-task table.
#[derive(Debug, Clone)]
pub struct DependencyEncoding {
    pub body: String,
    /// Task names in index order (lexicographic).
    pub tasks: Vec<String>,
}

/// Serialize a graph for the engine.
///
/// Nodes are indexed in ascending identifier order. Each undirected
/// pair is emitted exactly once, when the first endpoint's index is
/// less than the second's; parallel edges each get their own line.
pub fn encode_graph(graph: &Graph) -> GraphEncoding {
    let nodes = graph.sorted_nodes();

    let mut edges = Vec::new();
    for (idx_u, &u) in nodes.iter().enumerate() {
        for &(v, weight) in graph.neighbors(u) {
            // Sorted identifiers mean idx_u < idx_v exactly when u < v
            if u < v {
                // v is present in the sorted table by construction
                if let Ok(idx_v) = nodes.binary_search(&v) {
                    edges.push((idx_u, idx_v, weight));
                }
            }
        }
    }

    let mut body = format!("{} {}\n", nodes.len(), edges.len());
    for (u, v, weight) in edges {
        body.push_str(&format!("{} {} {}\n", u, v, weight));
    }

    GraphEncoding { body, nodes }
}

/// Serialize a dependency set as a directed DAG.
///
/// Tasks are indexed in lexicographic order; one arc prerequisite ->
/// task is emitted per known prerequisite, so unknown prerequisites
/// drop out here rather than erroring.
pub fn encode_dependencies(dependencies: &DependencyMap) -> DependencyEncoding {
    let tasks: Vec<String> = dependencies.keys().cloned().collect();

    let mut edges = Vec::new();
    // BTreeMap iteration order matches the sorted task table
    for (task_idx, (_, prerequisites)) in dependencies.iter().enumerate() {
        for prerequisite in prerequisites {
            if let Ok(prereq_idx) = tasks.binary_search(prerequisite) {
                edges.push((prereq_idx, task_idx));
            }
        }
    }

    let mut body = format!("{} {}\n", tasks.len(), edges.len());
    for (u, v) in edges {
        body.push_str(&format!("{} {} 1\n", u, v));
    }

    DependencyEncoding { body, tasks }
}

/// Decode a request body into the dense graph the algorithms run on.
///
/// Strict: the header must carry two counts, exactly `M` edge lines
/// must follow with in-range endpoints and numeric weights, and nothing
/// else. Any violation fails the whole request; no partial graph is
/// returned.
pub fn parse_graph(body: &str, directed: bool) -> Result<IndexedGraph> {
    let mut lines = body.lines();

    let header = lines
        .next()
        .ok_or_else(|| RickshawError::malformed("empty request body"))?;
    let mut counts = header.split_whitespace();
    let node_count = parse_count(counts.next(), "node count")?;
    let edge_count = parse_count(counts.next(), "edge count")?;
    if counts.next().is_some() {
        return Err(RickshawError::malformed(format!(
            "header has trailing tokens: {:?}",
            header
        )));
    }

    let mut graph = IndexedGraph::new(node_count);
    for line_no in 0..edge_count {
        let line = lines.next().ok_or_else(|| {
            RickshawError::malformed(format!(
                "expected {} edge lines, found {}",
                edge_count, line_no
            ))
        })?;

        let mut tokens = line.split_whitespace();
        let u = parse_endpoint(tokens.next(), node_count, line)?;
        let v = parse_endpoint(tokens.next(), node_count, line)?;
        let weight: f64 = tokens
            .next()
            .ok_or_else(|| RickshawError::malformed(format!("missing weight: {:?}", line)))?
            .parse()
            .map_err(|_| RickshawError::malformed(format!("non-numeric weight: {:?}", line)))?;
        if tokens.next().is_some() {
            return Err(RickshawError::malformed(format!(
                "edge line has trailing tokens: {:?}",
                line
            )));
        }

        if directed {
            graph.add_arc(u, v, weight);
        } else {
            graph.add_edge(u, v, weight);
        }
    }

    if lines.any(|line| !line.trim().is_empty()) {
        return Err(RickshawError::malformed(format!(
            "request body has more than {} edge lines",
            edge_count
        )));
    }

    Ok(graph)
}

fn parse_count(token: Option<&str>, what: &str) -> Result<usize> {
    token
        .ok_or_else(|| RickshawError::malformed(format!("missing {}", what)))?
        .parse()
        .map_err(|_| RickshawError::malformed(format!("non-numeric {}", what)))
}

fn parse_endpoint(token: Option<&str>, node_count: usize, line: &str) -> Result<usize> {
    let index: usize = token
        .ok_or_else(|| RickshawError::malformed(format!("missing endpoint: {:?}", line)))?
        .parse()
        .map_err(|_| RickshawError::malformed(format!("non-numeric endpoint: {:?}", line)))?;
    if index >= node_count {
        return Err(RickshawError::malformed(format!(
            "endpoint {} out of range for {} nodes",
            index, node_count
        )));
    }
    Ok(index)
}
