use super::*;

fn triangle() -> Graph {
    let mut g = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(1, 2, 1.0);
    g.add_edge(0, 2, 5.0);
    g
}

#[test]
fn test_algorithm_tokens_round_trip() {
    for token in ["dijkstra", "prim", "kruskal", "topo"] {
        let algorithm: Algorithm = token.parse().unwrap();
        assert_eq!(algorithm.to_string(), token);
    }
    assert!("floyd".parse::<Algorithm>().is_err());
}

#[test]
fn test_solve_dijkstra_from_wire_body() {
    let request = SolveRequest {
        algorithm: Algorithm::Dijkstra,
        body: "3 3\n0 1 1\n1 2 1\n0 2 5\n".to_string(),
        start: Some(0),
        end: Some(2),
    };

    let outcome = solve(&request).unwrap();
    assert_eq!(
        outcome,
        SolveOutcome::Path {
            distance: 2.0,
            path: vec![0, 1, 2],
        }
    );
    assert_eq!(outcome.to_wire(), "2\n0 1 2\n");
}

#[test]
fn test_solve_dijkstra_missing_endpoint_is_usage_error() {
    let request = SolveRequest {
        algorithm: Algorithm::Dijkstra,
        body: "2 1\n0 1 1\n".to_string(),
        start: Some(0),
        end: None,
    };

    let err = solve(&request).unwrap_err();
    assert!(matches!(err, RickshawError::UsageError(_)));
}

#[test]
fn test_solve_dijkstra_out_of_range_endpoint() {
    let request = SolveRequest {
        algorithm: Algorithm::Dijkstra,
        body: "2 1\n0 1 1\n".to_string(),
        start: Some(0),
        end: Some(7),
    };

    assert!(matches!(
        solve(&request).unwrap_err(),
        RickshawError::MalformedRequest { .. }
    ));
}

#[test]
fn test_solve_malformed_body_is_defined_failure() {
    let request = SolveRequest {
        algorithm: Algorithm::Prim,
        body: "2 junk\n".to_string(),
        start: None,
        end: None,
    };

    assert!(matches!(
        solve(&request).unwrap_err(),
        RickshawError::MalformedRequest { .. }
    ));
}

#[test]
fn test_no_path_wire_sentinel() {
    let outcome = SolveOutcome::NoPath;
    assert_eq!(outcome.to_wire(), "inf\n\n");

    let parsed = SolveOutcome::from_wire(Algorithm::Dijkstra, "inf\n\n").unwrap();
    assert_eq!(parsed, SolveOutcome::NoPath);
}

#[test]
fn test_tree_wire_round_trip() {
    let outcome = SolveOutcome::Tree {
        edges: vec![
            IndexedEdge {
                u: 0,
                v: 1,
                weight: 1.0,
            },
            IndexedEdge {
                u: 1,
                v: 2,
                weight: 2.5,
            },
        ],
    };

    let wire = outcome.to_wire();
    assert_eq!(wire, "0 1 1\n1 2 2.5\n");
    assert_eq!(
        SolveOutcome::from_wire(Algorithm::Kruskal, &wire).unwrap(),
        outcome
    );
}

#[test]
fn test_order_and_cycle_wire_round_trip() {
    let order = SolveOutcome::Order {
        indices: vec![2, 0, 1],
    };
    assert_eq!(order.to_wire(), "2 0 1\n");
    assert_eq!(
        SolveOutcome::from_wire(Algorithm::Topo, "2 0 1\n").unwrap(),
        order
    );

    assert_eq!(SolveOutcome::Cycle.to_wire(), "CYCLE\n");
    assert_eq!(
        SolveOutcome::from_wire(Algorithm::Topo, "CYCLE\n").unwrap(),
        SolveOutcome::Cycle
    );
}

#[test]
fn test_shortest_path_maps_back_to_identifiers() {
    let mut g = Graph::new();
    g.add_edge(100, 200, 1.0);
    g.add_edge(200, 300, 1.0);
    g.add_edge(100, 300, 5.0);

    let result = shortest_path(&g, 100, 300).unwrap();
    assert_eq!(result.distance, 2.0);
    assert_eq!(result.path, vec![100, 200, 300]);
}

#[test]
fn test_shortest_path_unknown_node_is_no_path() {
    let result = shortest_path(&triangle(), 0, 99).unwrap();
    assert!(!result.is_reachable());
    assert!(result.path.is_empty());
}

#[test]
fn test_shortest_path_disjoint_components() {
    let mut g = Graph::new();
    g.add_edge(0, 1, 1.0);
    g.add_edge(5, 6, 1.0);

    let result = shortest_path(&g, 0, 6).unwrap();
    assert_eq!(result.distance, f64::INFINITY);
    assert!(result.path.is_empty());
}

#[test]
fn test_both_msts_agree_on_triangle() {
    let g = triangle();
    let prim = prim_mst(&g).unwrap();
    let kruskal = kruskal_mst(&g).unwrap();

    assert_eq!(prim.len(), 2);
    assert_eq!(kruskal.len(), 2);

    let prim_total: f64 = prim.iter().map(|e| e.weight).sum();
    let kruskal_total: f64 = kruskal.iter().map(|e| e.weight).sum();
    assert_eq!(prim_total, 2.0);
    assert_eq!(kruskal_total, 2.0);

    // Neither tree takes the heavy shortcut
    assert!(prim.iter().all(|e| e.weight == 1.0));
    assert!(kruskal.iter().all(|e| e.weight == 1.0));
}

#[test]
fn test_mst_edges_use_original_identifiers() {
    let mut g = Graph::new();
    g.add_edge(40, 50, 1.0);
    g.add_edge(50, 60, 2.0);

    let edges = kruskal_mst(&g).unwrap();
    assert_eq!(edges.len(), 2);
    for edge in edges {
        assert!(edge.u >= 40 && edge.v >= 40);
    }
}

#[test]
fn test_topological_sort_chain() {
    let mut deps = DependencyMap::new();
    deps.insert("A".into(), vec![]);
    deps.insert("B".into(), vec!["A".into()]);
    deps.insert("C".into(), vec!["B".into()]);

    assert_eq!(topological_sort(&deps).unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_topological_sort_cycle_is_distinct_error() {
    let mut deps = DependencyMap::new();
    deps.insert("A".into(), vec!["B".into()]);
    deps.insert("B".into(), vec!["A".into()]);

    assert!(matches!(
        topological_sort(&deps).unwrap_err(),
        RickshawError::DependencyCycle
    ));
}

#[test]
fn test_topological_sort_empty_set_is_valid() {
    let deps = DependencyMap::new();
    assert_eq!(topological_sort(&deps).unwrap(), Vec::<String>::new());
}

#[test]
fn test_topological_sort_ignores_unknown_prerequisites() {
    let mut deps = DependencyMap::new();
    deps.insert("A".into(), vec!["Missing".into()]);
    deps.insert("B".into(), vec!["A".into()]);

    assert_eq!(topological_sort(&deps).unwrap(), vec!["A", "B"]);
}

#[test]
fn test_graph_is_not_mutated_by_queries() {
    let g = triangle();
    let before: Vec<_> = g.sorted_nodes();

    let _ = shortest_path(&g, 0, 2).unwrap();
    let _ = prim_mst(&g).unwrap();
    let _ = kruskal_mst(&g).unwrap();

    assert_eq!(g.sorted_nodes(), before);
    assert_eq!(g.neighbors(0).len(), 2);
}
