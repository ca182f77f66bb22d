//! Mst command: minimum spanning tree of the road network

use serde_json::json;

use rickshaw_core::engine;
use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;
use rickshaw_core::graph::MstEdge;

use crate::city::CityMap;
use crate::cli::{Cli, MstAlgorithm};

/// Execute the mst command
pub fn execute(cli: &Cli, city: &CityMap, algorithm: MstAlgorithm) -> Result<()> {
    let edges = match algorithm {
        MstAlgorithm::Prim => engine::prim_mst(city.graph())?,
        MstAlgorithm::Kruskal => engine::kruskal_mst(city.graph())?,
    };

    match cli.format {
        OutputFormat::Json => output_json(city, algorithm, &edges)?,
        OutputFormat::Human => output_human(cli, city, algorithm, &edges),
    }

    Ok(())
}

fn output_json(city: &CityMap, algorithm: MstAlgorithm, edges: &[MstEdge]) -> Result<()> {
    let total_km: f64 = edges.iter().map(|e| e.weight).sum();
    let edge_objects: Vec<_> = edges
        .iter()
        .map(|e| {
            json!({
                "u": e.u,
                "v": e.v,
                "km": e.weight,
                "u_coords": city.coordinates(e.u),
                "v_coords": city.coordinates(e.v),
            })
        })
        .collect();

    let payload = json!({
        "algorithm": algorithm_name(algorithm),
        "edges": edge_objects,
        "total_edges": edges.len(),
        "total_km": total_km,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn output_human(cli: &Cli, city: &CityMap, algorithm: MstAlgorithm, edges: &[MstEdge]) {
    let total_km: f64 = edges.iter().map(|e| e.weight).sum();

    if !cli.quiet {
        println!(
            "{} spanning tree: {} edges, {:.2} km total",
            algorithm_name(algorithm),
            edges.len(),
            total_km
        );
    }

    for edge in edges {
        println!(
            "{:>3} - {:<3} {:>6.2} km  ({} - {})",
            edge.u,
            edge.v,
            edge.weight,
            city.name_of(edge.u),
            city.name_of(edge.v)
        );
    }
}

fn algorithm_name(algorithm: MstAlgorithm) -> &'static str {
    match algorithm {
        MstAlgorithm::Prim => "Prim",
        MstAlgorithm::Kruskal => "Kruskal",
    }
}
