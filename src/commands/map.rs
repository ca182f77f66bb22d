//! Map command: show intersections and roads

use serde_json::json;

use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;
use rickshaw_core::graph::NodeId;

use crate::city::CityMap;
use crate::cli::Cli;

/// Execute the map command
pub fn execute(cli: &Cli, city: &CityMap) -> Result<()> {
    let roads = collect_roads(city);

    match cli.format {
        OutputFormat::Json => output_json(city, &roads)?,
        OutputFormat::Human => output_human(cli, city, &roads),
    }

    Ok(())
}

/// Each undirected road once, ordered by endpoint ids.
fn collect_roads(city: &CityMap) -> Vec<(NodeId, NodeId, f64)> {
    let mut roads = Vec::new();
    for intersection in city.intersections() {
        for &(other, km) in city.graph().neighbors(intersection.id) {
            if intersection.id < other {
                roads.push((intersection.id, other, km));
            }
        }
    }
    roads.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    roads
}

fn output_json(city: &CityMap, roads: &[(NodeId, NodeId, f64)]) -> Result<()> {
    let intersections: Vec<_> = city.intersections().collect();
    let road_objects: Vec<_> = roads
        .iter()
        .map(|&(u, v, km)| json!({ "u": u, "v": v, "km": km }))
        .collect();

    let payload = json!({
        "total_intersections": intersections.len(),
        "total_roads": roads.len(),
        "intersections": intersections,
        "roads": road_objects,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn output_human(cli: &Cli, city: &CityMap, roads: &[(NodeId, NodeId, f64)]) {
    if !cli.quiet {
        println!(
            "{} intersections, {} roads",
            city.graph().node_count(),
            roads.len()
        );
        println!();
    }

    for intersection in city.intersections() {
        println!(
            "{:>3}  {:<20} {:.4}, {:.4}",
            intersection.id, intersection.name, intersection.lon, intersection.lat
        );
    }

    println!();
    for &(u, v, km) in roads {
        println!(
            "{:>3} - {:<3} {:>6.2} km  ({} - {})",
            u,
            v,
            km,
            city.name_of(u),
            city.name_of(v)
        );
    }
}
