//! Route command: shortest path between two intersections

use std::time::Instant;

use serde_json::json;

use rickshaw_core::engine;
use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;
use rickshaw_core::graph::{NodeId, PathResult};

use crate::city::{fare, CityMap};
use crate::cli::Cli;
use crate::commands::helpers::require_intersection;

/// Execute the route command
pub fn execute(cli: &Cli, city: &CityMap, from: NodeId, to: NodeId, start: Instant) -> Result<()> {
    require_intersection(city, from)?;
    require_intersection(city, to)?;

    let result = engine::shortest_path(city.graph(), from, to)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "shortest_path");
    }

    match cli.format {
        OutputFormat::Json => output_json(city, from, to, &result)?,
        OutputFormat::Human => output_human(city, from, to, &result),
    }

    Ok(())
}

fn output_json(city: &CityMap, from: NodeId, to: NodeId, result: &PathResult) -> Result<()> {
    let payload = if result.is_reachable() {
        json!({
            "from": from,
            "to": to,
            "reachable": true,
            "distance_km": result.distance,
            "path": &result.path,
            "path_coords": city.path_coordinates(&result.path),
            "eta_mins": fare::eta_minutes(result.distance),
        })
    } else {
        json!({
            "from": from,
            "to": to,
            "reachable": false,
        })
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn output_human(city: &CityMap, from: NodeId, to: NodeId, result: &PathResult) {
    if !result.is_reachable() {
        println!(
            "no route from {} to {}",
            city.name_of(from),
            city.name_of(to)
        );
        return;
    }

    println!(
        "{} -> {}: {:.2} km, about {} min",
        city.name_of(from),
        city.name_of(to),
        result.distance,
        fare::eta_minutes(result.distance)
    );
    for &node in &result.path {
        println!("  {:>3}  {}", node, city.name_of(node));
    }
}
