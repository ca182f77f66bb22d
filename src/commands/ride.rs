//! Ride command: nearby drivers, route, and fares for a trip

use std::time::Instant;

use serde_json::json;

use rickshaw_core::engine;
use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;
use rickshaw_core::graph::{NodeId, PathResult};
use rickshaw_core::trace_time;

use crate::city::drivers::{self, DriverRoute};
use crate::city::{self, fare, CityMap};
use crate::cli::Cli;
use crate::commands::helpers::require_intersection;

/// Nearby drivers offered per request
const DRIVER_OPTIONS: usize = 3;

/// Execute the ride command
pub fn execute(
    cli: &Cli,
    city: &CityMap,
    pickup: NodeId,
    dropoff: NodeId,
    start: Instant,
) -> Result<()> {
    require_intersection(city, pickup)?;
    require_intersection(city, dropoff)?;

    let nearby = drivers::nearest_available(city, pickup, DRIVER_OPTIONS)?;
    if nearby.is_empty() {
        return report_unavailable(cli, "no available drivers near the pickup point");
    }

    let ride = engine::shortest_path(city.graph(), pickup, dropoff)?;
    if !ride.is_reachable() {
        return report_unavailable(cli, "no route between pickup and dropoff");
    }

    let schedule = engine::topological_sort(&city::ride_workflow())?;

    trace_time!(start, "ride_request", pickup = pickup, dropoff = dropoff);

    match cli.format {
        OutputFormat::Json => output_json(city, pickup, dropoff, &ride, &schedule, &nearby)?,
        OutputFormat::Human => output_human(cli, city, pickup, dropoff, &ride, &schedule, &nearby),
    }

    Ok(())
}

fn report_unavailable(cli: &Cli, reason: &str) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let payload = json!({ "success": false, "error": reason });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => println!("{}", reason),
    }
    Ok(())
}

fn driver_option_json(city: &CityMap, option: &DriverRoute, ride_km: f64) -> serde_json::Value {
    let driver = &option.driver;
    json!({
        "driver": {
            "id": driver.id,
            "name": &driver.name,
            "car_type": driver.car_type,
            "rating": driver.rating,
            "plate": &driver.plate,
            "current_location": driver.location,
            "location_coords": city.coordinates(driver.location),
        },
        "driver_to_pickup": {
            "path": &option.path,
            "path_coords": city.path_coordinates(&option.path),
            "distance_km": option.distance_km,
            "eta_mins": fare::eta_minutes(option.distance_km),
        },
        "fare": fare::fare_pkr(ride_km, driver.car_type),
        "total_distance_km": option.distance_km + ride_km,
    })
}

fn output_json(
    city: &CityMap,
    pickup: NodeId,
    dropoff: NodeId,
    ride: &PathResult,
    schedule: &[String],
    nearby: &[DriverRoute],
) -> Result<()> {
    let options: Vec<_> = nearby
        .iter()
        .map(|option| driver_option_json(city, option, ride.distance))
        .collect();

    let payload = json!({
        "success": true,
        "ride_details": {
            "pickup": { "node": pickup, "coords": city.coordinates(pickup) },
            "dropoff": { "node": dropoff, "coords": city.coordinates(dropoff) },
            "ride_path": {
                "path": &ride.path,
                "path_coords": city.path_coordinates(&ride.path),
                "distance_km": ride.distance,
            },
            "workflow": schedule,
        },
        "options": options,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn output_human(
    cli: &Cli,
    city: &CityMap,
    pickup: NodeId,
    dropoff: NodeId,
    ride: &PathResult,
    schedule: &[String],
    nearby: &[DriverRoute],
) {
    println!(
        "ride {} -> {}: {:.2} km, about {} min",
        city.name_of(pickup),
        city.name_of(dropoff),
        ride.distance,
        fare::eta_minutes(ride.distance)
    );

    if !cli.quiet {
        let route: Vec<String> = ride.path.iter().map(|&n| city.name_of(n)).collect();
        println!("via {}", route.join(" -> "));
        println!("workflow: {}", schedule.join(" -> "));
    }

    println!();
    for option in nearby {
        let driver = &option.driver;
        println!(
            "{:<8} {:<8} {:.1}*  pickup in {:>2} min  PKR {}",
            driver.name,
            driver.car_type.to_string(),
            driver.rating,
            fare::eta_minutes(option.distance_km),
            fare::fare_pkr(ride.distance, driver.car_type)
        );
    }
}
