//! Drivers command: list the fleet

use serde_json::json;

use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;

use crate::city::{drivers, CityMap};
use crate::cli::Cli;

/// Execute the drivers command
pub fn execute(cli: &Cli, city: &CityMap) -> Result<()> {
    let fleet = drivers::fleet();

    match cli.format {
        OutputFormat::Json => {
            let driver_objects: Vec<_> = fleet
                .iter()
                .map(|d| {
                    json!({
                        "id": d.id,
                        "name": &d.name,
                        "car_type": d.car_type,
                        "rating": d.rating,
                        "plate": &d.plate,
                        "location": d.location,
                        "location_coords": city.coordinates(d.location),
                        "available": d.available,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!(driver_objects))?);
        }
        OutputFormat::Human => {
            for driver in &fleet {
                println!(
                    "{:>2}  {:<8} {:<8} {:.1}*  {}  at {}",
                    driver.id,
                    driver.name,
                    driver.car_type.to_string(),
                    driver.rating,
                    driver.plate,
                    city.name_of(driver.location)
                );
            }
        }
    }

    Ok(())
}
