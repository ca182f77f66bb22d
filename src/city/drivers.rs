//! Driver fleet bookkeeping
//!
//! The roster is fixed and fully deterministic: routing results, fares,
//! and driver ordering must be reproducible run to run.

use std::fmt;

use serde::Serialize;

use rickshaw_core::engine;
use rickshaw_core::error::Result;
use rickshaw_core::graph::NodeId;

use super::CityMap;

/// Vehicle class, which scales the fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CarType {
    Standard,
    Premium,
    Eco,
}

impl CarType {
    pub fn rate_multiplier(self) -> f64 {
        match self {
            CarType::Standard => 1.0,
            CarType::Premium => 1.4,
            CarType::Eco => 0.9,
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarType::Standard => write!(f, "Standard"),
            CarType::Premium => write!(f, "Premium"),
            CarType::Eco => write!(f, "Eco"),
        }
    }
}

/// A driver waiting at an intersection.
#[derive(Debug, Clone, Serialize)]
pub struct Driver {
    pub id: u32,
    pub name: String,
    pub car_type: CarType,
    pub location: NodeId,
    pub rating: f64,
    pub plate: String,
    pub available: bool,
}

/// A driver plus the route that brings them to the pickup point.
#[derive(Debug, Clone, Serialize)]
pub struct DriverRoute {
    pub driver: Driver,
    pub path: Vec<NodeId>,
    pub distance_km: f64,
}

const ROSTER: &[(&str, CarType, NodeId, f64, u16)] = &[
    ("Ali", CarType::Standard, 0, 4.9, 482),
    ("Bilal", CarType::Premium, 1, 4.7, 119),
    ("Usman", CarType::Eco, 4, 5.0, 767),
    ("Fahad", CarType::Standard, 8, 4.6, 254),
    ("Hamza", CarType::Premium, 14, 4.8, 331),
    ("Rizwan", CarType::Standard, 16, 4.5, 905),
    ("Omer", CarType::Eco, 17, 4.9, 648),
    ("Zain", CarType::Standard, 5, 4.6, 173),
    ("Ahsan", CarType::Premium, 11, 4.7, 820),
    ("Danish", CarType::Standard, 2, 5.0, 396),
    ("Saad", CarType::Eco, 7, 4.8, 557),
    ("Hassan", CarType::Standard, 12, 4.5, 214),
];

/// The full driver fleet.
pub fn fleet() -> Vec<Driver> {
    ROSTER
        .iter()
        .enumerate()
        .map(|(i, &(name, car_type, location, rating, plate))| Driver {
            id: i as u32 + 1,
            name: name.to_string(),
            car_type,
            location,
            rating,
            plate: format!("LHR-{}", plate),
            available: true,
        })
        .collect()
}

/// Find the nearest available drivers to a pickup point.
///
/// Each driver's approach route is a shortest-path query; drivers with
/// no route to the pickup are dropped. Results are sorted by distance
/// (ties by driver id) and truncated to `limit`.
pub fn nearest_available(city: &CityMap, pickup: NodeId, limit: usize) -> Result<Vec<DriverRoute>> {
    let mut routes = Vec::new();

    for driver in fleet() {
        if !driver.available {
            continue;
        }
        let result = engine::shortest_path(city.graph(), driver.location, pickup)?;
        if result.is_reachable() {
            routes.push(DriverRoute {
                driver,
                path: result.path,
                distance_km: result.distance,
            });
        }
    }

    routes.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.driver.id.cmp(&b.driver.id))
    });
    routes.truncate(limit);

    Ok(routes)
}
