//! City model: road map, driver fleet, fares
//!
//! Application glue around the graph engine. The map owns the
//! intersections and roads and hands the engine a plain weighted graph;
//! coordinates, names, drivers, and pricing stay on this side of that
//! boundary.

pub mod config;
pub mod drivers;
pub mod fare;

use std::collections::BTreeMap;

use rickshaw_core::error::{Result, RickshawError};
use rickshaw_core::graph::{Graph, NodeId};
use rickshaw_core::wire::DependencyMap;

use config::MapConfig;

/// A named, geolocated node of the road graph.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Intersection {
    pub id: NodeId,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// The city as a weighted road graph plus intersection metadata.
#[derive(Debug, Clone)]
pub struct CityMap {
    graph: Graph,
    intersections: BTreeMap<NodeId, Intersection>,
}

/// Built-in layout: a 20-intersection grid over Lahore.
/// Positions are (longitude, latitude) around the city center.
const BUILTIN_INTERSECTIONS: &[(NodeId, &str, f64, f64)] = &[
    (0, "Anarkali", 74.3436, 31.5497),
    (1, "Model Town", 74.3525, 31.5600),
    (2, "Johar Town", 74.3620, 31.5690),
    (3, "Defence Phase 5", 74.3715, 31.5790),
    (4, "Ichhra", 74.3330, 31.5490),
    (5, "Gulberg", 74.3225, 31.5595),
    (6, "Faisal Town", 74.3120, 31.5695),
    (7, "Wapda Town", 74.3025, 31.5795),
    (8, "Multan Road", 74.3530, 31.5390),
    (9, "Raiwind Road", 74.3630, 31.5290),
    (10, "Barkat Market", 74.3735, 31.5195),
    (11, "Samanabad", 74.3130, 31.5390),
    (12, "Allama Iqbal Town", 74.2839, 31.5111),
    (13, "Gulshan-e-Ravi", 74.3135, 31.5195),
    (14, "Liberty Market", 74.3435, 31.5595),
    (15, "Ferozepur Road", 74.3435, 31.5395),
    (16, "DHA Phase 1", 74.3535, 31.5495),
    (17, "Shadman", 74.3335, 31.5495),
    (18, "DHA Phase 6", 74.3735, 31.5495),
    (19, "Ravi Road", 74.3135, 31.5495),
];

/// Built-in roads: main grid, cross connections, extra connectivity.
const BUILTIN_ROADS: &[(NodeId, NodeId)] = &[
    (0, 1),
    (1, 2),
    (2, 3),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (0, 8),
    (8, 9),
    (9, 10),
    (4, 11),
    (11, 12),
    (12, 13),
    (0, 14),
    (0, 15),
    (0, 16),
    (0, 17),
    (1, 14),
    (1, 16),
    (4, 17),
    (8, 15),
    (16, 18),
    (17, 19),
    (1, 5),
    (8, 11),
    (14, 5),
    (15, 11),
];

impl CityMap {
    /// The built-in Lahore layout. Road weights are haversine
    /// distances in kilometers.
    pub fn builtin() -> Self {
        let intersections: BTreeMap<NodeId, Intersection> = BUILTIN_INTERSECTIONS
            .iter()
            .map(|&(id, name, lon, lat)| {
                (
                    id,
                    Intersection {
                        id,
                        name: name.to_string(),
                        lon,
                        lat,
                    },
                )
            })
            .collect();

        let mut graph = Graph::new();
        for &(u, v) in BUILTIN_ROADS {
            let km = haversine_km(
                (intersections[&u].lon, intersections[&u].lat),
                (intersections[&v].lon, intersections[&v].lat),
            );
            graph.add_edge(u, v, km);
        }

        Self {
            graph,
            intersections,
        }
    }

    /// Build a map from a loaded map file. Roads must reference
    /// declared intersections; weights default to the haversine
    /// distance unless the road carries an explicit `km` override.
    pub fn from_config(config: &MapConfig) -> Result<Self> {
        let mut intersections = BTreeMap::new();
        for declared in &config.intersections {
            let previous = intersections.insert(
                declared.id,
                Intersection {
                    id: declared.id,
                    name: declared.name.clone(),
                    lon: declared.lon,
                    lat: declared.lat,
                },
            );
            if previous.is_some() {
                return Err(RickshawError::Other(format!(
                    "duplicate intersection id {} in map",
                    declared.id
                )));
            }
        }

        let mut graph = Graph::new();
        for road in &config.roads {
            let (u, v) = (road.u, road.v);
            let (Some(a), Some(b)) = (intersections.get(&u), intersections.get(&v)) else {
                return Err(RickshawError::Other(format!(
                    "road {} - {} references an undeclared intersection",
                    u, v
                )));
            };
            let km = road
                .km
                .unwrap_or_else(|| haversine_km((a.lon, a.lat), (b.lon, b.lat)));
            graph.add_edge(u, v, km);
        }

        Ok(Self {
            graph,
            intersections,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.intersections.contains_key(&id)
    }

    pub fn intersection(&self, id: NodeId) -> Option<&Intersection> {
        self.intersections.get(&id)
    }

    /// All intersections in ascending id order.
    pub fn intersections(&self) -> impl Iterator<Item = &Intersection> {
        self.intersections.values()
    }

    /// Display name for an intersection, falling back to the bare id.
    pub fn name_of(&self, id: NodeId) -> String {
        self.intersections
            .get(&id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn coordinates(&self, id: NodeId) -> Option<(f64, f64)> {
        self.intersections.get(&id).map(|i| (i.lon, i.lat))
    }

    /// Coordinates along a route, for rendering.
    pub fn path_coordinates(&self, path: &[NodeId]) -> Vec<(f64, f64)> {
        path.iter()
            .filter_map(|&id| self.coordinates(id))
            .collect()
    }
}

/// Haversine distance between two (lon, lat) points in kilometers.
fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let (lon1, lat1) = a;
    let (lon2, lat2) = b;
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// The fixed ride workflow: each stage and its prerequisites.
pub fn ride_workflow() -> DependencyMap {
    let mut workflow = DependencyMap::new();
    workflow.insert("Verify".to_string(), vec![]);
    workflow.insert("Assign".to_string(), vec!["Verify".to_string()]);
    workflow.insert("Route".to_string(), vec!["Assign".to_string()]);
    workflow.insert("Fare".to_string(), vec!["Route".to_string()]);
    workflow.insert("Start".to_string(), vec!["Fare".to_string()]);
    workflow.insert("End".to_string(), vec!["Start".to_string()]);
    workflow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_map_shape() {
        let city = CityMap::builtin();
        assert_eq!(city.graph().node_count(), 20);
        assert!(city.contains(0));
        assert!(!city.contains(99));
        assert_eq!(city.name_of(5), "Gulberg");
    }

    #[test]
    fn test_builtin_weights_are_positive() {
        let city = CityMap::builtin();
        for intersection in city.intersections() {
            for &(_, km) in city.graph().neighbors(intersection.id) {
                assert!(km > 0.0);
            }
        }
    }

    #[test]
    fn test_haversine_known_distance() {
        // Roughly one degree of latitude at the equator
        let km = haversine_km((0.0, 0.0), (0.0, 1.0));
        assert!((km - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_path_coordinates_skip_unknown() {
        let city = CityMap::builtin();
        let coords = city.path_coordinates(&[0, 99, 1]);
        assert_eq!(coords.len(), 2);
    }

    #[test]
    fn test_ride_workflow_is_a_chain() {
        let workflow = ride_workflow();
        assert_eq!(workflow.len(), 6);
        assert_eq!(workflow["End"], vec!["Start".to_string()]);
        assert!(workflow["Verify"].is_empty());
    }
}
