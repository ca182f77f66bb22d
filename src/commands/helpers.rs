//! Shared helpers for command implementations

use rickshaw_core::error::{Result, RickshawError};
use rickshaw_core::graph::NodeId;

use crate::city::{config, CityMap};
use crate::cli::Cli;

/// Resolve the city map for this invocation: the `--map` file when
/// given, otherwise the built-in layout.
pub fn load_city(cli: &Cli) -> Result<CityMap> {
    match &cli.map {
        Some(path) => {
            let map_config = config::load(path)?;
            CityMap::from_config(&map_config)
        }
        None => Ok(CityMap::builtin()),
    }
}

/// Reject intersection ids that are not on the map.
pub fn require_intersection(city: &CityMap, id: NodeId) -> Result<()> {
    if city.contains(id) {
        Ok(())
    } else {
        Err(RickshawError::UnknownIntersection { node: id })
    }
}
