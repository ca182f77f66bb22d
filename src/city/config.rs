//! City map file loading
//!
//! A map file is TOML:
//!
//! ```toml
//! [[intersections]]
//! id = 0
//! name = "Depot"
//! lon = 74.34
//! lat = 31.55
//!
//! [[roads]]
//! u = 0
//! v = 1
//! # km = 2.5   # optional override; defaults to haversine distance
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use rickshaw_core::error::{Result, RickshawError};
use rickshaw_core::graph::NodeId;

/// Parsed map file contents
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub intersections: Vec<IntersectionSpec>,

    #[serde(default)]
    pub roads: Vec<RoadSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntersectionSpec {
    pub id: NodeId,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadSpec {
    pub u: NodeId,
    pub v: NodeId,
    /// Explicit road length, overriding the coordinate-derived weight
    #[serde(default)]
    pub km: Option<f64>,
}

/// Load and parse a map file.
pub fn load(path: &Path) -> Result<MapConfig> {
    if !path.exists() {
        return Err(RickshawError::MapNotFound {
            path: path.to_path_buf(),
        });
    }

    let content =
        fs::read_to_string(path).map_err(|e| RickshawError::invalid_map(path, e))?;

    toml::from_str(&content).map_err(|e| RickshawError::invalid_map(path, e))
}
