use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rickshaw() -> Command {
    cargo_bin_cmd!("rickshaw")
}

/// Write a small two-road map file and return its path.
#[allow(dead_code)]
pub fn write_sample_map(dir: &Path) -> PathBuf {
    let path = dir.join("city.toml");
    fs::write(
        &path,
        r#"
[[intersections]]
id = 100
name = "Depot"
lon = 74.30
lat = 31.50

[[intersections]]
id = 101
name = "Bazaar"
lon = 74.31
lat = 31.51

[[intersections]]
id = 102
name = "Station"
lon = 74.32
lat = 31.52

[[roads]]
u = 100
v = 101
km = 2.0

[[roads]]
u = 101
v = 102
km = 3.0
"#,
    )
    .expect("write map file");
    path
}
