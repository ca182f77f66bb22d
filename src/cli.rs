//! CLI argument parsing for rickshaw
//!
//! Uses clap for argument parsing.
//! Supports global flags: --map, --format, --quiet, --verbose

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use rickshaw_core::format::OutputFormat;
use rickshaw_core::graph::NodeId;

/// Rickshaw - city-graph ride-hailing CLI
#[derive(Parser, Debug)]
#[command(name = "rickshaw")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// City map file (TOML) replacing the built-in layout
    #[arg(long, global = true, env = "RICKSHAW_MAP")]
    pub map: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the city map: intersections and roads
    Map,

    /// Find the shortest route between two intersections
    Route {
        /// Pickup intersection id
        from: NodeId,

        /// Dropoff intersection id
        to: NodeId,
    },

    /// Compute a minimum spanning tree of the road network
    Mst {
        /// Spanning-tree strategy
        #[arg(value_enum, default_value = "prim")]
        algorithm: MstAlgorithm,
    },

    /// Show the dependency-ordered ride workflow
    Workflow,

    /// List the driver fleet
    Drivers,

    /// Request a ride: nearby drivers, route, fares
    Ride {
        /// Pickup intersection id
        pickup: NodeId,

        /// Dropoff intersection id
        dropoff: NodeId,
    },

    /// Run an algorithm over a serialized graph read from stdin
    Solve {
        /// Algorithm to run
        #[arg(value_enum)]
        algorithm: SolveAlgorithm,

        /// Start vertex index (dijkstra only)
        start: Option<usize>,

        /// End vertex index (dijkstra only)
        end: Option<usize>,
    },
}

/// Spanning-tree strategies exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

/// Engine algorithms exposed by the solve subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolveAlgorithm {
    Dijkstra,
    Prim,
    Kruskal,
    Topo,
}

impl From<MstAlgorithm> for rickshaw_core::engine::Algorithm {
    fn from(algorithm: MstAlgorithm) -> Self {
        match algorithm {
            MstAlgorithm::Prim => Self::Prim,
            MstAlgorithm::Kruskal => Self::Kruskal,
        }
    }
}

impl From<SolveAlgorithm> for rickshaw_core::engine::Algorithm {
    fn from(algorithm: SolveAlgorithm) -> Self {
        match algorithm {
            SolveAlgorithm::Dijkstra => Self::Dijkstra,
            SolveAlgorithm::Prim => Self::Prim,
            SolveAlgorithm::Kruskal => Self::Kruskal,
            SolveAlgorithm::Topo => Self::Topo,
        }
    }
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["rickshaw", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["rickshaw", "route", "0", "5"]).unwrap();
        match cli.command {
            Some(Commands::Route { from, to }) => {
                assert_eq!(from, 0);
                assert_eq!(to, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_mst_defaults_to_prim() {
        let cli = Cli::try_parse_from(["rickshaw", "mst"]).unwrap();
        match cli.command {
            Some(Commands::Mst { algorithm }) => assert_eq!(algorithm, MstAlgorithm::Prim),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_format_flag() {
        let cli = Cli::try_parse_from(["rickshaw", "--format", "json", "map"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        assert!(Cli::try_parse_from(["rickshaw", "--format", "records", "map"]).is_err());
    }
}
