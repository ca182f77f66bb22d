//! Command dispatch logic for rickshaw
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::load_city;
use rickshaw_core::error::{Result, RickshawError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(RickshawError::usage(
            "no command given (try `rickshaw --help`)",
        )),

        Some(Commands::Map) => commands::map::execute(cli, &load_city(cli)?),

        Some(Commands::Route { from, to }) => {
            commands::route::execute(cli, &load_city(cli)?, *from, *to, start)
        }

        Some(Commands::Mst { algorithm }) => {
            commands::mst::execute(cli, &load_city(cli)?, *algorithm)
        }

        Some(Commands::Workflow) => commands::workflow::execute(cli),

        Some(Commands::Drivers) => commands::drivers::execute(cli, &load_city(cli)?),

        Some(Commands::Ride { pickup, dropoff }) => {
            commands::ride::execute(cli, &load_city(cli)?, *pickup, *dropoff, start)
        }

        Some(Commands::Solve {
            algorithm,
            start: start_idx,
            end,
        }) => commands::solve::execute(*algorithm, *start_idx, *end),
    }
}
