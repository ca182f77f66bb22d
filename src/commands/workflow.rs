//! Workflow command: dependency-ordered ride schedule

use serde_json::json;

use rickshaw_core::engine;
use rickshaw_core::error::Result;
use rickshaw_core::format::OutputFormat;

use crate::city;
use crate::cli::Cli;

/// Execute the workflow command
pub fn execute(cli: &Cli) -> Result<()> {
    let dependencies = city::ride_workflow();
    let schedule = engine::topological_sort(&dependencies)?;

    match cli.format {
        OutputFormat::Json => {
            let payload = json!({
                "workflow": schedule,
                "dependencies": dependencies,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            for (step, stage) in schedule.iter().enumerate() {
                println!("{}. {}", step + 1, stage);
            }
        }
    }

    Ok(())
}
