//! Solve command: run the engine over a serialized graph from stdin
//!
//! This is the process-boundary form of the engine: the request body
//! arrives on stdin in wire form and the response leaves on stdout in
//! wire form, so non-Rust callers can drive the algorithms over a pipe.

use std::io::{self, Read};

use rickshaw_core::engine::{self, SolveRequest};
use rickshaw_core::error::Result;

use crate::cli::SolveAlgorithm;

/// Execute the solve command
pub fn execute(algorithm: SolveAlgorithm, start: Option<usize>, end: Option<usize>) -> Result<()> {
    let mut body = String::new();
    io::stdin().read_to_string(&mut body)?;

    let request = SolveRequest {
        algorithm: algorithm.into(),
        body,
        start,
        end,
    };

    let outcome = engine::solve(&request)?;
    print!("{}", outcome.to_wire());

    Ok(())
}
