//! `beacond tos` and the consent gate that guards every other command.

use std::io;

use anyhow::Result;
use beacond_core::{ConsentGate, ConsentState, NodeConfig};
use serde::Serialize;
use tracing::debug;

use crate::cli::args::{OutputFormat, TosStatusArgs};
use crate::exit_codes::{self, SUCCESS};

/// Run the consent gate against the process stdin. The prompt goes to stderr so
/// stdout stays parseable.
pub fn verify_tos(config: &NodeConfig) -> i32 {
    let gate = ConsentGate::from_config(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();

    let outcome = gate.verify_or_prompt(&mut input, &mut output);
    debug!(state = ?ConsentState::of(&outcome), "consent gate resolved");

    match outcome {
        Ok(via) => {
            debug!(?via, "continuing");
            SUCCESS
        }
        Err(e) => {
            eprintln!("fatal: {e}");
            exit_codes::for_tos_error(&e)
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusReport {
    home: String,
    marker: String,
    marker_present: bool,
    state: ConsentState,
}

pub fn cmd_status(args: TosStatusArgs, config: &NodeConfig) -> Result<i32> {
    let gate = ConsentGate::from_config(config);
    let report = StatusReport {
        home: config.home.display().to_string(),
        marker: gate.marker().path().display().to_string(),
        marker_present: gate.marker().exists()?,
        state: gate.state()?,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("home:     {}", report.home);
            println!("marker:   {}", report.marker);
            println!(
                "accepted: {}",
                match (report.state, report.marker_present) {
                    (ConsentState::Accepted, true) => "yes",
                    (ConsentState::Accepted, false) => "yes (--accept-tos, not yet recorded)",
                    _ => "no",
                }
            );
        }
    }

    Ok(SUCCESS)
}
