use crate::editor::Outcome;

use std::process::ExitCode;

use serde::Serialize;

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Map a mutation outcome to process output: the refreshed list on
/// success (the page the operator would see after the original's reload),
/// the server's message on rejection.
pub fn finish<T: Serialize>(outcome: Outcome, refreshed: &T, pretty: bool) -> ExitCode {
    match outcome {
        Outcome::Saved => print_json(refreshed, pretty),
        Outcome::Rejected(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
        Outcome::Failed => ExitCode::FAILURE,
    }
}
