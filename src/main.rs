//! Predecir CLI
//!
//! Single-command entry point for the prediction service.
//!
//! # Usage
//!
//! ```bash
//! # Resolve the model (train on first run) and serve
//! predecir serve
//!
//! # Serve on a custom address with a custom artifact path
//! predecir serve --addr 0.0.0.0:8080 --model /var/lib/predecir/model.json
//!
//! # Fit and persist without serving
//! predecir train --output model.json
//!
//! # Show artifact metadata
//! predecir info model.json
//! ```

use clap::Parser;
use predecir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
