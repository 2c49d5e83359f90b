//! Command-line interface.
//!
//! # Usage
//!
//! ```bash
//! predecir serve
//! predecir serve --addr 0.0.0.0:8080 --model /var/lib/predecir/model.json
//! predecir train --output model.json --force
//! predecir info model.json
//! ```

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use crate::provider::DEFAULT_ARTIFACT_PATH;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Predecir: iris classifier prediction service
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "predecir")]
#[command(version)]
#[command(about = "Train-or-load an iris classifier and serve predictions over HTTP")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve the model bundle and serve predictions
    Serve(ServeArgs),

    /// Fit a classifier on the reference dataset and persist it
    Train(TrainArgs),

    /// Display metadata of a persisted model artifact
    Info(InfoArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,

    /// Path to the model artifact (created on first cold start)
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    pub model: PathBuf,

    /// Disable cross-origin request support
    #[arg(long)]
    pub no_cors: bool,
}

/// Arguments for the train command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct TrainArgs {
    /// Where to write the fitted artifact
    #[arg(short, long, default_value = DEFAULT_ARTIFACT_PATH)]
    pub output: PathBuf,

    /// Overwrite an existing artifact
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to a persisted model artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact: PathBuf,
}

/// Parse CLI arguments from an explicit iterator (testable entry point)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = parse_args(["predecir", "serve"]).unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.addr.port(), 8000);
                assert_eq!(args.model, PathBuf::from(DEFAULT_ARTIFACT_PATH));
                assert!(!args.no_cors);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = parse_args([
            "predecir",
            "serve",
            "--addr",
            "0.0.0.0:9001",
            "--model",
            "custom.json",
            "--no-cors",
        ])
        .unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.addr.port(), 9001);
                assert_eq!(args.model, PathBuf::from("custom.json"));
                assert!(args.no_cors);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_train_with_force() {
        let cli = parse_args(["predecir", "train", "--output", "out.json", "--force"]).unwrap();
        match cli.command {
            Command::Train(args) => {
                assert_eq!(args.output, PathBuf::from("out.json"));
                assert!(args.force);
            }
            _ => panic!("Expected Train command"),
        }
    }

    #[test]
    fn test_parse_info() {
        let cli = parse_args(["predecir", "info", "model.json"]).unwrap();
        match cli.command {
            Command::Info(args) => assert_eq!(args.artifact, PathBuf::from("model.json")),
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = parse_args(["predecir", "serve", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_invalid_addr_is_an_error() {
        assert!(parse_args(["predecir", "serve", "--addr", "not-an-addr"]).is_err());
    }

    #[test]
    fn test_parse_missing_subcommand_is_an_error() {
        assert!(parse_args(["predecir"]).is_err());
    }
}
