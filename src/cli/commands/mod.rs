//! CLI command implementations

mod info;
mod serve;
mod train;

use crate::cli::{Cli, Command, LogLevel};
use crate::Result;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Serve(args) => serve::run_serve(args, log_level),
        Command::Train(args) => train::run_train(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}
