//! User-facing CLI output levels.
//!
//! Server-side events go through the `log` crate; this controls only
//! what the CLI prints to stdout.

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

/// Print a message if the current level permits it
pub fn emit(level: LogLevel, required: LogLevel, msg: &str) {
    if should_emit(level, required) {
        println!("{msg}");
    }
}

fn should_emit(level: LogLevel, required: LogLevel) -> bool {
    level != LogLevel::Quiet && (level == required || required == LogLevel::Normal)
}
