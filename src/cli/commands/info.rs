//! The info command: print metadata of a persisted artifact.

use crate::cli::logging::{emit, LogLevel};
use crate::cli::InfoArgs;
use crate::{Error, Result};
use std::fs;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<()> {
    let data = fs::read_to_string(&args.artifact)?;
    let artifact: serde_json::Value = serde_json::from_str(&data)
        .map_err(|e| Error::Serialization(format!("artifact decode failed: {e}")))?;

    let field = |key: &str| artifact[key].as_str().unwrap_or("<unknown>").to_string();
    emit(level, LogLevel::Normal, &format!("Artifact:     {}", args.artifact.display()));
    emit(level, LogLevel::Normal, &format!("Name:         {}", field("name")));
    emit(level, LogLevel::Normal, &format!("Architecture: {}", field("architecture")));
    emit(level, LogLevel::Normal, &format!("Version:      {}", field("version")));

    if let Some(labels) = artifact["labels"].as_array() {
        let names: Vec<&str> = labels.iter().filter_map(|l| l.as_str()).collect();
        emit(level, LogLevel::Normal, &format!("Classes:      {}", names.join(", ")));
    }

    Ok(())
}
