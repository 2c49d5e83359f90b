//! The train command: fit on the reference dataset and persist.

use crate::cli::logging::{emit, LogLevel};
use crate::cli::TrainArgs;
use crate::dataset;
use crate::model::ModelBundle;
use crate::{Error, Result};

pub fn run_train(args: TrainArgs, level: LogLevel) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(Error::Validation(format!(
            "{} already exists; pass --force to overwrite",
            args.output.display()
        )));
    }

    let ds = dataset::reference();
    emit(level, LogLevel::Verbose, &format!("Fitting on {} reference samples", ds.len()));

    let bundle = ModelBundle::train(&ds)?;
    bundle.save(&args.output)?;

    emit(
        level,
        LogLevel::Normal,
        &format!("Wrote {} ({} classes)", args.output.display(), bundle.labels().len()),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_train_writes_artifact() {
        let dir = tempfile::tempdir().expect("operation should succeed");
        let output = dir.path().join("model.json");

        let args = TrainArgs { output: output.clone(), force: false };
        run_train(args, LogLevel::Quiet).expect("operation should succeed");
        assert!(output.exists());
    }

    #[test]
    fn test_train_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("operation should succeed");
        let output = dir.path().join("model.json");
        std::fs::write(&output, "{}").expect("operation should succeed");

        let args = TrainArgs { output: output.clone(), force: false };
        assert!(matches!(run_train(args, LogLevel::Quiet), Err(Error::Validation(_))));

        let args = TrainArgs { output, force: true };
        run_train(args, LogLevel::Quiet).expect("operation should succeed");
    }

    #[test]
    fn test_train_unwritable_output_is_an_error() {
        let args = TrainArgs { output: PathBuf::from("/nonexistent-dir/model.json"), force: false };
        assert!(matches!(run_train(args, LogLevel::Quiet), Err(Error::Io(_))));
    }
}
