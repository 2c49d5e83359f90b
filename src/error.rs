//! Crate-wide error taxonomy.
//!
//! One enum covers the three failure domains the service has: startup
//! (artifact IO, training), request validation, and inference.

use thiserror::Error;

/// Errors produced anywhere in the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Training error: {0}")]
    Training(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Bind error: {0}")]
    Bind(String),
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_domain() {
        let e = Error::Validation("expected 4 features, got 3".to_string());
        assert_eq!(e.to_string(), "Validation error: expected 4 features, got 3");
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/model.json")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }
}
