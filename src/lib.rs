//! Predecir: minimal classifier-serving demo
//!
//! Trains (or loads) a Gaussian naive Bayes classifier over the embedded
//! iris reference dataset, then serves a single prediction endpoint plus
//! a static HTML form over HTTP.
//!
//! The model bundle is resolved exactly once at startup and shared
//! read-only across request handlers; nothing mutates it afterwards.
//!
//! # Example
//!
//! ```no_run
//! use predecir::provider;
//! use predecir::server::{PredictServer, ServerConfig};
//!
//! # fn main() -> predecir::Result<()> {
//! let bundle = provider::resolve_bundle("iris_model.json")?;
//! let server = PredictServer::new(ServerConfig::default(), bundle);
//! tokio::runtime::Runtime::new()?.block_on(server.run())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod dataset;
mod error;
pub mod model;
pub mod provider;
pub mod server;

pub use error::{Error, Result};
