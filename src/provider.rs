//! Model provider: the load-or-train-and-persist policy.
//!
//! Runs exactly once at process start. An existing artifact wins; a
//! missing one triggers a fresh fit on the embedded reference dataset,
//! persisted best-effort for the next cold start.

use crate::dataset;
use crate::model::ModelBundle;
use crate::Result;
use std::path::Path;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "iris_model.json";

/// Resolve the process-wide model bundle.
///
/// If `path` exists it is deserialized verbatim. Otherwise a new
/// classifier is fitted on the reference dataset and written to `path`;
/// a failed write is logged and ignored, since a servable model already
/// exists in memory.
///
/// # Errors
///
/// Fails when the artifact exists but cannot be decoded, or when
/// training itself fails. Either way startup must abort; no partial
/// bundle is ever returned.
pub fn resolve_bundle(path: impl AsRef<Path>) -> Result<ModelBundle> {
    let path = path.as_ref();

    if path.exists() {
        log::info!("loading model artifact from {}", path.display());
        return ModelBundle::load(path);
    }

    log::info!("no artifact at {}; training on the reference dataset", path.display());
    let bundle = ModelBundle::train(&dataset::reference())?;

    if let Err(e) = bundle.save(path) {
        log::warn!("could not persist model artifact to {}: {e}", path.display());
    } else {
        log::info!("persisted model artifact to {}", path.display());
    }

    Ok(bundle)
}
