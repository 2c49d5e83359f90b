//! Model bundle: a fitted classifier paired with its class labels.
//!
//! The bundle is built exactly once at startup (trained or loaded from
//! a persisted artifact), then shared read-only for the life of the
//! process. Persistence is a single pretty-printed JSON document.

mod nb;

pub use nb::GaussianNb;

use crate::dataset::{Dataset, FeatureVector};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A fitted classifier plus the ordered class-label names.
///
/// Invariant: `labels.len() == classifier.n_classes()`, so every class
/// index the classifier can emit maps to a label.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    classifier: GaussianNb,
    labels: Vec<String>,
}

/// Outcome of classifying one feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The winning class label
    pub label: String,
    /// Per-label probability mass, `None` when the classifier cannot
    /// estimate probabilities (degraded but still a success)
    pub probabilities: Option<BTreeMap<String, f32>>,
}

/// On-disk form of the bundle.
///
/// Loaded verbatim with no structural validation beyond JSON decode;
/// an incompatible artifact fails at prediction time, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    /// Artifact name
    name: String,
    /// Classifier architecture identifier
    architecture: String,
    /// Crate version that wrote the artifact
    version: String,
    /// Class names, ordered by class index
    labels: Vec<String>,
    /// Fitted classifier state
    classifier: GaussianNb,
}

impl ModelBundle {
    /// Fit a fresh classifier on a labeled dataset and take the label
    /// sequence from the dataset's class names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Training`] when the fit fails or when the
    /// dataset's class names do not cover the classifier's classes.
    pub fn train(dataset: &Dataset) -> Result<Self> {
        let classifier = GaussianNb::fit(&dataset.features, &dataset.targets)?;
        if dataset.target_names.len() != classifier.n_classes() {
            return Err(Error::Training(format!(
                "{} class names for {} classes",
                dataset.target_names.len(),
                classifier.n_classes()
            )));
        }
        Ok(Self { classifier, labels: dataset.target_names.clone() })
    }

    /// Deserialize a bundle from a persisted artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        let artifact: ModelArtifact = serde_json::from_str(&data)
            .map_err(|e| Error::Serialization(format!("artifact decode failed: {e}")))?;
        Ok(Self { classifier: artifact.classifier, labels: artifact.labels })
    }

    /// Serialize the bundle to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let artifact = ModelArtifact {
            name: "iris-classifier".to_string(),
            architecture: "gaussian-nb".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            labels: self.labels.clone(),
            classifier: self.classifier.clone(),
        };
        let json = serde_json::to_string_pretty(&artifact)
            .map_err(|e| Error::Serialization(format!("artifact encode failed: {e}")))?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Classify one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inference`] when the classifier rejects the
    /// sample (feature-count mismatch against a stale artifact, or
    /// non-finite input).
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let class = self.classifier.predict(features)?;
        let label = self
            .labels
            .get(class)
            .ok_or_else(|| {
                Error::Inference(format!("class index {class} has no label"))
            })?
            .clone();

        let probabilities = match self.classifier.predict_proba(features) {
            Ok(probs) => Some(
                self.labels.iter().cloned().zip(probs).collect::<BTreeMap<_, _>>(),
            ),
            // The winning class is already decided; missing probability
            // support degrades the response rather than failing it.
            Err(_) => None,
        };

        Ok(Prediction { label, probabilities })
    }

    /// Ordered class labels
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
