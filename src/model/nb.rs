//! Gaussian naive Bayes classifier.
//!
//! Closed-form fit (per-class feature means and variances plus class
//! priors), so training is deterministic without any random seed. The
//! fitted state is a plain serde struct, which is what gets persisted
//! inside the model artifact.

use crate::dataset::FeatureVector;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fitted Gaussian naive Bayes model.
///
/// Constructed only through [`GaussianNb::fit`], so every value of this
/// type is usable for prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianNb {
    /// Class prior probabilities, indexed by class
    priors: Vec<f32>,
    /// Per-class feature means: `means[class][feature]`
    means: Vec<Vec<f32>>,
    /// Per-class feature variances, smoothed: `variances[class][feature]`
    variances: Vec<Vec<f32>>,
    /// Smoothing added to every variance at fit time
    var_smoothing: f32,
}

/// Smoothing keeps near-constant features from producing zero variances.
const DEFAULT_VAR_SMOOTHING: f32 = 1e-9;

impl GaussianNb {
    /// Fit a classifier on labeled feature rows.
    ///
    /// Class indices in `y` must be dense: every value in
    /// `0..n_classes` must occur at least once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Training`] on empty data, row/label count
    /// mismatch, or fewer than two classes.
    pub fn fit(x: &[FeatureVector], y: &[usize]) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::Training("cannot fit on empty data".to_string()));
        }
        if x.len() != y.len() {
            return Err(Error::Training(format!(
                "feature rows ({}) and labels ({}) must match",
                x.len(),
                y.len()
            )));
        }

        let n_classes = y.iter().max().copied().unwrap_or(0) + 1;
        if n_classes < 2 {
            return Err(Error::Training("need at least 2 classes".to_string()));
        }
        let n_features = x[0].len();
        let n_samples = x.len() as f32;

        let mut priors = vec![0.0f32; n_classes];
        let mut means = vec![vec![0.0f32; n_features]; n_classes];
        let mut variances = vec![vec![0.0f32; n_features]; n_classes];
        let mut counts = vec![0usize; n_classes];

        for (row, &class) in x.iter().zip(y) {
            counts[class] += 1;
            for (feature, &value) in row.iter().enumerate() {
                means[class][feature] += value;
            }
        }
        for class in 0..n_classes {
            if counts[class] == 0 {
                return Err(Error::Training(format!("class {class} has no samples")));
            }
            let n = counts[class] as f32;
            priors[class] = n / n_samples;
            for mean in &mut means[class] {
                *mean /= n;
            }
        }
        for (row, &class) in x.iter().zip(y) {
            for (feature, &value) in row.iter().enumerate() {
                let diff = value - means[class][feature];
                variances[class][feature] += diff * diff;
            }
        }
        for class in 0..n_classes {
            let n = counts[class] as f32;
            for variance in &mut variances[class] {
                *variance = *variance / n + DEFAULT_VAR_SMOOTHING;
            }
        }

        Ok(Self { priors, means, variances, var_smoothing: DEFAULT_VAR_SMOOTHING })
    }

    /// Number of classes this model distinguishes
    pub fn n_classes(&self) -> usize {
        self.priors.len()
    }

    /// Number of features each input must carry
    pub fn n_features(&self) -> usize {
        self.means.first().map_or(0, Vec::len)
    }

    /// Posterior probability per class for one sample.
    ///
    /// Log-space Bayes with the log-sum-exp trick; the returned vector
    /// has one entry per class, each in [0,1], summing to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inference`] on a feature-count mismatch or when
    /// the posterior collapses (non-finite input such as NaN).
    pub fn predict_proba(&self, sample: &[f32]) -> Result<Vec<f32>> {
        if sample.len() != self.n_features() {
            return Err(Error::Inference(format!(
                "expected {} features, got {}",
                self.n_features(),
                sample.len()
            )));
        }

        let mut log_probs = Vec::with_capacity(self.n_classes());
        for class in 0..self.n_classes() {
            let mut log_prob = self.priors[class].ln();
            for (feature, &value) in sample.iter().enumerate() {
                let mean = self.means[class][feature];
                let variance = self.variances[class][feature];
                let diff = value - mean;
                // log N(x; mu, sigma^2) = -0.5*ln(2*pi*sigma^2) - (x-mu)^2/(2*sigma^2)
                log_prob += -0.5 * (2.0 * std::f32::consts::PI * variance).ln()
                    - (diff * diff) / (2.0 * variance);
            }
            log_probs.push(log_prob);
        }

        let max = log_probs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if !max.is_finite() {
            return Err(Error::Inference(
                "posterior is not finite; input contains NaN or infinity".to_string(),
            ));
        }
        let exp: Vec<f32> = log_probs.iter().map(|&lp| (lp - max).exp()).collect();
        let sum: f32 = exp.iter().sum();
        Ok(exp.iter().map(|p| p / sum).collect())
    }

    /// Class index with the highest posterior for one sample.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GaussianNb::predict_proba`].
    pub fn predict(&self, sample: &[f32]) -> Result<usize> {
        let probs = self.predict_proba(sample)?;
        probs
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(class, _)| class)
            .ok_or_else(|| Error::Inference("no classes in fitted model".to_string()))
    }

    /// Smoothing value the model was fitted with
    pub fn var_smoothing(&self) -> f32 {
        self.var_smoothing
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::dataset;
    use proptest::prelude::*;

    fn iris_model() -> GaussianNb {
        let ds = dataset::reference();
        GaussianNb::fit(&ds.features, &ds.targets).expect("iris data is well-formed")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_predicted_class_in_range(
            a in 0.0f32..10.0, b in 0.0f32..10.0,
            c in 0.0f32..10.0, d in 0.0f32..10.0,
        ) {
            let model = iris_model();
            let class = model.predict(&[a, b, c, d]).unwrap();
            prop_assert!(class < model.n_classes());
        }

        #[test]
        fn prop_proba_is_a_distribution(
            a in 0.0f32..10.0, b in 0.0f32..10.0,
            c in 0.0f32..10.0, d in 0.0f32..10.0,
        ) {
            let model = iris_model();
            let probs = model.predict_proba(&[a, b, c, d]).unwrap();
            prop_assert_eq!(probs.len(), model.n_classes());
            let sum: f32 = probs.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-6);
            prop_assert!(probs.iter().all(|&p| (0.0..=1.0).contains(&p)));
        }
    }
}
