use thiserror::Error;

use crate::core::FeatureVector;
use crate::inference::InferenceError;

/// Parameters that deserialized fine but cannot form a usable model.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("invalid model parameters: {0}")]
pub struct InvalidModel(pub String);

/// A trained binary classifier. Implementations are immutable after load and
/// shared across request handlers.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Probability of the positive (disease) class, in `[0, 1]`.
    fn probability_of_positive_class(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, InferenceError>;

    /// Number of inputs the model was fitted on.
    fn number_of_features(&self) -> usize;

    fn kind(&self) -> &'static str;
}

/// Shared length and finiteness checks run before any model arithmetic.
pub(crate) fn check_input(features: &FeatureVector, expected: usize) -> Result<(), InferenceError> {
    if features.len() != expected {
        return Err(InferenceError::DimensionMismatch {
            expected,
            actual: features.len(),
        });
    }
    if let Some(index) = features.first_non_finite() {
        return Err(InferenceError::NonFiniteInput { index });
    }
    Ok(())
}

/// Rejects NaN and values outside the unit interval.
pub(crate) fn check_probability(p: f64) -> Result<f64, InferenceError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(InferenceError::InvalidProbability(p))
    }
}
