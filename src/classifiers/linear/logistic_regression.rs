use serde::{Deserialize, Serialize};

use crate::classifiers::classifier::{ProbabilisticClassifier, check_input, check_probability};
use crate::core::FeatureVector;
use crate::inference::InferenceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

#[inline]
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl ProbabilisticClassifier for LogisticRegression {
    fn probability_of_positive_class(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, InferenceError> {
        if self.coefficients.is_empty() {
            return Err(InferenceError::Unfitted("logistic regression has no coefficients"));
        }
        check_input(features, self.coefficients.len())?;
        check_probability(sigmoid(self.decision_function(features)))
    }

    fn number_of_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
