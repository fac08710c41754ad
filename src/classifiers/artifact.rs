use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classifiers::bayes::GaussianNaiveBayes;
use crate::classifiers::classifier::{InvalidModel, ProbabilisticClassifier};
use crate::classifiers::linear::LogisticRegression;

/// On-disk form of a trained model, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    GaussianNaiveBayes {
        priors: Vec<f64>,
        means: Vec<Vec<f64>>,
        variances: Vec<Vec<f64>>,
    },
}

impl ModelArtifact {
    pub fn into_classifier(self) -> Result<Arc<dyn ProbabilisticClassifier>, InvalidModel> {
        match self {
            ModelArtifact::LogisticRegression {
                coefficients,
                intercept,
            } => {
                if coefficients.is_empty() {
                    return Err(InvalidModel("logistic regression has no coefficients".into()));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(InvalidModel("non-finite coefficient".into()));
                }
                Ok(Arc::new(LogisticRegression::new(coefficients, intercept)))
            }
            ModelArtifact::GaussianNaiveBayes {
                priors,
                means,
                variances,
            } => Ok(Arc::new(GaussianNaiveBayes::new(priors, means, variances)?)),
        }
    }
}
