use crate::classifiers::classifier::{
    InvalidModel, ProbabilisticClassifier, check_input, check_probability,
};
use crate::core::FeatureVector;
use crate::core::estimators::GaussianEstimator;
use crate::inference::InferenceError;

/// Binary Gaussian naive Bayes with parameters fitted elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNaiveBayes {
    class_priors: [f64; 2],
    estimators: [Vec<GaussianEstimator>; 2],
}

impl GaussianNaiveBayes {
    /// `means[c][j]` and `variances[c][j]` describe feature `j` under class `c`.
    pub fn new(
        priors: Vec<f64>,
        means: Vec<Vec<f64>>,
        variances: Vec<Vec<f64>>,
    ) -> Result<Self, InvalidModel> {
        if priors.len() != 2 || means.len() != 2 || variances.len() != 2 {
            return Err(InvalidModel(format!(
                "expected exactly 2 classes, got {} priors, {} mean rows, {} variance rows",
                priors.len(),
                means.len(),
                variances.len()
            )));
        }
        if priors.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(InvalidModel("class priors must be positive".into()));
        }

        let width = means[0].len();
        if width == 0 {
            return Err(InvalidModel("no features".into()));
        }
        for (class, (m, v)) in means.iter().zip(variances.iter()).enumerate() {
            if m.len() != width || v.len() != width {
                return Err(InvalidModel(format!(
                    "class {class} has {} means and {} variances, expected {width}",
                    m.len(),
                    v.len()
                )));
            }
        }

        let build = |c: usize| -> Vec<GaussianEstimator> {
            means[c]
                .iter()
                .zip(variances[c].iter())
                .map(|(&mean, &var)| GaussianEstimator::from_moments(mean, var))
                .collect()
        };

        let total: f64 = priors.iter().sum();
        Ok(Self {
            class_priors: [priors[0] / total, priors[1] / total],
            estimators: [build(0), build(1)],
        })
    }

    fn joint_log_likelihood(&self, class: usize, features: &FeatureVector) -> f64 {
        self.estimators[class]
            .iter()
            .zip(features.iter())
            .map(|(est, x)| est.log_density(x))
            .sum::<f64>()
            + self.class_priors[class].ln()
    }
}

impl ProbabilisticClassifier for GaussianNaiveBayes {
    fn probability_of_positive_class(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, InferenceError> {
        check_input(features, self.number_of_features())?;

        let neg = self.joint_log_likelihood(0, features);
        let pos = self.joint_log_likelihood(1, features);
        // log-sum-exp over the two classes
        let max = neg.max(pos);
        if max == f64::NEG_INFINITY {
            return Err(InferenceError::InvalidProbability(f64::NAN));
        }
        let p = (pos - max).exp() / ((neg - max).exp() + (pos - max).exp());
        check_probability(p)
    }

    fn number_of_features(&self) -> usize {
        self.estimators[0].len()
    }

    fn kind(&self) -> &'static str {
        "gaussian_naive_bayes"
    }
}
