use crate::classifiers::ProbabilisticClassifier;
use crate::core::FeatureVector;
use crate::inference::InferenceError;

#[derive(Default)]
pub struct FailingClassifier;

impl ProbabilisticClassifier for FailingClassifier {
    fn probability_of_positive_class(
        &self,
        _features: &FeatureVector,
    ) -> Result<f64, InferenceError> {
        Err(InferenceError::Unfitted("this estimator has not been fitted"))
    }

    fn number_of_features(&self) -> usize {
        0
    }

    fn kind(&self) -> &'static str {
        "failing"
    }
}
