use crate::classifiers::ProbabilisticClassifier;
use crate::classifiers::classifier::check_input;
use crate::core::FeatureVector;
use crate::inference::InferenceError;

pub struct FixedProbabilityClassifier {
    probability: f64,
    width: usize,
}

impl FixedProbabilityClassifier {
    pub fn new(probability: f64, width: usize) -> Self {
        Self { probability, width }
    }
}

impl ProbabilisticClassifier for FixedProbabilityClassifier {
    fn probability_of_positive_class(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, InferenceError> {
        check_input(features, self.width)?;
        Ok(self.probability)
    }

    fn number_of_features(&self) -> usize {
        self.width
    }

    fn kind(&self) -> &'static str {
        "fixed_probability"
    }
}
