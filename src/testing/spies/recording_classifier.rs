use crate::classifiers::ProbabilisticClassifier;
use crate::core::FeatureVector;
use crate::inference::InferenceError;
use std::sync::{Arc, Mutex};

pub struct RecordingHandle(Arc<Mutex<Vec<FeatureVector>>>);
impl RecordingHandle {
    pub fn calls(&self) -> Vec<FeatureVector> {
        self.0.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

/// Answers a fixed probability and remembers every vector it was shown.
pub struct RecordingClassifier {
    calls: Arc<Mutex<Vec<FeatureVector>>>,
    probability: f64,
    width: usize,
}

impl RecordingClassifier {
    pub fn new(probability: f64, width: usize) -> (Self, RecordingHandle) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
                probability,
                width,
            },
            RecordingHandle(calls),
        )
    }
}

impl ProbabilisticClassifier for RecordingClassifier {
    fn probability_of_positive_class(
        &self,
        features: &FeatureVector,
    ) -> Result<f64, InferenceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(features.clone());
        }
        Ok(self.probability)
    }

    fn number_of_features(&self) -> usize {
        self.width
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}
