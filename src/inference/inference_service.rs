use std::sync::Arc;

use crate::artifacts::LoadedArtifacts;
use crate::classifiers::ProbabilisticClassifier;
use crate::core::{ClinicalRecord, PredictionResult};
use crate::features::{FeatureMapper, FeaturePolicy, OneHotEncoder};
use crate::inference::PredictionError;
use crate::preprocessing::StandardScaler;

/// Record in, rounded prediction out. Holds only read-only state.
pub struct InferenceService {
    classifier: Arc<dyn ProbabilisticClassifier>,
    mapper: FeatureMapper,
    // Loaded with the one-hot artifacts but not applied: the indicator
    // columns reach the model unscaled.
    scaler: Option<StandardScaler>,
}

impl InferenceService {
    pub fn new(
        classifier: Arc<dyn ProbabilisticClassifier>,
        mapper: FeatureMapper,
        scaler: Option<StandardScaler>,
    ) -> Self {
        Self {
            classifier,
            mapper,
            scaler,
        }
    }

    pub fn from_artifacts(artifacts: LoadedArtifacts, policy: FeaturePolicy) -> Self {
        let mapper = match policy {
            FeaturePolicy::OneHot => FeatureMapper::OneHot(OneHotEncoder::new(
                artifacts.feature_order.unwrap_or_default(),
            )),
            FeaturePolicy::RawNumeric => FeatureMapper::RawNumeric,
        };

        let service = Self::new(artifacts.classifier, mapper, artifacts.scaler);
        service.warn_on_schema_drift();
        service
    }

    fn warn_on_schema_drift(&self) {
        if let FeatureMapper::OneHot(encoder) = &self.mapper {
            let uncovered = encoder.uncovered_features();
            if !uncovered.is_empty() {
                tracing::warn!(
                    ?uncovered,
                    "feature list names columns the encoder cannot produce; /predict will fail"
                );
            }
        }

        let width = self.mapper.output_width();
        let expected = self.classifier.number_of_features();
        if width != expected {
            tracing::warn!(width, expected, "mapped vector width differs from model inputs");
        }

        if self.scaler.is_some() {
            tracing::info!("scaler loaded; features are passed to the model unscaled");
        }
    }

    pub fn policy(&self) -> FeaturePolicy {
        self.mapper.policy()
    }

    pub fn classifier(&self) -> &dyn ProbabilisticClassifier {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> Option<&StandardScaler> {
        self.scaler.as_ref()
    }

    pub fn predict(&self, record: &ClinicalRecord) -> Result<PredictionResult, PredictionError> {
        let features = self.mapper.map(record)?;
        let probability = self.classifier.probability_of_positive_class(&features)?;
        Ok(PredictionResult::from_probability(
            probability,
            self.policy().probability_decimals(),
        ))
    }
}
