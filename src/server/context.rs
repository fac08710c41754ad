use std::sync::Arc;

use crate::artifacts::{self, ArtifactLoadError, ArtifactPaths};
use crate::features::FeaturePolicy;
use crate::inference::InferenceService;

pub type AppState = Arc<AppContext>;

/// Built once before the listener is bound and shared read-only by every
/// handler. There is no reload path.
pub struct AppContext {
    pub service: InferenceService,
}

impl AppContext {
    pub fn new(service: InferenceService) -> Self {
        Self { service }
    }

    pub fn load(paths: &ArtifactPaths, policy: FeaturePolicy) -> Result<Self, ArtifactLoadError> {
        let artifacts = artifacts::load(paths, policy)?;
        Ok(Self::new(InferenceService::from_artifacts(artifacts, policy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClinicalRecord, RiskLevel};
    use std::path::Path;

    fn bundled_model_dir() -> ArtifactPaths {
        ArtifactPaths::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("model"))
    }

    #[test]
    fn bundled_artifacts_serve_the_reference_patient() {
        let ctx = AppContext::load(&bundled_model_dir(), FeaturePolicy::OneHot).unwrap();
        let r = ctx
            .service
            .predict(&ClinicalRecord::reference_patient())
            .unwrap();

        assert_eq!(r.probability, 0.517);
        assert_eq!(r.prediction, 1);
        assert_eq!(r.risk, RiskLevel::High);
        assert!(ctx.service.scaler().is_some());
    }

    #[test]
    fn missing_directory_fails_before_serving() {
        let paths = ArtifactPaths::in_dir("/nonexistent/heartbeat/model");
        assert!(matches!(
            AppContext::load(&paths, FeaturePolicy::OneHot),
            Err(ArtifactLoadError::Missing { .. })
        ));
    }
}
