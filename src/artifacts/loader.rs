use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::artifacts::ArtifactLoadError;
use crate::classifiers::{ModelArtifact, ProbabilisticClassifier};
use crate::features::FeaturePolicy;
use crate::preprocessing::StandardScaler;

pub const MODEL_FILE: &str = "heart_best_model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const FEATURE_ORDER_FILE: &str = "selected_features.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub feature_order: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(MODEL_FILE),
            scaler: dir.join(SCALER_FILE),
            feature_order: dir.join(FEATURE_ORDER_FILE),
        }
    }
}

/// Everything read from disk at startup. Never mutated afterwards.
pub struct LoadedArtifacts {
    pub classifier: Arc<dyn ProbabilisticClassifier>,
    pub scaler: Option<StandardScaler>,
    pub feature_order: Option<Vec<String>>,
}

impl std::fmt::Debug for LoadedArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedArtifacts")
            .field("classifier", &self.classifier.kind())
            .field("scaler", &self.scaler)
            .field("feature_order", &self.feature_order)
            .finish()
    }
}

/// Loads the artifacts `policy` needs. The one-hot policy needs all three;
/// raw numeric needs only the model.
pub fn load(
    paths: &ArtifactPaths,
    policy: FeaturePolicy,
) -> Result<LoadedArtifacts, ArtifactLoadError> {
    match load_all(paths, policy) {
        Ok(artifacts) => {
            tracing::info!(
                policy = %policy,
                model = artifacts.classifier.kind(),
                inputs = artifacts.classifier.number_of_features(),
                scaler = artifacts.scaler.is_some(),
                features = artifacts.feature_order.as_ref().map(Vec::len),
                "model artifacts loaded"
            );
            Ok(artifacts)
        }
        Err(e) => {
            tracing::error!(path = %e.path().display(), "error loading model artifacts: {e}");
            Err(e)
        }
    }
}

fn load_all(
    paths: &ArtifactPaths,
    policy: FeaturePolicy,
) -> Result<LoadedArtifacts, ArtifactLoadError> {
    let classifier = load_model(&paths.model)?;

    let scaler = if policy.requires_scaler() {
        Some(load_scaler(&paths.scaler)?)
    } else {
        None
    };

    let feature_order = if policy.requires_feature_order() {
        Some(load_feature_order(&paths.feature_order)?)
    } else {
        None
    };

    Ok(LoadedArtifacts {
        classifier,
        scaler,
        feature_order,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ArtifactLoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ArtifactLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_model(path: &Path) -> Result<Arc<dyn ProbabilisticClassifier>, ArtifactLoadError> {
    let artifact: ModelArtifact = read_json(path)?;
    artifact
        .into_classifier()
        .map_err(|e| ArtifactLoadError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

pub fn load_scaler(path: &Path) -> Result<StandardScaler, ArtifactLoadError> {
    let scaler: StandardScaler = read_json(path)?;
    scaler.validate().map_err(|e| ArtifactLoadError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(scaler)
}

pub fn load_feature_order(path: &Path) -> Result<Vec<String>, ArtifactLoadError> {
    let names: Vec<String> = read_json(path)?;
    if names.is_empty() {
        return Err(ArtifactLoadError::Malformed {
            path: path.to_path_buf(),
            reason: "feature list is empty".into(),
        });
    }

    let mut seen = HashSet::with_capacity(names.len());
    if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
        return Err(ArtifactLoadError::Malformed {
            path: path.to_path_buf(),
            reason: format!("feature '{dup}' listed twice"),
        });
    }

    Ok(names)
}
