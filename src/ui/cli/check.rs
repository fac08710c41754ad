use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use crate::artifacts::loader::{load_feature_order, load_model, load_scaler};
use crate::artifacts::{ArtifactLoadError, ArtifactPaths};
use crate::core::FeatureVector;
use crate::features::one_hot_encoder::OneHotEncoder;
use crate::features::{FeaturePolicy, RAW_FEATURE_NAMES};

#[derive(Debug)]
pub struct ArtifactStatus<T> {
    pub path: PathBuf,
    pub exists: bool,
    pub loaded: Result<T, String>,
}

impl<T> ArtifactStatus<T> {
    fn inspect(path: &Path, load: impl FnOnce(&Path) -> Result<T, ArtifactLoadError>) -> Self {
        Self {
            path: path.to_path_buf(),
            exists: path.is_file(),
            loaded: load(path).map_err(|e| e.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_ok()
    }
}

#[derive(Debug)]
pub struct ModelSummary {
    pub kind: &'static str,
    pub inputs: usize,
}

#[derive(Debug)]
pub struct ScalerSummary {
    pub kind: &'static str,
    pub columns: usize,
    /// Whether `transform` accepted a zero vector of the scaler's width.
    pub transforms: bool,
}

#[derive(Debug)]
pub struct FeatureOrderSummary {
    pub names: Vec<String>,
    pub uncovered: Vec<String>,
}

/// What `heartbeat check` found in a model directory.
#[derive(Debug)]
pub struct CheckReport {
    pub policy: FeaturePolicy,
    pub model: ArtifactStatus<ModelSummary>,
    pub scaler: ArtifactStatus<ScalerSummary>,
    pub feature_order: ArtifactStatus<FeatureOrderSummary>,
}

impl CheckReport {
    pub fn inspect(paths: &ArtifactPaths, policy: FeaturePolicy) -> Self {
        let model = ArtifactStatus::inspect(&paths.model, |p| {
            load_model(p).map(|m| ModelSummary {
                kind: m.kind(),
                inputs: m.number_of_features(),
            })
        });

        let scaler = ArtifactStatus::inspect(&paths.scaler, |p| {
            load_scaler(p).map(|s| ScalerSummary {
                kind: s.kind(),
                columns: s.number_of_features(),
                transforms: s
                    .transform(&FeatureVector::new(vec![0.0; s.number_of_features()]))
                    .is_ok(),
            })
        });

        let feature_order = ArtifactStatus::inspect(&paths.feature_order, |p| {
            load_feature_order(p).map(|names| {
                let uncovered = OneHotEncoder::new(names.clone())
                    .uncovered_features()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                FeatureOrderSummary { names, uncovered }
            })
        });

        Self {
            policy,
            model,
            scaler,
            feature_order,
        }
    }

    /// Width of the vector the selected policy would feed the model.
    pub fn mapped_width(&self) -> Option<usize> {
        match self.policy {
            FeaturePolicy::OneHot => self
                .feature_order
                .loaded
                .as_ref()
                .ok()
                .map(|f| f.names.len()),
            FeaturePolicy::RawNumeric => Some(RAW_FEATURE_NAMES.len()),
        }
    }

    /// True when every artifact the policy requires loads.
    pub fn is_servable(&self) -> bool {
        self.model.is_loaded()
            && (!self.policy.requires_scaler() || self.scaler.is_loaded())
            && (!self.policy.requires_feature_order() || self.feature_order.is_loaded())
    }

    /// Servable, widths agree and every listed feature can be produced.
    pub fn is_consistent(&self) -> bool {
        let widths_match = match (&self.model.loaded, self.mapped_width()) {
            (Ok(m), Some(w)) => m.inputs == w,
            _ => false,
        };
        let covered = match (self.policy, &self.feature_order.loaded) {
            (FeaturePolicy::OneHot, Ok(f)) => f.uncovered.is_empty(),
            (FeaturePolicy::OneHot, Err(_)) => false,
            (FeaturePolicy::RawNumeric, _) => true,
        };
        self.is_servable() && widths_match && covered
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Policy: {}", self.policy)?;
        writeln!(
            f,
            "Model exists: {} ({})",
            yes_no(self.model.exists),
            self.model.path.display()
        )?;
        writeln!(
            f,
            "Scaler exists: {} ({})",
            yes_no(self.scaler.exists),
            self.scaler.path.display()
        )?;
        writeln!(
            f,
            "Feature list exists: {} ({})",
            yes_no(self.feature_order.exists),
            self.feature_order.path.display()
        )?;

        match &self.model.loaded {
            Ok(m) => {
                writeln!(f, "Model type: {} ({} inputs)", m.kind, m.inputs)?;
                writeln!(f, "Has predict_proba: yes")?;
            }
            Err(e) => writeln!(f, "Model: {e}")?,
        }

        match &self.scaler.loaded {
            Ok(s) => {
                writeln!(f, "Scaler type: {} ({} columns)", s.kind, s.columns)?;
                writeln!(f, "Has transform: {}", yes_no(s.transforms))?;
                writeln!(f, "Scaler applied on /predict: no")?;
            }
            Err(e) => writeln!(f, "Scaler: {e}")?,
        }

        match &self.feature_order.loaded {
            Ok(fo) => {
                writeln!(f, "Features ({}): {}", fo.names.len(), fo.names.join(", "))?;
                if !fo.uncovered.is_empty() {
                    writeln!(f, "Features without an encoder column: {}", fo.uncovered.join(", "))?;
                }
            }
            Err(e) => writeln!(f, "Features: {e}")?,
        }

        if let (Ok(m), Some(w)) = (&self.model.loaded, self.mapped_width()) {
            let verdict = if w == m.inputs { "ok" } else { "MISMATCH" };
            writeln!(f, "Vector width {w} vs model inputs {}: {verdict}", m.inputs)?;
        }

        write!(f, "Servable: {}", yes_no(self.is_servable()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::loader::{FEATURE_ORDER_FILE, MODEL_FILE, SCALER_FILE};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn complete_directory_is_servable_and_consistent() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(MODEL_FILE),
            r#"{"kind":"logistic_regression","coefficients":[0.2,0.4],"intercept":0.0}"#,
        )
        .unwrap();
        fs::write(dir.path().join(SCALER_FILE), r#"{"mean":[0.5,0.5],"scale":[0.5,0.5]}"#).unwrap();
        fs::write(
            dir.path().join(FEATURE_ORDER_FILE),
            r#"["cp_typical angina","thal_normal"]"#,
        )
        .unwrap();

        let report = CheckReport::inspect(&ArtifactPaths::in_dir(dir.path()), FeaturePolicy::OneHot);

        assert!(report.is_servable());
        assert!(report.is_consistent());
        assert!(report.scaler.loaded.as_ref().unwrap().transforms);
        let text = report.to_string();
        assert!(text.contains("Model type: logistic_regression (2 inputs)"));
        assert!(text.contains("Servable: yes"));
    }

    #[test]
    fn flags_uncovered_names_and_width_mismatch() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(MODEL_FILE),
            r#"{"kind":"logistic_regression","coefficients":[0.2,0.4,0.1],"intercept":0.0}"#,
        )
        .unwrap();
        fs::write(dir.path().join(SCALER_FILE), r#"{"mean":[0.0],"scale":[1.0]}"#).unwrap();
        fs::write(dir.path().join(FEATURE_ORDER_FILE), r#"["slope_flat","oldpeak"]"#).unwrap();

        let report = CheckReport::inspect(&ArtifactPaths::in_dir(dir.path()), FeaturePolicy::OneHot);

        assert!(report.is_servable());
        assert!(!report.is_consistent());
        assert_eq!(report.feature_order.loaded.as_ref().unwrap().uncovered, vec!["oldpeak"]);
        assert!(report.to_string().contains("MISMATCH"));
    }

    #[test]
    fn raw_numeric_only_needs_the_model() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(MODEL_FILE),
            format!(
                r#"{{"kind":"logistic_regression","coefficients":{:?},"intercept":0.0}}"#,
                vec![0.01; 13]
            ),
        )
        .unwrap();

        let report =
            CheckReport::inspect(&ArtifactPaths::in_dir(dir.path()), FeaturePolicy::RawNumeric);

        assert!(!report.scaler.exists);
        assert!(report.is_servable());
        assert!(report.is_consistent());
    }

    #[test]
    fn empty_directory_is_not_servable() {
        let dir = tempdir().expect("tempdir");
        let report = CheckReport::inspect(&ArtifactPaths::in_dir(dir.path()), FeaturePolicy::OneHot);

        assert!(!report.model.exists);
        assert!(!report.is_servable());
        assert!(report.to_string().contains("artifact not found"));
    }
}
