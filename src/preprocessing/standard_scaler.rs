use serde::{Deserialize, Serialize};

use crate::classifiers::InvalidModel;
use crate::core::FeatureVector;
use crate::inference::InferenceError;

/// Per-column standardization, `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, InvalidModel> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Serde bypasses `new`, so loaders call this after deserializing.
    pub fn validate(&self) -> Result<(), InvalidModel> {
        if self.mean.len() != self.scale.len() {
            return Err(InvalidModel(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(self.scale.iter()).any(|v| !v.is_finite()) {
            return Err(InvalidModel("scaler contains non-finite values".into()));
        }
        Ok(())
    }

    pub fn number_of_features(&self) -> usize {
        self.mean.len()
    }

    pub fn kind(&self) -> &'static str {
        "standard_scaler"
    }

    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, InferenceError> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        let scaled = features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (&mu, &s))| {
                // constant columns were fitted with scale 0
                let s = if s == 0.0 { 1.0 } else { s };
                (x - mu) / s
            })
            .collect::<Vec<_>>();

        Ok(FeatureVector::new(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_each_column() {
        let s = StandardScaler::new(vec![54.0, 130.0], vec![9.0, 17.5]).unwrap();
        let out = s
            .transform(&FeatureVector::new(vec![63.0, 95.0]))
            .unwrap();
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_scale_only_centers() {
        let s = StandardScaler::new(vec![1.0], vec![0.0]).unwrap();
        let out = s.transform(&FeatureVector::new(vec![1.0])).unwrap();
        assert_eq!(out.as_slice(), &[0.0]);
    }

    #[test]
    fn rejects_width_mismatch() {
        let s = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(
            s.transform(&FeatureVector::new(vec![1.0])).unwrap_err(),
            InferenceError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_ragged_parameters() {
        assert!(StandardScaler::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }
}
