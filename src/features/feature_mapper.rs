use crate::core::{ClinicalRecord, FeatureVector};
use crate::features::raw_numeric::raw_numeric;
use crate::features::{FeatureMappingError, FeaturePolicy, OneHotEncoder};

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureMapper {
    OneHot(OneHotEncoder),
    RawNumeric,
}

impl FeatureMapper {
    pub fn policy(&self) -> FeaturePolicy {
        match self {
            FeatureMapper::OneHot(_) => FeaturePolicy::OneHot,
            FeatureMapper::RawNumeric => FeaturePolicy::RawNumeric,
        }
    }

    pub fn map(&self, record: &ClinicalRecord) -> Result<FeatureVector, FeatureMappingError> {
        match self {
            FeatureMapper::OneHot(encoder) => encoder.encode(record),
            FeatureMapper::RawNumeric => Ok(raw_numeric(record)),
        }
    }

    /// Width of the vectors `map` produces.
    pub fn output_width(&self) -> usize {
        match self {
            FeatureMapper::OneHot(encoder) => encoder.feature_order().len(),
            FeatureMapper::RawNumeric => super::RAW_FEATURE_NAMES.len(),
        }
    }
}
