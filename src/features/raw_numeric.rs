use crate::core::{ClinicalRecord, FeatureVector};

pub const RAW_FEATURE_NAMES: [&str; 13] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// Field values in dataset column order, unscaled and unencoded.
pub fn raw_numeric(record: &ClinicalRecord) -> FeatureVector {
    FeatureVector::new(vec![
        record.age,
        record.sex as f64,
        record.cp as f64,
        record.trestbps,
        record.chol,
        record.fbs as f64,
        record.restecg as f64,
        record.thalach,
        record.exang as f64,
        record.oldpeak,
        record.slope as f64,
        record.ca as f64,
        record.thal as f64,
    ])
}
