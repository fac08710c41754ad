use crate::core::{ClinicalRecord, FeatureVector};
use crate::features::FeatureMappingError;

/// Source-dataset indicator the model was trained with. Every request is
/// encoded as if it came from this dataset.
pub const CONSTANT_COLUMN: &str = "dataset_VA Long Beach";

type Indicator = fn(&ClinicalRecord) -> bool;

/// Indicator columns known to the encoder. Baseline categories (cp 4,
/// restecg 2, slope 3, thal 6) have no column.
const ONE_HOT_COLUMNS: &[(&str, Indicator)] = &[
    (CONSTANT_COLUMN, |_| true),
    ("cp_atypical angina", |r| r.cp == 2),
    ("cp_non-anginal", |r| r.cp == 3),
    ("cp_typical angina", |r| r.cp == 1),
    ("restecg_normal", |r| r.restecg == 0),
    ("restecg_st-t abnormality", |r| r.restecg == 1),
    ("slope_flat", |r| r.slope == 2),
    ("slope_upsloping", |r| r.slope == 1),
    ("thal_normal", |r| r.thal == 3),
    ("thal_reversable defect", |r| r.thal == 7),
];

pub fn known_columns() -> impl Iterator<Item = &'static str> {
    ONE_HOT_COLUMNS.iter().map(|(name, _)| *name)
}

fn indicator_for(name: &str) -> Option<Indicator> {
    ONE_HOT_COLUMNS
        .iter()
        .find(|(col, _)| *col == name)
        .map(|(_, f)| *f)
}

/// Encodes categorical fields only; numeric measurements are not model
/// inputs under this policy.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotEncoder {
    feature_order: Vec<String>,
}

impl OneHotEncoder {
    pub fn new(feature_order: Vec<String>) -> Self {
        Self { feature_order }
    }

    pub fn feature_order(&self) -> &[String] {
        &self.feature_order
    }

    /// Names in the feature order that no indicator column produces.
    pub fn uncovered_features(&self) -> Vec<&str> {
        self.feature_order
            .iter()
            .map(String::as_str)
            .filter(|name| indicator_for(name).is_none())
            .collect()
    }

    pub fn encode(&self, record: &ClinicalRecord) -> Result<FeatureVector, FeatureMappingError> {
        self.feature_order
            .iter()
            .map(|name| {
                indicator_for(name)
                    .map(|f| if f(record) { 1.0 } else { 0.0 })
                    .ok_or_else(|| FeatureMappingError::UnknownFeature(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FeatureVector::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cp: i64, restecg: i64, slope: i64, thal: i64) -> ClinicalRecord {
        ClinicalRecord {
            cp,
            restecg,
            slope,
            thal,
            ..ClinicalRecord::reference_patient()
        }
    }

    fn all_columns() -> Vec<String> {
        known_columns().map(str::to_string).collect()
    }

    fn ones(encoder: &OneHotEncoder, v: &FeatureVector) -> Vec<String> {
        let mut out: Vec<String> = encoder
            .feature_order()
            .iter()
            .zip(v.iter())
            .filter(|(_, x)| *x == 1.0)
            .map(|(n, _)| n.clone())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn typical_angina_normal_flat_normal() {
        let enc = OneHotEncoder::new(all_columns());
        let v = enc.encode(&record(1, 0, 2, 3)).unwrap();

        assert_eq!(v.len(), 10);
        assert!(v.iter().all(|x| x == 0.0 || x == 1.0));
        assert_eq!(
            ones(&enc, &v),
            vec![
                "cp_typical angina",
                "dataset_VA Long Beach",
                "restecg_normal",
                "slope_flat",
                "thal_normal",
            ]
        );
    }

    #[test]
    fn reordering_preserves_the_set_of_ones() {
        let mut reversed = all_columns();
        reversed.reverse();
        let enc = OneHotEncoder::new(reversed);
        let v = enc.encode(&record(1, 0, 2, 3)).unwrap();

        assert_eq!(
            v.as_slice(),
            &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(
            ones(&enc, &v),
            vec![
                "cp_typical angina",
                "dataset_VA Long Beach",
                "restecg_normal",
                "slope_flat",
                "thal_normal",
            ]
        );
    }

    #[test]
    fn baseline_categories_have_no_columns() {
        let enc = OneHotEncoder::new(all_columns());
        let v = enc.encode(&record(4, 2, 3, 6)).unwrap();
        assert_eq!(ones(&enc, &v), vec![CONSTANT_COLUMN]);
    }

    #[test]
    fn fixed_defect_zeroes_every_thal_column() {
        let enc = OneHotEncoder::new(vec![
            "thal_normal".to_string(),
            "thal_reversable defect".to_string(),
        ]);
        let v = enc.encode(&record(2, 1, 1, 6)).unwrap();
        assert_eq!(v.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn constant_column_ignores_input() {
        let enc = OneHotEncoder::new(vec![CONSTANT_COLUMN.to_string()]);
        for r in [record(1, 0, 1, 3), record(4, 2, 3, 7)] {
            assert_eq!(enc.encode(&r).unwrap().as_slice(), &[1.0]);
        }
    }

    #[test]
    fn numeric_fields_do_not_affect_encoding() {
        let enc = OneHotEncoder::new(all_columns());
        let a = record(3, 1, 1, 7);
        let b = ClinicalRecord {
            age: 29.0,
            chol: 564.0,
            oldpeak: 0.0,
            ca: 3,
            sex: 0,
            ..a.clone()
        };
        assert_eq!(enc.encode(&a).unwrap(), enc.encode(&b).unwrap());
    }

    #[test]
    fn uncovered_name_is_an_error_not_a_zero() {
        let enc = OneHotEncoder::new(vec![
            "cp_typical angina".to_string(),
            "chol".to_string(),
        ]);
        assert_eq!(enc.uncovered_features(), vec!["chol"]);
        assert_eq!(
            enc.encode(&record(1, 0, 2, 3)).unwrap_err(),
            FeatureMappingError::UnknownFeature("chol".to_string())
        );
    }
}
