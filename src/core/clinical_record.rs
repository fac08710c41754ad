use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One `/predict` request body.
///
/// Category codes follow the Cleveland heart-disease dataset:
/// `cp` 1 typical angina, 2 atypical angina, 3 non-anginal, 4 asymptomatic;
/// `restecg` 0 normal, 1 ST-T abnormality, 2 LV hypertrophy;
/// `slope` 1 upsloping, 2 flat, 3 downsloping;
/// `thal` 3 normal, 6 fixed defect, 7 reversable defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClinicalRecord {
    #[schemars(description = "Age in years")]
    pub age: f64,

    #[schemars(description = "1 = male, 0 = female")]
    pub sex: i64,

    #[schemars(description = "Chest pain type (1-4)")]
    pub cp: i64,

    #[schemars(description = "Resting blood pressure (mm Hg)")]
    pub trestbps: f64,

    #[schemars(description = "Serum cholesterol (mg/dl)")]
    pub chol: f64,

    #[schemars(description = "Fasting blood sugar > 120 mg/dl (1 = true)")]
    pub fbs: i64,

    #[schemars(description = "Resting ECG result (0-2)")]
    pub restecg: i64,

    #[schemars(description = "Maximum heart rate achieved")]
    pub thalach: f64,

    #[schemars(description = "Exercise induced angina (1 = yes)")]
    pub exang: i64,

    #[schemars(description = "ST depression induced by exercise relative to rest")]
    pub oldpeak: f64,

    #[schemars(description = "Slope of the peak exercise ST segment (1-3)")]
    pub slope: i64,

    #[schemars(description = "Number of major vessels colored by fluoroscopy")]
    pub ca: i64,

    #[schemars(description = "Thalassemia (3, 6 or 7)")]
    pub thal: i64,
}

impl ClinicalRecord {
    /// The patient used by the probe client: a 63 year old male with typical
    /// angina and a flat ST slope.
    pub fn reference_patient() -> Self {
        Self {
            age: 63.0,
            sex: 1,
            cp: 1,
            trestbps: 145.0,
            chol: 233.0,
            fbs: 1,
            restecg: 0,
            thalach: 150.0,
            exang: 0,
            oldpeak: 2.3,
            slope: 2,
            ca: 0,
            thal: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClinicalRecord;
    use serde_json::json;

    #[test]
    fn deserializes_integral_json_numbers_into_real_fields() {
        let body = json!({
            "age": 63, "sex": 1, "cp": 1, "trestbps": 145, "chol": 233, "fbs": 1,
            "restecg": 0, "thalach": 150, "exang": 0, "oldpeak": 2.3, "slope": 2,
            "ca": 0, "thal": 3
        });

        let record: ClinicalRecord = serde_json::from_value(body).unwrap();
        assert_eq!(record, ClinicalRecord::reference_patient());
    }

    #[test]
    fn rejects_missing_field() {
        let body = json!({
            "age": 63, "sex": 1, "cp": 1, "trestbps": 145, "chol": 233, "fbs": 1,
            "restecg": 0, "thalach": 150, "exang": 0, "oldpeak": 2.3, "slope": 2,
            "ca": 0
        });

        let err = serde_json::from_value::<ClinicalRecord>(body).unwrap_err();
        assert!(err.to_string().contains("thal"));
    }

    #[test]
    fn rejects_wrong_type_for_coded_field() {
        let body = json!({
            "age": 63, "sex": "male", "cp": 1, "trestbps": 145, "chol": 233, "fbs": 1,
            "restecg": 0, "thalach": 150, "exang": 0, "oldpeak": 2.3, "slope": 2,
            "ca": 0, "thal": 3
        });

        assert!(serde_json::from_value::<ClinicalRecord>(body).is_err());
    }
}
