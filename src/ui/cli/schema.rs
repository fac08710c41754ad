use schemars::schema_for;
use serde_json::{Value, json};

use crate::core::{ClinicalRecord, PredictionResult};

/// JSON Schemas of the `/predict` request and response bodies.
pub fn predict_schemas() -> Value {
    json!({
        "request": schema_for!(ClinicalRecord),
        "response": schema_for!(PredictionResult),
    })
}
