use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

pub const DECISION_THRESHOLD: f64 = 0.5;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum RiskLevel {
    Low,
    High,
}

impl From<u8> for RiskLevel {
    fn from(prediction: u8) -> Self {
        if prediction == 1 {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionResult {
    /// Class-1 probability, rounded.
    pub probability: f64,
    /// 1 when the unrounded probability is strictly above the threshold.
    pub prediction: u8,
    pub risk: RiskLevel,
}

impl PredictionResult {
    /// Thresholds the raw probability, then rounds it to `decimals` places.
    pub fn from_probability(probability: f64, decimals: u32) -> Self {
        let prediction = u8::from(probability > DECISION_THRESHOLD);
        Self {
            probability: round_to(probability, decimals),
            prediction,
            risk: RiskLevel::from(prediction),
        }
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
