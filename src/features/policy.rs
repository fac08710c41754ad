use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// How a record becomes model inputs. The two are not interchangeable: each
/// matches a different trained artifact.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FeaturePolicy {
    /// Categorical one-hot columns ordered by `selected_features.json`.
    #[default]
    OneHot,
    /// The 13 clinical fields as-is.
    RawNumeric,
}

impl FeaturePolicy {
    pub fn probability_decimals(self) -> u32 {
        match self {
            FeaturePolicy::OneHot => 3,
            FeaturePolicy::RawNumeric => 2,
        }
    }

    pub fn requires_feature_order(self) -> bool {
        matches!(self, FeaturePolicy::OneHot)
    }

    pub fn requires_scaler(self) -> bool {
        matches!(self, FeaturePolicy::OneHot)
    }
}
