pub mod clinical_record;
pub mod estimators;
pub mod feature_vector;
pub mod prediction;

pub use clinical_record::ClinicalRecord;
pub use feature_vector::FeatureVector;
pub use prediction::{PredictionResult, RiskLevel};
