use thiserror::Error;

use crate::features::FeatureMappingError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InferenceError {
    #[error("X has {actual} features, but the model is expecting {expected} features as input")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("input contains NaN or infinity at position {index}")]
    NonFiniteInput { index: usize },

    #[error("model produced an invalid probability: {0}")]
    InvalidProbability(f64),

    #[error("model has no fitted parameters: {0}")]
    Unfitted(&'static str),
}

/// Anything that can go wrong between a validated record and a result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error(transparent)]
    Mapping(#[from] FeatureMappingError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
