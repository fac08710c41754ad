mod error;
mod inference_service;

pub use error::{InferenceError, PredictionError};
pub use inference_service::InferenceService;
