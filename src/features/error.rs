use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatureMappingError {
    #[error("no value for feature '{0}'")]
    UnknownFeature(String),
}
