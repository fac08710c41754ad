mod error;
mod feature_mapper;
pub mod one_hot_encoder;
mod policy;
pub mod raw_numeric;

pub use error::FeatureMappingError;
pub use feature_mapper::FeatureMapper;
pub use one_hot_encoder::OneHotEncoder;
pub use policy::FeaturePolicy;
pub use raw_numeric::RAW_FEATURE_NAMES;
