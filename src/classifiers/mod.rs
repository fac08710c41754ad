pub mod artifact;
pub mod bayes;
pub mod classifier;
pub mod linear;

pub use artifact::ModelArtifact;
pub use classifier::{InvalidModel, ProbabilisticClassifier};
