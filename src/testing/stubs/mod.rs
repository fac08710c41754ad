mod fixed_probability_classifier;

pub use fixed_probability_classifier::FixedProbabilityClassifier;
