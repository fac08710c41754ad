pub mod artifacts;
pub mod classifiers;
pub mod core;
pub mod features;
pub mod inference;
pub mod preprocessing;
pub mod server;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
