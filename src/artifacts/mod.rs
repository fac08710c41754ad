mod error;
pub mod loader;

pub use error::ArtifactLoadError;
pub use loader::{ArtifactPaths, LoadedArtifacts, load};
