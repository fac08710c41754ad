use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed artifact {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl ArtifactLoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ArtifactLoadError::Missing { path }
            | ArtifactLoadError::Io { path, .. }
            | ArtifactLoadError::Parse { path, .. }
            | ArtifactLoadError::Malformed { path, .. } => path,
        }
    }
}
