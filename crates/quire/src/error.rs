//! CLI error types.

use quire_artifact::ArtifactError;
use quire_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
