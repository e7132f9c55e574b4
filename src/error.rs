//! Error types for runlike operations.
//!
//! Only the daemon side can fail: connecting to the Docker engine and looking
//! up the container. Formatting a descriptor is infallible.

use thiserror::Error;

/// Errors that can occur while talking to the Docker daemon.
#[derive(Debug, Error)]
pub enum DockerError {
    #[error("Docker daemon not available: {0}")]
    DaemonUnavailable(String),

    #[error("Invalid DOCKER_API_VERSION '{0}': expected '<major>.<minor>'")]
    InvalidApiVersion(String),

    #[error("Container '{id}' not found")]
    ContainerNotFound { id: String },

    #[error("Failed to inspect container: {0}")]
    InspectFailed(String),
}
