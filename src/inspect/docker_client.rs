//! Docker API wrapper using the bollard crate.
//!
//! runlike issues exactly one read-only request against the daemon, so this
//! wrapper only knows how to connect and how to inspect a container.

use async_trait::async_trait;
use bollard::container::InspectContainerOptions;
use bollard::errors::Error as BollardError;
use bollard::{ClientVersion, Docker, API_DEFAULT_VERSION};
use tracing::{debug, info};

use crate::error::DockerError;
use crate::inspect::config::DaemonConfig;
use crate::inspect::descriptor::ContainerDescriptor;

/// Anything that can turn a container name or ID into a descriptor.
#[async_trait]
pub trait ContainerInspector: Send + Sync {
    /// Looks up a container and returns its configuration snapshot.
    async fn inspect(&self, id: &str) -> Result<ContainerDescriptor, DockerError>;
}

/// Docker client wrapper for container inspection.
pub struct DockerClient {
    docker: Docker,
}

impl DockerClient {
    /// Connects to the daemon described by `config`.
    ///
    /// When no API version is pinned, the client negotiates down to the
    /// highest version the daemon supports.
    ///
    /// # Errors
    ///
    /// Returns `DockerError::DaemonUnavailable` if the client cannot be
    /// built or the daemon does not answer the version request, and
    /// `DockerError::InvalidApiVersion` for an unparsable pinned version.
    pub async fn connect(config: &DaemonConfig) -> Result<Self, DockerError> {
        let pinned = config.parsed_api_version()?;
        let version = match pinned {
            Some((major_version, minor_version)) => ClientVersion {
                major_version,
                minor_version,
            },
            None => API_DEFAULT_VERSION.clone(),
        };

        let docker = open_connection(config, &version)?;

        let docker = if pinned.is_some() {
            docker
        } else {
            docker.negotiate_version().await.map_err(|e| {
                DockerError::DaemonUnavailable(format!(
                    "Failed to reach daemon at {}: {e}",
                    config.endpoint()
                ))
            })?
        };

        let negotiated = docker.client_version();
        debug!(
            endpoint = config.endpoint(),
            api_version = %format!("{}.{}", negotiated.major_version, negotiated.minor_version),
            "Connected to Docker daemon"
        );

        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerInspector for DockerClient {
    async fn inspect(&self, id: &str) -> Result<ContainerDescriptor, DockerError> {
        let response = self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(|e| map_inspect_error(id, e))?;

        info!(container = id, "Inspected container");
        Ok(ContainerDescriptor::from(response))
    }
}

/// Picks the bollard constructor matching the endpoint scheme and TLS setting.
fn open_connection(config: &DaemonConfig, version: &ClientVersion) -> Result<Docker, DockerError> {
    let endpoint = config.endpoint();
    let timeout = config.timeout_secs;
    let unavailable =
        |e: BollardError| DockerError::DaemonUnavailable(format!("Failed to connect: {e}"));

    if config.use_tls() {
        let cert_dir = config.cert_dir().ok_or_else(|| {
            DockerError::DaemonUnavailable(
                "TLS is enabled but no certificate directory was found".to_string(),
            )
        })?;
        debug!(endpoint, cert_dir = %cert_dir.display(), "Connecting over TLS");
        return Docker::connect_with_ssl(
            endpoint,
            &cert_dir.join("key.pem"),
            &cert_dir.join("cert.pem"),
            &cert_dir.join("ca.pem"),
            timeout,
            version,
        )
        .map_err(unavailable);
    }

    debug!(endpoint, "Connecting");
    match endpoint.split_once("://").map(|(scheme, _)| scheme) {
        #[cfg(unix)]
        Some("unix") => Docker::connect_with_unix(endpoint, timeout, version).map_err(unavailable),
        #[cfg(windows)]
        Some("npipe") => {
            Docker::connect_with_named_pipe(endpoint, timeout, version).map_err(unavailable)
        }
        Some("tcp") | Some("http") => {
            Docker::connect_with_http(endpoint, timeout, version).map_err(unavailable)
        }
        _ => Err(DockerError::DaemonUnavailable(format!(
            "Unsupported DOCKER_HOST '{endpoint}'"
        ))),
    }
}

fn map_inspect_error(id: &str, error: BollardError) -> DockerError {
    match error {
        BollardError::DockerResponseServerError {
            status_code: 404, ..
        } => DockerError::ContainerNotFound { id: id.to_string() },
        other => DockerError::InspectFailed(other.to_string()),
    }
}
