//! Connection settings for the Docker daemon.
//!
//! Settings come from the same environment variables the `docker` CLI reads,
//! so runlike talks to whichever engine the user's shell is pointed at.

use std::path::{Path, PathBuf};

use crate::error::DockerError;

/// Default daemon endpoint when `DOCKER_HOST` is unset.
#[cfg(unix)]
pub const DEFAULT_DOCKER_HOST: &str = "unix:///var/run/docker.sock";

/// Default daemon endpoint when `DOCKER_HOST` is unset.
#[cfg(windows)]
pub const DEFAULT_DOCKER_HOST: &str = "npipe:////./pipe/docker_engine";

/// Default TLS endpoint when TLS is enabled without `DOCKER_HOST`.
pub const DEFAULT_TLS_HOST: &str = "tcp://localhost:2376";

/// Request timeout in seconds applied to the daemon connection.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const ENV_DOCKER_HOST: &str = "DOCKER_HOST";
pub const ENV_TLS_VERIFY: &str = "DOCKER_TLS_VERIFY";
pub const ENV_CERT_PATH: &str = "DOCKER_CERT_PATH";
pub const ENV_API_VERSION: &str = "DOCKER_API_VERSION";

/// Docker daemon connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    /// Daemon endpoint (`unix://`, `tcp://`, `http://` or `npipe://`).
    pub host: Option<String>,
    /// `DOCKER_TLS_VERIFY` was set to any non-empty value.
    pub tls_verify: bool,
    /// Directory holding `key.pem`, `cert.pem` and `ca.pem`.
    pub cert_path: Option<PathBuf>,
    /// Pinned API version, e.g. "1.43". Disables version negotiation.
    pub api_version: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            host: None,
            tls_verify: false,
            cert_path: None,
            api_version: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DaemonConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Any non-empty `DOCKER_TLS_VERIFY`,
    /// "0" included, counts as set, as it does for the docker client.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            host: get(ENV_DOCKER_HOST),
            tls_verify: get(ENV_TLS_VERIFY).is_some(),
            cert_path: get(ENV_CERT_PATH).map(PathBuf::from),
            api_version: get(ENV_API_VERSION),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the daemon endpoint.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Pins the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the certificate directory, which enables TLS.
    pub fn with_cert_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cert_path = Some(path.into());
        self
    }

    /// Whether the connection must use TLS.
    ///
    /// A certificate directory alone is enough; `DOCKER_TLS_VERIFY` also
    /// turns TLS on, with certificates looked up in `~/.docker`.
    pub fn use_tls(&self) -> bool {
        self.cert_path.is_some() || self.tls_verify
    }

    /// Returns the endpoint to connect to, falling back to the platform default.
    pub fn endpoint(&self) -> &str {
        match (&self.host, self.use_tls()) {
            (Some(host), _) => host,
            (None, true) => DEFAULT_TLS_HOST,
            (None, false) => DEFAULT_DOCKER_HOST,
        }
    }

    /// Returns the certificate directory, defaulting to `~/.docker`.
    pub fn cert_dir(&self) -> Option<PathBuf> {
        self.cert_path.clone().or_else(|| {
            std::env::var_os("HOME").map(|home| Path::new(&home).join(".docker"))
        })
    }

    /// Parses the pinned API version into `(major, minor)`.
    ///
    /// Accepts an optional leading `v`, as in "v1.43".
    pub fn parsed_api_version(&self) -> Result<Option<(usize, usize)>, DockerError> {
        let Some(raw) = &self.api_version else {
            return Ok(None);
        };

        let trimmed = raw.trim_start_matches('v');
        let parsed = trimmed
            .split_once('.')
            .and_then(|(major, minor)| Some((major.parse().ok()?, minor.parse().ok()?)));

        match parsed {
            Some(version) => Ok(Some(version)),
            None => Err(DockerError::InvalidApiVersion(raw.clone())),
        }
    }
}
