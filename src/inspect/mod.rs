//! Fetching container descriptors from the Docker daemon.
//!
//! # Example
//!
//! ```ignore
//! use runlike::inspect::{ContainerInspector, DaemonConfig, DockerClient};
//!
//! let client = DockerClient::connect(&DaemonConfig::from_env()).await?;
//! let descriptor = client.inspect("web1").await?;
//! ```

pub mod config;
pub mod descriptor;
pub mod docker_client;

pub use config::DaemonConfig;
pub use descriptor::{ContainerDescriptor, DeviceMapping, Mount, PortBinding};
pub use docker_client::{ContainerInspector, DockerClient};
