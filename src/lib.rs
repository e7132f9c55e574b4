//! runlike: recover the `docker run` command behind a running container.
//!
//! The crate inspects a container through the Docker daemon and maps its
//! configuration back onto `docker run` flags.

pub mod cli;
pub mod command;
pub mod error;
pub mod inspect;

pub use command::format_run_command;
pub use error::DockerError;
pub use inspect::{ContainerDescriptor, ContainerInspector, DaemonConfig, DockerClient};
