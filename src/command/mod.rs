//! Rebuilding a `docker run` command line from a container descriptor.
//!
//! Formatting is a single ordered pass over [`rules::RULES`]; it never fails.
//!
//! # Example
//!
//! ```
//! use runlike::command::format_run_command;
//! use runlike::inspect::ContainerDescriptor;
//!
//! let descriptor = ContainerDescriptor::new("/web1", "nginx:latest");
//! assert_eq!(
//!     format_run_command(&descriptor),
//!     "docker run --name web1 -d nginx:latest "
//! );
//! ```

pub mod builder;
pub mod rules;

pub use builder::{RunCommand, DOCKER_RUN};
pub use rules::{build_run_command, format_run_command, Rule, RULES};
