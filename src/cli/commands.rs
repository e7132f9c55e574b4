//! CLI definition and command runner for runlike.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::command::format_run_command;
use crate::inspect::{ContainerInspector, DaemonConfig, DockerClient};

/// Print the `docker run` command that would recreate a running container.
#[derive(Parser, Debug)]
#[command(name = "runlike")]
#[command(about = "Print the docker run command that would recreate a running container")]
#[command(version)]
#[command(
    long_about = "runlike inspects a container through the Docker daemon and prints an equivalent `docker run` command.\n\nThe daemon is located through DOCKER_HOST, DOCKER_TLS_VERIFY, DOCKER_CERT_PATH and DOCKER_API_VERSION.\n\nExample usage:\n  runlike -c web1"
)]
pub struct Cli {
    /// Name or ID of the container to inspect.
    #[arg(short = 'c', long = "container", value_name = "CONTAINER")]
    pub container: Option<String>,
}

impl Cli {
    /// Returns the container identifier, treating an empty value as absent.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref().filter(|id| !id.is_empty())
    }
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
///
/// Without a container identifier this prints usage and succeeds.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let Some(container) = cli.container() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = DaemonConfig::from_env();
    debug!(?config, "Resolved daemon configuration");

    let client = DockerClient::connect(&config)
        .await
        .context("Failed to create inspector")?;

    let command = render_run_command(&client, container).await?;
    println!("{command}");
    Ok(())
}

/// Inspect `container` through `inspector` and format its run command.
pub async fn render_run_command<I>(inspector: &I, container: &str) -> anyhow::Result<String>
where
    I: ContainerInspector + ?Sized,
{
    let descriptor = inspector
        .inspect(container)
        .await
        .with_context(|| format!("Failed to inspect container '{container}'"))?;

    Ok(format_run_command(&descriptor))
}
