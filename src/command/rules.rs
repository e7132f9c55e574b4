//! Field-to-flag rules, applied in a fixed order.
//!
//! Each rule looks at one field (or a small group of related fields) of the
//! descriptor and emits zero or more tokens. The order of [`RULES`] decides
//! the shape of the printed command, so it must not be reshuffled.

use crate::command::builder::RunCommand;
use crate::inspect::descriptor::{ContainerDescriptor, DeviceMapping};

/// Signature shared by every formatting rule.
pub type RuleFn = fn(&ContainerDescriptor, &mut RunCommand);

/// A named formatting rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: RuleFn,
}

/// All rules in emission order.
pub const RULES: &[Rule] = &[
    Rule { name: "name", apply: name },
    Rule { name: "mac-address", apply: mac_address },
    Rule { name: "link", apply: links },
    Rule { name: "cpuset", apply: cpuset },
    Rule { name: "device", apply: devices },
    Rule { name: "memory", apply: memory },
    Rule { name: "privileged", apply: privileged },
    Rule { name: "detach", apply: detach },
    Rule { name: "tty", apply: tty },
    Rule { name: "rm", apply: auto_remove },
    Rule { name: "user", apply: user },
    Rule { name: "env", apply: env },
    Rule { name: "publish", apply: port_bindings },
    Rule { name: "network", apply: network },
    Rule { name: "volume", apply: mounts },
    Rule { name: "workdir", apply: working_dir },
    Rule { name: "restart", apply: restart },
    Rule { name: "dns", apply: dns },
    Rule { name: "image", apply: image },
    Rule { name: "command", apply: command },
];

/// Render the `docker run` command that recreates `descriptor`.
pub fn format_run_command(descriptor: &ContainerDescriptor) -> String {
    build_run_command(descriptor).build()
}

/// Run every rule over `descriptor` and return the collected tokens.
pub fn build_run_command(descriptor: &ContainerDescriptor) -> RunCommand {
    let mut cmd = RunCommand::new();
    for rule in RULES {
        (rule.apply)(descriptor, &mut cmd);
    }
    cmd
}

fn name(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option("--name", d.display_name());
}

fn mac_address(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("--mac-address", &d.mac_address);
}

fn links(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_each("--link", &d.links);
}

fn cpuset(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("--cpuset-cpus", &d.cpuset_cpus);
    cmd.option_if_present("--cpuset-mems", &d.cpuset_mems);
}

fn devices(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_each("--device", d.devices.iter().map(device_spec));
}

/// `host:container[:perm]`, with no trailing colon when permissions are empty.
fn device_spec(device: &DeviceMapping) -> String {
    if device.cgroup_permissions.is_empty() {
        format!("{}:{}", device.path_on_host, device.path_in_container)
    } else {
        format!(
            "{}:{}:{}",
            device.path_on_host, device.path_in_container, device.cgroup_permissions
        )
    }
}

fn memory(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    if d.memory > 0 {
        cmd.option("--memory", d.memory);
    }
    if d.memory_reservation > 0 {
        cmd.option("--memory-reservation", d.memory_reservation);
    }
}

fn privileged(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    if d.privileged {
        cmd.flag("--privileged");
    }
}

// The container is running, so it is assumed to have been started detached.
fn detach(_: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.flag("-d");
}

fn tty(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    if d.tty {
        cmd.flag("-t");
    }
}

fn auto_remove(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    if d.auto_remove {
        cmd.flag("--rm");
    }
}

fn user(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("--user", &d.user);
}

// Values are quoted as-is; embedded double quotes are not escaped.
fn env(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_each("-e", d.env.iter().map(|var| format!("\"{var}\"")));
}

fn port_bindings(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    let mut ports: Vec<&String> = d.port_bindings.keys().collect();
    ports.sort_by(|a, b| port_sort_key(a).cmp(&port_sort_key(b)));

    for port in ports {
        for binding in &d.port_bindings[port] {
            cmd.option(
                "-p",
                format!("{}:{}:{}", binding.host_ip, binding.host_port, port),
            );
        }
    }
}

/// Sort key for "80/tcp"-style ports: numeric port, then protocol.
///
/// Ports that do not start with a number sort last, by their raw text.
fn port_sort_key(port: &str) -> (u32, &str, &str) {
    let (number, protocol) = port.split_once('/').unwrap_or((port, ""));
    let number = number.parse::<u16>().map_or(u32::MAX, u32::from);
    (number, protocol, port)
}

fn network(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("--network", &d.network_mode);
}

fn mounts(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_each(
        "-v",
        d.mounts
            .iter()
            .map(|m| format!("{}:{}", m.source, m.destination)),
    );
}

fn working_dir(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("-w", &d.working_dir);
}

fn restart(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_if_present("--restart", &d.restart_policy);
}

fn dns(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.option_each("--dns", &d.dns);
    cmd.option_each("--dns-search", &d.dns_search);
    cmd.option_each("--add-host", &d.extra_hosts);
}

fn image(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    cmd.positional(d.image.as_str());
}

// Arguments are joined unquoted; ones containing spaces do not survive a re-run.
fn command(d: &ContainerDescriptor, cmd: &mut RunCommand) {
    if !d.cmd.is_empty() {
        cmd.positional(d.cmd.join(" "));
    }
}
