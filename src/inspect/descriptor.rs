//! Snapshot of a container's configuration as reported by `docker inspect`.
//!
//! The daemon response is full of optional sections. [`ContainerDescriptor`]
//! flattens the handful of fields runlike cares about and replaces every
//! missing value with its empty default, so the formatter never has to
//! deal with `Option`.

use std::collections::HashMap;

use bollard::models::{
    ContainerInspectResponse, DeviceMapping as ApiDeviceMapping, MountPoint,
    PortBinding as ApiPortBinding,
};
use serde::{Deserialize, Serialize};

/// A host device exposed to the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMapping {
    pub path_on_host: String,
    pub path_in_container: String,
    /// Cgroup permissions such as "rwm". Empty when not set.
    pub cgroup_permissions: String,
}

impl DeviceMapping {
    pub fn new(
        path_on_host: impl Into<String>,
        path_in_container: impl Into<String>,
        cgroup_permissions: impl Into<String>,
    ) -> Self {
        Self {
            path_on_host: path_on_host.into(),
            path_in_container: path_in_container.into(),
            cgroup_permissions: cgroup_permissions.into(),
        }
    }
}

/// One host-side binding of a published container port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBinding {
    pub host_ip: String,
    pub host_port: String,
}

impl PortBinding {
    pub fn new(host_ip: impl Into<String>, host_port: impl Into<String>) -> Self {
        Self {
            host_ip: host_ip.into(),
            host_port: host_port.into(),
        }
    }
}

/// A filesystem mount, reduced to bind semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub source: String,
    pub destination: String,
}

impl Mount {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Immutable snapshot of a container, produced by one inspect call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// Stored container name, including the daemon's leading `/`.
    pub name: String,
    pub mac_address: String,
    pub links: Vec<String>,
    pub cpuset_cpus: String,
    pub cpuset_mems: String,
    pub devices: Vec<DeviceMapping>,
    /// Memory limit in bytes. Zero means unlimited.
    pub memory: i64,
    /// Memory soft limit in bytes. Zero means unset.
    pub memory_reservation: i64,
    pub privileged: bool,
    pub tty: bool,
    pub auto_remove: bool,
    pub user: String,
    /// `KEY=VALUE` entries in declaration order.
    pub env: Vec<String>,
    /// Container port (e.g. "80/tcp") to host bindings.
    pub port_bindings: HashMap<String, Vec<PortBinding>>,
    pub network_mode: String,
    pub mounts: Vec<Mount>,
    pub working_dir: String,
    /// Restart policy name ("always", "on-failure", ...).
    pub restart_policy: String,
    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub image: String,
    pub cmd: Vec<String>,
}

impl ContainerDescriptor {
    /// Creates a descriptor with only a name and an image set.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    /// Returns the user-facing name, without the daemon's `/` prefix.
    pub fn display_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }
}

impl From<ApiDeviceMapping> for DeviceMapping {
    fn from(device: ApiDeviceMapping) -> Self {
        Self {
            path_on_host: device.path_on_host.unwrap_or_default(),
            path_in_container: device.path_in_container.unwrap_or_default(),
            cgroup_permissions: device.cgroup_permissions.unwrap_or_default(),
        }
    }
}

impl From<ApiPortBinding> for PortBinding {
    fn from(binding: ApiPortBinding) -> Self {
        Self {
            host_ip: binding.host_ip.unwrap_or_default(),
            host_port: binding.host_port.unwrap_or_default(),
        }
    }
}

impl From<MountPoint> for Mount {
    fn from(mount: MountPoint) -> Self {
        Self {
            source: mount.source.unwrap_or_default(),
            destination: mount.destination.unwrap_or_default(),
        }
    }
}

impl From<ContainerInspectResponse> for ContainerDescriptor {
    fn from(response: ContainerInspectResponse) -> Self {
        let config = response.config.unwrap_or_default();
        let host = response.host_config.unwrap_or_default();
        let network = response.network_settings.unwrap_or_default();

        let port_bindings = host
            .port_bindings
            .unwrap_or_default()
            .into_iter()
            .map(|(port, bindings)| {
                let bindings = bindings
                    .unwrap_or_default()
                    .into_iter()
                    .map(PortBinding::from)
                    .collect();
                (port, bindings)
            })
            .collect();

        let restart_policy = host
            .restart_policy
            .and_then(|policy| policy.name)
            .map(|name| name.to_string())
            .unwrap_or_default();

        Self {
            name: response.name.unwrap_or_default(),
            mac_address: network.mac_address.unwrap_or_default(),
            links: host.links.unwrap_or_default(),
            cpuset_cpus: host.cpuset_cpus.unwrap_or_default(),
            cpuset_mems: host.cpuset_mems.unwrap_or_default(),
            devices: host
                .devices
                .unwrap_or_default()
                .into_iter()
                .map(DeviceMapping::from)
                .collect(),
            memory: host.memory.unwrap_or_default(),
            memory_reservation: host.memory_reservation.unwrap_or_default(),
            privileged: host.privileged.unwrap_or_default(),
            tty: config.tty.unwrap_or_default(),
            auto_remove: host.auto_remove.unwrap_or_default(),
            user: config.user.unwrap_or_default(),
            env: config.env.unwrap_or_default(),
            port_bindings,
            network_mode: host.network_mode.unwrap_or_default(),
            mounts: response
                .mounts
                .unwrap_or_default()
                .into_iter()
                .map(Mount::from)
                .collect(),
            working_dir: config.working_dir.unwrap_or_default(),
            restart_policy,
            dns: host.dns.unwrap_or_default(),
            dns_search: host.dns_search.unwrap_or_default(),
            extra_hosts: host.extra_hosts.unwrap_or_default(),
            image: config.image.unwrap_or_default(),
            cmd: config.cmd.unwrap_or_default(),
        }
    }
}
