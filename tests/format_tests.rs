//! Formatting tests driven by `docker inspect`-shaped documents.

use bollard::models::ContainerInspectResponse;
use runlike::command::{build_run_command, format_run_command};
use runlike::inspect::ContainerDescriptor;

const WEB_FIXTURE: &str = include_str!("fixtures/inspect_web.json");

fn descriptor_from_json(json: &str) -> ContainerDescriptor {
    let response: ContainerInspectResponse =
        serde_json::from_str(json).expect("fixture should deserialize");
    ContainerDescriptor::from(response)
}

fn count_token(command: &str, token: &str) -> usize {
    command.matches(token).count()
}

#[test]
fn test_end_to_end_minimal_descriptor() {
    let descriptor = ContainerDescriptor {
        memory: 536870912,
        privileged: false,
        tty: true,
        env: vec!["X=1".to_string()],
        ..ContainerDescriptor::new("/app", "nginx:latest")
    };

    assert_eq!(
        format_run_command(&descriptor),
        r#"docker run --name app --memory 536870912 -d -t -e "X=1" nginx:latest "#
    );
}

#[test]
fn test_full_inspect_document() {
    let descriptor = descriptor_from_json(WEB_FIXTURE);

    let expected = concat!(
        "docker run ",
        "--name web ",
        "--mac-address 02:42:ac:11:00:02 ",
        "--link /db:/web/db ",
        "--cpuset-cpus 0-1 ",
        "--device /dev/sda:/dev/xvda:rwm ",
        "--device /dev/fuse:/dev/fuse ",
        "--memory 536870912 ",
        "--memory-reservation 268435456 ",
        "--privileged ",
        "-d ",
        "--user 101 ",
        "-e \"NGINX_HOST=example.com\" ",
        "-e \"PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin\" ",
        "-e \"NGINX_VERSION=1.25.3\" ",
        "-p 0.0.0.0:8080:80/tcp ",
        "-p :::8080:80/tcp ",
        "-p 0.0.0.0:8443:443/tcp ",
        "--network bridge ",
        "-v /srv/web/html:/usr/share/nginx/html ",
        "-w /usr/share/nginx ",
        "--restart unless-stopped ",
        "--dns 1.1.1.1 ",
        "--dns 8.8.8.8 ",
        "--dns-search corp.local ",
        "--add-host db:10.0.0.2 ",
        "nginx:1.25 ",
        "nginx -g daemon off; ",
    );

    assert_eq!(format_run_command(&descriptor), expected);
}

#[test]
fn test_sparse_document_uses_defaults() {
    let descriptor = descriptor_from_json(r#"{"Name": "/bare", "Config": {"Image": "alpine"}}"#);

    assert_eq!(format_run_command(&descriptor), "docker run --name bare -d alpine ");
}

#[test]
fn test_absent_fields_produce_no_flags() {
    let command = format_run_command(&ContainerDescriptor::new("/quiet", "busybox"));

    for flag in [
        "--mac-address",
        "--link",
        "--cpuset-cpus",
        "--cpuset-mems",
        "--device",
        "--memory",
        "--privileged",
        "-t ",
        "--rm",
        "--user",
        "-e ",
        "-p ",
        "--network",
        "-v ",
        "-w ",
        "--restart",
        "--dns",
        "--add-host",
    ] {
        assert!(!command.contains(flag), "unexpected {flag} in {command}");
    }
}

#[test]
fn test_present_fields_appear_exactly_once() {
    let descriptor = ContainerDescriptor {
        mac_address: "02:42:ac:11:00:09".to_string(),
        user: "nobody".to_string(),
        network_mode: "host".to_string(),
        working_dir: "/work".to_string(),
        restart_policy: "on-failure".to_string(),
        auto_remove: true,
        ..ContainerDescriptor::new("/once", "busybox")
    };
    let command = format_run_command(&descriptor);

    assert_eq!(count_token(&command, "--mac-address 02:42:ac:11:00:09 "), 1);
    assert_eq!(count_token(&command, "--user nobody "), 1);
    assert_eq!(count_token(&command, "--network host "), 1);
    assert_eq!(count_token(&command, "-w /work "), 1);
    assert_eq!(count_token(&command, "--restart on-failure "), 1);
    assert_eq!(count_token(&command, "--rm "), 1);
    assert_eq!(count_token(&command, " -d "), 1);
}

#[test]
fn test_env_order_preserved() {
    let descriptor = ContainerDescriptor {
        env: vec!["A=1".to_string(), "B=2".to_string()],
        ..ContainerDescriptor::new("/env", "busybox")
    };

    assert!(format_run_command(&descriptor).contains(r#"-e "A=1" -e "B=2""#));
}

#[test]
fn test_image_and_command_are_last() {
    let descriptor = ContainerDescriptor {
        cmd: vec!["sleep".to_string(), "infinity".to_string()],
        extra_hosts: vec!["gw:10.0.0.1".to_string()],
        ..ContainerDescriptor::new("/sleeper", "alpine:3.19")
    };
    let cmd = build_run_command(&descriptor);
    let tokens = cmd.tokens();

    assert_eq!(tokens[tokens.len() - 2], "alpine:3.19");
    assert_eq!(tokens[tokens.len() - 1], "sleep infinity");
    assert!(cmd.build().ends_with("alpine:3.19 sleep infinity "));
}

#[test]
fn test_formatting_does_not_mutate_descriptor() {
    let descriptor = descriptor_from_json(WEB_FIXTURE);
    let before = descriptor.clone();

    let first = format_run_command(&descriptor);
    let second = format_run_command(&descriptor);

    assert_eq!(descriptor, before);
    assert_eq!(first, second);
}

#[test]
fn test_captured_descriptor_replays_identically() {
    let descriptor = descriptor_from_json(WEB_FIXTURE);

    let captured = serde_json::to_string(&descriptor).expect("descriptor should serialize");
    let replayed: ContainerDescriptor =
        serde_json::from_str(&captured).expect("descriptor should deserialize");

    assert_eq!(replayed, descriptor);
    assert_eq!(format_run_command(&replayed), format_run_command(&descriptor));
}
