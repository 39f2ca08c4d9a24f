#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use brine_core::{Environment, NmapContext, ScanType, Scanner, Target};
use pnet::datalink::NetworkInterface;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/two_hosts.xml")
}

/// Writes a stub `nmap` that ignores every option except `-oX` and
/// copies the fixture report to the requested output path. This
/// exercises the real subprocess plumbing: argument serialization,
/// the forced output path, the post-run existence check and the XML
/// read-back.
fn stub_nmap(dir: &Path) -> PathBuf {
    let script = dir.join("nmap");
    let body = format!(
        "#!/bin/sh\n\
         out=\"\"\n\
         prev=\"\"\n\
         for a in \"$@\"; do\n\
         \x20 if [ \"$prev\" = \"-oX\" ]; then out=\"$a\"; fi\n\
         \x20 prev=\"$a\"\n\
         done\n\
         cp \"{}\" \"$out\"\n",
        fixture_path().display()
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

struct StubEnvironment {
    nmap: PathBuf,
}

impl Environment for StubEnvironment {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        Vec::new()
    }

    fn network_available(&self) -> bool {
        true
    }

    fn locate_executable(&self, _filename: &str) -> Option<PathBuf> {
        Some(self.nmap.clone())
    }
}

fn stub_scanner(dir: &Path, target: &str) -> Scanner {
    Scanner::with_environment(
        Target::new(target),
        Box::new(StubEnvironment {
            nmap: stub_nmap(dir),
        }),
    )
}

#[test]
fn port_scan_projects_the_two_host_report() {
    let dir = TempDir::with_prefix("brine-e2e-").unwrap();
    let scanner = stub_scanner(dir.path(), "10.0.0.1 10.0.0.2");

    let result = scanner
        .port_scan_ports(ScanType::Syn, &[21, 22, 23])
        .unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(result.up, 1);
    assert_eq!(result.down, 1);
    assert_eq!(result.hosts.len(), 2);

    let up = &result.hosts[0];
    assert_eq!(up.address.to_string(), "10.0.0.1");
    assert_eq!(up.hostnames, vec!["ftp.lan".to_string()]);
    assert_eq!(up.ports.len(), 3);
    let filtered: Vec<bool> = up.ports.iter().map(|p| p.filtered).collect();
    assert_eq!(filtered, vec![true, false, false]);
    assert_eq!(up.ports[1].service.name, "ssh");
    assert_eq!(up.ports[1].service.product, "OpenSSH");
    assert!(up.os_matches.is_empty());

    let down = &result.hosts[1];
    assert_eq!(down.address.to_string(), "10.0.0.2");
    assert!(down.ports.is_empty());
    assert!(down.extra_ports.is_empty());
}

#[test]
fn firewall_check_sees_the_filtered_port() {
    let dir = TempDir::with_prefix("brine-e2e-").unwrap();
    let scanner = stub_scanner(dir.path(), "10.0.0.0/30");

    // Port 21 in the fixture is filtered.
    assert!(scanner.firewall_protected().unwrap());
}

#[test]
fn discovery_returns_every_reported_host() {
    let dir = TempDir::with_prefix("brine-e2e-").unwrap();
    let scanner = stub_scanner(dir.path(), "10.0.0.0/30");

    let hosts = scanner.host_discovery_arp().unwrap();
    assert_eq!(hosts.len(), 2);
}

#[test]
fn explicit_context_writes_the_forced_output_path() {
    let dir = TempDir::with_prefix("brine-e2e-").unwrap();
    let report_path = dir.path().join("report.xml");

    let mut ctx = NmapContext::with_paths(stub_nmap(dir.path()), &report_path);
    ctx.target = "10.0.0.1".into();

    let run = ctx.run().unwrap();
    assert!(report_path.is_file());
    assert_eq!(run.runstats.hosts.total, "2");
    assert_eq!(run.hosts.len(), 2);
}
