//! # Scanner facade
//!
//! High-level scan operations over one target: host discovery variants,
//! the port-scan family and the firewall heuristic. Each operation
//! builds a fresh [`NmapContext`] from the scanner's target, its
//! persistent options and the operation's fixed flag combination, runs
//! it to completion and projects the report.
//!
//! Everything here is synchronous and single-threaded; one operation is
//! one blocking nmap subprocess. A `Scanner` shared across threads must
//! be serialized by the caller.

use pnet::datalink::NetworkInterface;
use tracing::info;

use crate::context::NmapContext;
use crate::env::{Environment, SystemEnvironment};
use crate::error::{Error, Result};
use crate::options::{NmapFlag, NmapOptions};
use crate::scan::{Host, ScanResult};
use crate::target::Target;

/// A named probing technique for the port-scan family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanType {
    /// Let nmap pick; no scan-type flag is added.
    #[default]
    Default,
    Null,
    Fin,
    Xmas,
    Syn,
    Connect,
    Ack,
    Window,
    Maimon,
    SctpInit,
    SctpCookieEcho,
    Udp,
}

impl ScanType {
    /// The flag for this technique; `None` for [`ScanType::Default`].
    pub fn flag(self) -> Option<NmapFlag> {
        match self {
            ScanType::Default => None,
            ScanType::Null => Some(NmapFlag::TcpNullScan),
            ScanType::Fin => Some(NmapFlag::FinScan),
            ScanType::Xmas => Some(NmapFlag::XmasScan),
            ScanType::Syn => Some(NmapFlag::TcpSynScan),
            ScanType::Connect => Some(NmapFlag::ConnectScan),
            ScanType::Ack => Some(NmapFlag::AckScan),
            ScanType::Window => Some(NmapFlag::WindowScan),
            ScanType::Maimon => Some(NmapFlag::MaimonScan),
            ScanType::SctpInit => Some(NmapFlag::SctpInitScan),
            ScanType::SctpCookieEcho => Some(NmapFlag::CookieEchoScan),
            ScanType::Udp => Some(NmapFlag::UdpScan),
        }
    }
}

pub struct Scanner {
    target: Target,
    /// Options merged into every context this scanner builds, for flags
    /// the caller wants on every run (an exclusion list, a timing
    /// template).
    persistent_options: Option<NmapOptions>,
    env: Box<dyn Environment>,
}

impl Scanner {
    pub fn new(target: Target) -> Self {
        Scanner {
            target,
            persistent_options: None,
            env: Box::new(SystemEnvironment),
        }
    }

    /// Swap in an alternative environment; used by tests and by callers
    /// that pin the nmap location themselves.
    pub fn with_environment(target: Target, env: Box<dyn Environment>) -> Self {
        Scanner {
            target,
            persistent_options: None,
            env,
        }
    }

    pub fn persistent_options(mut self, options: NmapOptions) -> Self {
        self.persistent_options = Some(options);
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// One context carrying the target and the persistent options.
    /// Fails before any subprocess work when no network is reachable.
    fn context(&self) -> Result<NmapContext> {
        if !self.env.network_available() {
            return Err(Error::NoNetwork);
        }

        let mut ctx = NmapContext::new(self.env.as_ref())?;
        ctx.target = self.target.to_string();
        if let Some(persistent) = &self.persistent_options {
            ctx.options.extend_from(persistent);
        }
        Ok(ctx)
    }

    fn discover(&self, flags: &[NmapFlag]) -> Result<Vec<Host>> {
        let mut ctx = self.context()?;
        ctx.options.add_all(flags);
        let result = ScanResult::try_from(&ctx.run()?)?;
        info!(scan_target = %self.target, hosts = result.hosts.len(), "discovery finished");
        Ok(result.hosts)
    }

    /// ARP ping sweep. Only meaningful on the local segment.
    pub fn host_discovery_arp(&self) -> Result<Vec<Host>> {
        self.discover(&[NmapFlag::PingScan, NmapFlag::ArpPingDiscovery])
    }

    /// ICMP echo sweep.
    pub fn host_discovery_icmp(&self) -> Result<Vec<Host>> {
        self.discover(&[NmapFlag::PingScan, NmapFlag::IcmpEchoDiscovery])
    }

    /// SYN discovery with OS detection. This is the one discovery
    /// operation that layers `-O` on; the port-scan family never does.
    pub fn host_discovery(&self) -> Result<Vec<Host>> {
        self.discover(&[NmapFlag::TcpSynScan, NmapFlag::OsDetection])
    }

    /// True when any scanned host looks firewalled under an ACK scan
    /// with fragmented packets. See [`Host::firewalled`] for the exact
    /// (first-extraports-entry-only) rule.
    pub fn firewall_protected(&self) -> Result<bool> {
        let mut ctx = self.context()?;
        ctx.options
            .add_all(&[NmapFlag::AckScan, NmapFlag::FragmentPackets]);
        let result = ScanResult::try_from(&ctx.run()?)?;
        Ok(result.hosts.iter().any(Host::firewalled))
    }

    fn port_scan_common(&self, scan_type: ScanType, ports: Option<&str>) -> Result<ScanResult> {
        let mut ctx = self.context()?;
        if let Some(flag) = scan_type.flag() {
            ctx.options.add_flag(flag);
        }
        match ports {
            Some(spec) if !spec.is_empty() => {
                ctx.options.add(NmapFlag::PortSpecification, spec);
            }
            _ => {}
        }
        ScanResult::try_from(&ctx.run()?)
    }

    /// Port scan with nmap's default technique and port selection.
    pub fn port_scan(&self) -> Result<ScanResult> {
        self.port_scan_common(ScanType::Default, None)
    }

    /// Port scan with an explicit technique, default port selection.
    pub fn port_scan_with(&self, scan_type: ScanType) -> Result<ScanResult> {
        self.port_scan_common(scan_type, None)
    }

    /// Port scan over an explicit port list, comma-joined into `-p`.
    pub fn port_scan_ports(&self, scan_type: ScanType, ports: &[u16]) -> Result<ScanResult> {
        let spec = ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.port_scan_common(scan_type, Some(&spec))
    }

    /// Port scan with a raw nmap port specification (`"10-20,33"`).
    pub fn port_scan_spec(&self, scan_type: ScanType, ports: &str) -> Result<ScanResult> {
        self.port_scan_common(scan_type, Some(ports))
    }

    /// The caller's own interfaces; purely an environment lookup, no
    /// subprocess.
    pub fn interfaces(&self) -> Vec<NetworkInterface> {
        self.env.interfaces()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Environment stub with a switchable network and PATH result.
    struct FakeEnvironment {
        up: bool,
        nmap: Option<PathBuf>,
    }

    impl Environment for FakeEnvironment {
        fn interfaces(&self) -> Vec<NetworkInterface> {
            Vec::new()
        }

        fn network_available(&self) -> bool {
            self.up
        }

        fn locate_executable(&self, _filename: &str) -> Option<PathBuf> {
            self.nmap.clone()
        }
    }

    fn scanner(up: bool, nmap: Option<PathBuf>) -> Scanner {
        Scanner::with_environment(
            Target::new("10.0.0.0/30"),
            Box::new(FakeEnvironment { up, nmap }),
        )
    }

    #[test]
    fn no_network_fails_before_any_subprocess_work() {
        let s = scanner(false, Some(PathBuf::from("/bin/sh")));
        assert!(matches!(s.host_discovery_arp(), Err(Error::NoNetwork)));
        assert!(matches!(s.port_scan(), Err(Error::NoNetwork)));
        assert!(matches!(s.firewall_protected(), Err(Error::NoNetwork)));
    }

    #[test]
    fn unlocatable_nmap_is_its_own_error() {
        let s = scanner(true, None);
        assert!(matches!(s.host_discovery_icmp(), Err(Error::NmapNotFound)));
    }

    #[test]
    fn scan_type_flags_match_the_fixed_table() {
        let cases = [
            (ScanType::Null, Some(NmapFlag::TcpNullScan)),
            (ScanType::Fin, Some(NmapFlag::FinScan)),
            (ScanType::Xmas, Some(NmapFlag::XmasScan)),
            (ScanType::Syn, Some(NmapFlag::TcpSynScan)),
            (ScanType::Connect, Some(NmapFlag::ConnectScan)),
            (ScanType::Ack, Some(NmapFlag::AckScan)),
            (ScanType::Window, Some(NmapFlag::WindowScan)),
            (ScanType::Maimon, Some(NmapFlag::MaimonScan)),
            (ScanType::SctpInit, Some(NmapFlag::SctpInitScan)),
            (ScanType::SctpCookieEcho, Some(NmapFlag::CookieEchoScan)),
            (ScanType::Udp, Some(NmapFlag::UdpScan)),
            (ScanType::Default, None),
        ];
        for (scan_type, expected) in cases {
            assert_eq!(scan_type.flag(), expected, "{scan_type:?}");
        }
    }

    #[test]
    fn interfaces_need_no_network_or_nmap() {
        let s = scanner(false, None);
        assert!(s.interfaces().is_empty());
    }
}
