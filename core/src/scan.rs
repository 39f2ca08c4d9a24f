//! # Scan result domain model
//!
//! Projects the raw XML report into a flat host/port/OS model. The
//! projection is tolerant of nmap omitting whole sections of a host
//! entry (no ports section, no OS section) but strict about the content
//! of what is present: a non-numeric count or accuracy propagates as a
//! [`Error::ReportParse`], since a malformed report means a tool or
//! version mismatch worth surfacing, not something to default away.

use std::fmt;
use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::report::{HostEntry, NmapRun, OsSection, PortsSection};

/// Transport protocol of a scanned port.
///
/// `Unknown` is the sentinel for protocols the enum cannot represent;
/// the report's `sctp` maps there. `ip` keeps the fully uppercase
/// rendering, the others capitalize. The asymmetry is deliberate and
/// mirrors the names the rest of the stack expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    Tcp,
    Udp,
    Ip,
    #[default]
    Unknown,
}

impl Protocol {
    fn from_report(s: &str) -> Result<Protocol> {
        match s {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            "ip" => Ok(Protocol::Ip),
            // No Sctp variant downstream; mapped to the sentinel.
            "sctp" => Ok(Protocol::Unknown),
            other => Err(Error::ReportParse(format!(
                "unrecognized port protocol: {other}"
            ))),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Protocol::Tcp => "Tcp",
            Protocol::Udp => "Udp",
            Protocol::Ip => "IP",
            Protocol::Unknown => "Unknown",
        })
    }
}

/// What nmap learned about the service behind a port. Zero-valued when
/// the report has no service node for the port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub product: String,
    pub os: String,
    pub version: String,
}

/// One individually listed port of a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub number: u16,
    pub protocol: Protocol,
    /// True iff the report's state string is exactly `"filtered"`.
    pub filtered: bool,
    pub service: Service,
}

/// A summary row for many ports sharing one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraPorts {
    pub count: u32,
    pub state: String,
}

/// One OS match for a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Os {
    pub certainty: u32,
    pub name: String,
    /// Family and generation come from the first osclass entry of the
    /// match only, even when nmap lists several. Known limitation.
    pub family: String,
    pub generation: String,
}

/// A scanned host, fully derived from one report entry.
#[derive(Debug, Clone)]
pub struct Host {
    pub address: IpAddr,
    pub hostnames: Vec<String>,
    pub ports: Vec<Port>,
    pub extra_ports: Vec<ExtraPorts>,
    pub os_matches: Vec<Os>,
}

impl Host {
    /// The firewall heuristic for a single host: its first extra-ports
    /// summary has a positive count in state `"filtered"`, or any
    /// listed port is filtered. Only the first extra-ports entry is
    /// inspected; a later filtered group goes undetected. Known
    /// limitation, kept as documented behavior.
    pub fn firewalled(&self) -> bool {
        self.extra_ports
            .first()
            .is_some_and(|ep| ep.count > 0 && ep.state == "filtered")
            || self.ports.iter().any(|p| p.filtered)
    }
}

/// The outcome of one nmap run.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub total: u32,
    pub up: u32,
    pub down: u32,
    pub hosts: Vec<Host>,
}

impl TryFrom<&NmapRun> for ScanResult {
    type Error = Error;

    fn try_from(run: &NmapRun) -> Result<ScanResult> {
        Ok(ScanResult {
            total: parse_u32("runstats total", &run.runstats.hosts.total)?,
            up: parse_u32("runstats up", &run.runstats.hosts.up)?,
            down: parse_u32("runstats down", &run.runstats.hosts.down)?,
            hosts: run
                .hosts
                .iter()
                .map(project_host)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

fn project_host(entry: &HostEntry) -> Result<Host> {
    let addr = entry
        .addresses
        .first()
        .ok_or_else(|| Error::ReportParse("host entry missing address".into()))?;
    let address: IpAddr = addr
        .addr
        .parse()
        .map_err(|_| Error::ReportParse(format!("unparseable host address: {}", addr.addr)))?;

    // Only the first section of each kind counts; nmap emits at most one
    // of each in practice.
    let ports_section = entry.ports.first();

    Ok(Host {
        address,
        hostnames: entry
            .hostnames
            .first()
            .map(|section| section.hostnames.iter().map(|h| h.name.clone()).collect())
            .unwrap_or_default(),
        ports: ports_section.map(project_ports).transpose()?.unwrap_or_default(),
        extra_ports: ports_section
            .map(project_extra_ports)
            .transpose()?
            .unwrap_or_default(),
        os_matches: entry
            .os
            .first()
            .map(project_os_matches)
            .transpose()?
            .unwrap_or_default(),
    })
}

fn project_ports(section: &PortsSection) -> Result<Vec<Port>> {
    section
        .ports
        .iter()
        .map(|p| {
            Ok(Port {
                number: p
                    .portid
                    .parse()
                    .map_err(|_| Error::ReportParse(format!("non-numeric port id: {}", p.portid)))?,
                protocol: Protocol::from_report(&p.protocol)?,
                filtered: p.state.state == "filtered",
                service: p
                    .service
                    .as_ref()
                    .map(|s| Service {
                        name: s.name.clone(),
                        product: s.product.clone(),
                        os: s.ostype.clone(),
                        version: s.version.clone(),
                    })
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn project_extra_ports(section: &PortsSection) -> Result<Vec<ExtraPorts>> {
    section
        .extra_ports
        .iter()
        .map(|ep| {
            Ok(ExtraPorts {
                count: parse_u32("extraports count", &ep.count)?,
                state: ep.state.clone(),
            })
        })
        .collect()
}

fn project_os_matches(section: &OsSection) -> Result<Vec<Os>> {
    section
        .matches
        .iter()
        .map(|m| {
            let class = m.classes.first().ok_or_else(|| {
                Error::ReportParse(format!("os match without osclass: {}", m.name))
            })?;
            Ok(Os {
                certainty: parse_u32("os accuracy", &m.accuracy)?,
                name: m.name.clone(),
                family: class.family.clone(),
                generation: class.generation.clone(),
            })
        })
        .collect()
}

fn parse_u32(field: &str, value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| Error::ReportParse(format!("non-numeric {field}: {value:?}")))
}
