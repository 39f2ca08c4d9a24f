//! Raw nmap XML report.
//!
//! Typed serde structs for the document nmap writes with `-oX`, parsed
//! with `quick_xml`. This layer stays textual: counts, accuracies and
//! port ids keep the string form the report carries; integer parsing
//! belongs to the projection in [`crate::scan`], where a malformed digit
//! is a hard error.
//!
//! Sections nmap omits (no ports probed, no OS match attempted) simply
//! deserialize to empty vectors; tolerance for partial reports lives
//! here, not in ad-hoc null checks downstream.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// The whole `<nmaprun>` document.
#[derive(Debug, Clone, Deserialize)]
pub struct NmapRun {
    #[serde(rename = "host", default)]
    pub hosts: Vec<HostEntry>,
    pub runstats: RunStats,
}

/// One `<host>` entry. Every section besides the address list is
/// optional in the wild.
#[derive(Debug, Clone, Deserialize)]
pub struct HostEntry {
    #[serde(rename = "address", default)]
    pub addresses: Vec<AddressEntry>,
    #[serde(rename = "hostnames", default)]
    pub hostnames: Vec<HostnamesSection>,
    #[serde(rename = "ports", default)]
    pub ports: Vec<PortsSection>,
    #[serde(rename = "os", default)]
    pub os: Vec<OsSection>,
}

/// `<address addr=".." addrtype="ipv4|ipv6|mac"/>`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressEntry {
    #[serde(rename = "@addr")]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addrtype: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostnamesSection {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<HostnameEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostnameEntry {
    #[serde(rename = "@name")]
    pub name: String,
}

/// `<ports>`: individually listed ports plus `<extraports>` summaries
/// grouping many same-state ports under one count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortsSection {
    #[serde(rename = "extraports", default)]
    pub extra_ports: Vec<ExtraPortsEntry>,
    #[serde(rename = "port", default)]
    pub ports: Vec<PortEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtraPortsEntry {
    #[serde(rename = "@state")]
    pub state: String,
    #[serde(rename = "@count")]
    pub count: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortEntry {
    #[serde(rename = "@protocol")]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub portid: String,
    pub state: StateEntry,
    pub service: Option<ServiceEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateEntry {
    #[serde(rename = "@state")]
    pub state: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceEntry {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@product", default)]
    pub product: String,
    #[serde(rename = "@ostype", default)]
    pub ostype: String,
    #[serde(rename = "@version", default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsSection {
    #[serde(rename = "osmatch", default)]
    pub matches: Vec<OsMatchEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsMatchEntry {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@accuracy")]
    pub accuracy: String,
    #[serde(rename = "osclass", default)]
    pub classes: Vec<OsClassEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsClassEntry {
    #[serde(rename = "@osfamily", default)]
    pub family: String,
    #[serde(rename = "@osgen", default)]
    pub generation: String,
}

/// `<runstats><hosts total=".." up=".." down=".."/></runstats>`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunStats {
    pub hosts: HostCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostCounts {
    #[serde(rename = "@total")]
    pub total: String,
    #[serde(rename = "@up")]
    pub up: String,
    #[serde(rename = "@down")]
    pub down: String,
}

/// Parse a report from its XML text.
pub fn parse(xml: &str) -> Result<NmapRun> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Parse a report from the file nmap wrote.
pub fn parse_file(path: &Path) -> Result<NmapRun> {
    let xml = std::fs::read_to_string(path)?;
    parse(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"<?xml version="1.0"?>
<nmaprun scanner="nmap" args="nmap -oX out.xml localhost" version="7.94">
  <host>
    <status state="up" reason="arp-response"/>
    <address addr="192.168.1.1" addrtype="ipv4"/>
    <address addr="AA:BB:CC:DD:EE:FF" addrtype="mac"/>
    <hostnames>
      <hostname name="router.lan" type="PTR"/>
    </hostnames>
    <ports>
      <extraports state="closed" count="997"/>
      <port protocol="tcp" portid="22">
        <state state="open" reason="syn-ack"/>
        <service name="ssh" product="OpenSSH" version="9.6" ostype="Linux"/>
      </port>
      <port protocol="udp" portid="53">
        <state state="filtered" reason="no-response"/>
      </port>
    </ports>
    <os>
      <osmatch name="Linux 5.X" accuracy="96">
        <osclass type="general purpose" osfamily="Linux" osgen="5.X" accuracy="96"/>
      </osmatch>
    </os>
  </host>
  <runstats>
    <finished time="1" elapsed="0.5"/>
    <hosts up="1" down="0" total="1"/>
  </runstats>
</nmaprun>"#;

    #[test]
    fn parses_full_host_entry() {
        let run = parse(MINIMAL).unwrap();
        assert_eq!(run.hosts.len(), 1);

        let host = &run.hosts[0];
        assert_eq!(host.addresses[0].addr, "192.168.1.1");
        assert_eq!(host.addresses[1].addrtype, "mac");
        assert_eq!(host.hostnames[0].hostnames[0].name, "router.lan");

        let ports = &host.ports[0];
        assert_eq!(ports.extra_ports[0].count, "997");
        assert_eq!(ports.ports[0].portid, "22");
        assert_eq!(
            ports.ports[0].service.as_ref().unwrap().product,
            "OpenSSH"
        );
        assert!(ports.ports[1].service.is_none());
        assert_eq!(ports.ports[1].state.state, "filtered");

        assert_eq!(host.os[0].matches[0].accuracy, "96");
        assert_eq!(host.os[0].matches[0].classes[0].family, "Linux");

        assert_eq!(run.runstats.hosts.total, "1");
    }

    #[test]
    fn host_without_sections_parses_to_empty_vectors() {
        let xml = r#"<nmaprun>
  <host><address addr="10.0.0.9" addrtype="ipv4"/></host>
  <runstats><hosts up="0" down="1" total="1"/></runstats>
</nmaprun>"#;
        let run = parse(xml).unwrap();
        let host = &run.hosts[0];
        assert!(host.hostnames.is_empty());
        assert!(host.ports.is_empty());
        assert!(host.os.is_empty());
    }

    #[test]
    fn report_without_hosts_parses() {
        let xml = r#"<nmaprun>
  <runstats><hosts up="0" down="0" total="0"/></runstats>
</nmaprun>"#;
        let run = parse(xml).unwrap();
        assert!(run.hosts.is_empty());
        assert_eq!(run.runstats.hosts.total, "0");
    }

    #[test]
    fn truncated_document_is_a_parse_error() {
        assert!(parse("<nmaprun><host>").is_err());
    }
}
