//! # Nmap option table
//!
//! A closed enumeration of every supported nmap command-line switch, the
//! bijective flag-string table for it, and [`NmapOptions`], the
//! insertion-ordered option set a scan run is built from.
//!
//! Both lookup directions come from one static table, so they cannot
//! drift. The derived maps are validated when first touched and panic on
//! a duplicate entry in either direction.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// One nmap command-line switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NmapFlag {
    InputFilename,
    RandomTargets,
    ExcludeHosts,
    ExcludeFile,
    ListScan,
    PingScan,
    TreatHostsAsOnline,
    TcpSynDiscovery,
    AckDiscovery,
    UdpDiscovery,
    SctpDiscovery,
    IcmpEchoDiscovery,
    IcmpTimestampDiscovery,
    IcmpNetmaskDiscovery,
    ArpPingDiscovery,
    ProtocolPing,
    NeverDnsResolve,
    DnsServers,
    SystemDns,
    Traceroute,
    HostScan,
    TcpSynScan,
    ConnectScan,
    AckScan,
    WindowScan,
    MaimonScan,
    UdpScan,
    TcpNullScan,
    FinScan,
    XmasScan,
    ScanFlags,
    IdleScan,
    SctpInitScan,
    CookieEchoScan,
    IpProtocolScan,
    FtpBounceScan,
    PortSpecification,
    FastScanMode,
    ScanPortsConsecutively,
    TopPorts,
    PortRatio,
    ServiceVersion,
    VersionIntensity,
    VersionLight,
    VersionAll,
    VersionTrace,
    DefaultScriptScan,
    Script,
    ScriptArgs,
    ScriptTrace,
    ScriptUpdateDb,
    OsDetection,
    OsScanLimit,
    OsScanGuess,
    ParanoidTiming,
    SneakyTiming,
    PoliteTiming,
    NormalTiming,
    AggressiveTiming,
    InsaneTiming,
    MinHostGroupSize,
    MaxHostGroupSize,
    MinProbeParallelization,
    MaxProbeParallelization,
    MinRttTimeout,
    MaxRttTimeout,
    InitialRttTimeout,
    MaxRetries,
    HostTimeout,
    ScanDelay,
    MaxScanDelay,
    MinRate,
    MaxRate,
    FragmentPackets,
    Mtu,
    Decoy,
    SpoofSourceAddress,
    Interface,
    SourcePortG,
    SourcePort,
    DataLength,
    IpOptions,
    TimeToLive,
    SpoofMacAddress,
    BadSum,
    Adler32,
    NormalOutput,
    XmlOutput,
    ScriptKiddieOutput,
    GreppableOutput,
    AllThreeOutput,
    Verbose,
    DebugLevel,
    Reason,
    Open,
    PacketTrace,
    PrintHostInterfaceList,
    LogErrors,
    AppendOutput,
    Resume,
    Stylesheet,
    WebXml,
    NoStylesheet,
    Ipv6,
    Aggressive,
    DataDir,
    SendEth,
    SendIp,
    Privileged,
    Unprivileged,
    Version,
    Help,
}

/// Single source of truth for the flag <-> string mapping. Both lookup
/// maps below are derived from this table; nothing else may spell out a
/// flag string.
pub const FLAG_TABLE: &[(NmapFlag, &str)] = &[
    (NmapFlag::InputFilename, "-iL"),
    (NmapFlag::RandomTargets, "-iR"),
    (NmapFlag::ExcludeHosts, "--exclude"),
    (NmapFlag::ExcludeFile, "--excludefile"),
    (NmapFlag::ListScan, "-sL"),
    (NmapFlag::PingScan, "-sP"),
    (NmapFlag::TreatHostsAsOnline, "-PN"),
    (NmapFlag::TcpSynDiscovery, "-PS"),
    (NmapFlag::AckDiscovery, "-PA"),
    (NmapFlag::UdpDiscovery, "-PU"),
    (NmapFlag::SctpDiscovery, "-PY"),
    (NmapFlag::IcmpEchoDiscovery, "-PE"),
    (NmapFlag::IcmpTimestampDiscovery, "-PP"),
    (NmapFlag::IcmpNetmaskDiscovery, "-PM"),
    (NmapFlag::ArpPingDiscovery, "-PR"),
    (NmapFlag::ProtocolPing, "-PO"),
    (NmapFlag::NeverDnsResolve, "-n"),
    (NmapFlag::DnsServers, "--dns-servers"),
    (NmapFlag::SystemDns, "--system-dns"),
    (NmapFlag::Traceroute, "--traceroute"),
    (NmapFlag::HostScan, "-sn"),
    (NmapFlag::TcpSynScan, "-sS"),
    (NmapFlag::ConnectScan, "-sT"),
    (NmapFlag::AckScan, "-sA"),
    (NmapFlag::WindowScan, "-sW"),
    (NmapFlag::MaimonScan, "-sM"),
    (NmapFlag::UdpScan, "-sU"),
    (NmapFlag::TcpNullScan, "-sN"),
    (NmapFlag::FinScan, "-sF"),
    (NmapFlag::XmasScan, "-sX"),
    (NmapFlag::ScanFlags, "--scanflags"),
    (NmapFlag::IdleScan, "-sI"),
    (NmapFlag::SctpInitScan, "-sY"),
    (NmapFlag::CookieEchoScan, "-sZ"),
    (NmapFlag::IpProtocolScan, "-sO"),
    (NmapFlag::FtpBounceScan, "-b"),
    (NmapFlag::PortSpecification, "-p"),
    (NmapFlag::FastScanMode, "-F"),
    (NmapFlag::ScanPortsConsecutively, "-r"),
    (NmapFlag::TopPorts, "--top-ports"),
    (NmapFlag::PortRatio, "--port-ratio"),
    (NmapFlag::ServiceVersion, "-sV"),
    (NmapFlag::VersionIntensity, "--version-intensity"),
    (NmapFlag::VersionLight, "--version-light"),
    (NmapFlag::VersionAll, "--version-all"),
    (NmapFlag::VersionTrace, "--version-trace"),
    (NmapFlag::DefaultScriptScan, "-sC"),
    (NmapFlag::Script, "--script"),
    (NmapFlag::ScriptArgs, "--script-args"),
    (NmapFlag::ScriptTrace, "--script-trace"),
    (NmapFlag::ScriptUpdateDb, "--script-updatedb"),
    (NmapFlag::OsDetection, "-O"),
    (NmapFlag::OsScanLimit, "--osscan-limit"),
    (NmapFlag::OsScanGuess, "--osscan-guess"),
    (NmapFlag::ParanoidTiming, "-T0"),
    (NmapFlag::SneakyTiming, "-T1"),
    (NmapFlag::PoliteTiming, "-T2"),
    (NmapFlag::NormalTiming, "-T3"),
    (NmapFlag::AggressiveTiming, "-T4"),
    (NmapFlag::InsaneTiming, "-T5"),
    (NmapFlag::MinHostGroupSize, "--min-hostgroup"),
    (NmapFlag::MaxHostGroupSize, "--max-hostgroup"),
    (NmapFlag::MinProbeParallelization, "--min-parallelism"),
    (NmapFlag::MaxProbeParallelization, "--max-parallelism"),
    (NmapFlag::MinRttTimeout, "--min-rtt-timeout"),
    (NmapFlag::MaxRttTimeout, "--max-rtt-timeout"),
    (NmapFlag::InitialRttTimeout, "--initial-rtt-timeout"),
    (NmapFlag::MaxRetries, "--max-retries"),
    (NmapFlag::HostTimeout, "--host-timeout"),
    (NmapFlag::ScanDelay, "--scan-delay"),
    (NmapFlag::MaxScanDelay, "--max-scan-delay"),
    (NmapFlag::MinRate, "--min-rate"),
    (NmapFlag::MaxRate, "--max-rate"),
    (NmapFlag::FragmentPackets, "-f"),
    (NmapFlag::Mtu, "--mtu"),
    (NmapFlag::Decoy, "-D"),
    (NmapFlag::SpoofSourceAddress, "-S"),
    (NmapFlag::Interface, "-e"),
    (NmapFlag::SourcePortG, "-g"),
    (NmapFlag::SourcePort, "--source-port"),
    (NmapFlag::DataLength, "--data-length"),
    (NmapFlag::IpOptions, "--ip-options"),
    (NmapFlag::TimeToLive, "--ttl"),
    (NmapFlag::SpoofMacAddress, "--spoof-mac"),
    (NmapFlag::BadSum, "--badsum"),
    (NmapFlag::Adler32, "--adler32"),
    (NmapFlag::NormalOutput, "-oN"),
    (NmapFlag::XmlOutput, "-oX"),
    (NmapFlag::ScriptKiddieOutput, "-oS"),
    (NmapFlag::GreppableOutput, "-oG"),
    (NmapFlag::AllThreeOutput, "-oA"),
    (NmapFlag::Verbose, "-v"),
    (NmapFlag::DebugLevel, "-d"),
    (NmapFlag::Reason, "--reason"),
    (NmapFlag::Open, "--open"),
    (NmapFlag::PacketTrace, "--packet-trace"),
    (NmapFlag::PrintHostInterfaceList, "--iflist"),
    (NmapFlag::LogErrors, "--log-errors"),
    (NmapFlag::AppendOutput, "--append-output"),
    (NmapFlag::Resume, "--resume"),
    (NmapFlag::Stylesheet, "--stylesheet"),
    (NmapFlag::WebXml, "--webxml"),
    (NmapFlag::NoStylesheet, "--no-stylesheet"),
    (NmapFlag::Ipv6, "-6"),
    (NmapFlag::Aggressive, "-A"),
    (NmapFlag::DataDir, "--datadir"),
    (NmapFlag::SendEth, "--send-eth"),
    (NmapFlag::SendIp, "--send-ip"),
    (NmapFlag::Privileged, "--privileged"),
    (NmapFlag::Unprivileged, "--unprivileged"),
    (NmapFlag::Version, "-V"),
    (NmapFlag::Help, "-h"),
];

static FLAG_TO_STR: LazyLock<HashMap<NmapFlag, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(FLAG_TABLE.len());
    for &(flag, s) in FLAG_TABLE {
        if map.insert(flag, s).is_some() {
            panic!("duplicate flag in table: {flag:?}");
        }
    }
    map
});

static STR_TO_FLAG: LazyLock<HashMap<&'static str, NmapFlag>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(FLAG_TABLE.len());
    for &(flag, s) in FLAG_TABLE {
        if map.insert(s, flag).is_some() {
            panic!("duplicate flag string in table: {s}");
        }
    }
    map
});

impl NmapFlag {
    /// The literal command-line token for this flag. Total over the enum.
    pub fn flag(self) -> &'static str {
        FLAG_TO_STR[&self]
    }

    /// Reverse lookup from a command-line token.
    pub fn from_flag(s: &str) -> Option<NmapFlag> {
        STR_TO_FLAG.get(s).copied()
    }
}

impl fmt::Display for NmapFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// The set of options a run is invoked with.
///
/// Entries keep insertion order, which is also serialization order.
/// Adding a flag that is already present joins the new value onto the old
/// one with a comma, matching how nmap accepts repeated list arguments
/// (`-D decoy1,decoy2`).
#[derive(Debug, Clone, Default)]
pub struct NmapOptions {
    entries: Vec<(NmapFlag, String)>,
}

impl NmapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag with an argument. If the flag is already set, the stored
    /// value becomes `"<old>,<new>"` instead of being overwritten.
    pub fn add(&mut self, flag: NmapFlag, value: &str) {
        match self.entries.iter_mut().find(|(f, _)| *f == flag) {
            Some((_, existing)) => {
                existing.push(',');
                existing.push_str(value);
            }
            None => self.entries.push((flag, value.to_string())),
        }
    }

    /// Add a boolean flag (no argument).
    pub fn add_flag(&mut self, flag: NmapFlag) {
        self.add(flag, "");
    }

    /// Add every flag in `flags` as a boolean flag.
    pub fn add_all(&mut self, flags: &[NmapFlag]) {
        for &flag in flags {
            self.add_flag(flag);
        }
    }

    /// Insert or overwrite, bypassing comma accumulation. Used where a
    /// value is not negotiable, such as forcing the `-oX` report path.
    pub fn set(&mut self, flag: NmapFlag, value: &str) {
        match self.entries.iter_mut().find(|(f, _)| *f == flag) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((flag, value.to_string())),
        }
    }

    /// Merge another option set into this one through [`NmapOptions::add`].
    pub fn extend_from(&mut self, other: &NmapOptions) {
        for (flag, value) in other.iter() {
            self.add(flag, value);
        }
    }

    pub fn remove(&mut self, flag: NmapFlag) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(f, _)| *f != flag);
        self.entries.len() != before
    }

    pub fn get(&self, flag: NmapFlag) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == flag)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, flag: NmapFlag) -> bool {
        self.entries.iter().any(|(f, _)| *f == flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NmapFlag, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for NmapOptions {
    /// Serializes as `"<flag> <value> "` per entry in insertion order,
    /// trimmed. Values are not shell-quoted; a value containing spaces
    /// will be split by the argument tokenizer. Documented limitation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (flag, value) in self.iter() {
            out.push_str(flag.flag());
            out.push(' ');
            out.push_str(value);
            out.push(' ');
        }
        f.write_str(out.trim())
    }
}

impl FromIterator<(NmapFlag, String)> for NmapOptions {
    fn from_iter<I: IntoIterator<Item = (NmapFlag, String)>>(iter: I) -> Self {
        let mut opts = NmapOptions::new();
        for (flag, value) in iter {
            opts.add(flag, &value);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_table_is_a_bijection() {
        // Round-trip every entry in both directions.
        for &(flag, s) in FLAG_TABLE {
            assert_eq!(flag.flag(), s);
            assert_eq!(NmapFlag::from_flag(s), Some(flag), "string {s}");
            assert_eq!(NmapFlag::from_flag(flag.flag()), Some(flag), "{flag:?}");
        }
        // No entry was swallowed by a duplicate key on either side.
        assert_eq!(FLAG_TO_STR.len(), FLAG_TABLE.len());
        assert_eq!(STR_TO_FLAG.len(), FLAG_TABLE.len());
    }

    #[test]
    fn unknown_flag_string_maps_to_none() {
        assert_eq!(NmapFlag::from_flag("--no-such-flag"), None);
        assert_eq!(NmapFlag::from_flag(""), None);
    }

    #[test]
    fn empty_set_serializes_to_empty_string() {
        assert_eq!(NmapOptions::new().to_string(), "");
    }

    #[test]
    fn boolean_flag_serializes_without_argument() {
        let mut opts = NmapOptions::new();
        opts.add_flag(NmapFlag::TcpSynScan);
        assert_eq!(opts.to_string(), "-sS");
    }

    #[test]
    fn repeated_add_joins_values_with_comma() {
        let mut opts = NmapOptions::new();
        opts.add(NmapFlag::Decoy, "a");
        opts.add(NmapFlag::Decoy, "b");
        assert_eq!(opts.get(NmapFlag::Decoy), Some("a,b"));
        assert_eq!(opts.to_string(), "-D a,b");
    }

    #[test]
    fn set_overwrites_instead_of_joining() {
        let mut opts = NmapOptions::new();
        opts.add(NmapFlag::XmlOutput, "/tmp/a.xml");
        opts.set(NmapFlag::XmlOutput, "/tmp/b.xml");
        assert_eq!(opts.get(NmapFlag::XmlOutput), Some("/tmp/b.xml"));
    }

    #[test]
    fn serialization_preserves_insertion_order() {
        let mut opts = NmapOptions::new();
        opts.add(NmapFlag::PortSpecification, "80,443");
        opts.add_flag(NmapFlag::ServiceVersion);
        opts.add_flag(NmapFlag::OsDetection);
        assert_eq!(opts.to_string(), "-p 80,443 -sV  -O");
    }

    #[test]
    fn extend_from_merges_through_add() {
        let mut persistent = NmapOptions::new();
        persistent.add(NmapFlag::ExcludeHosts, "10.0.0.1");

        let mut opts = NmapOptions::new();
        opts.add(NmapFlag::ExcludeHosts, "10.0.0.2");
        opts.extend_from(&persistent);

        assert_eq!(opts.get(NmapFlag::ExcludeHosts), Some("10.0.0.2,10.0.0.1"));
    }

    #[test]
    fn remove_deletes_the_entry() {
        let mut opts = NmapOptions::new();
        opts.add_flag(NmapFlag::Verbose);
        assert!(opts.contains(NmapFlag::Verbose));
        assert!(opts.remove(NmapFlag::Verbose));
        assert!(!opts.remove(NmapFlag::Verbose));
        assert!(opts.is_empty());
    }
}
