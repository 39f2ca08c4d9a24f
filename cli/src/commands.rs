pub mod discover;
pub mod firewall;
pub mod info;
pub mod scan;

use brine_core::{NmapFlag, NmapOptions, ScanType};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "brine")]
#[command(about = "A high-level nmap wrapper.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hosts to exclude from every scan (nmap --exclude syntax)
    #[arg(long, global = true)]
    pub exclude: Option<String>,

    /// nmap timing template, 0 (paranoid) through 5 (insane)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub timing: Option<u8>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover live hosts on a network
    #[command(alias = "d")]
    Discover {
        target: String,
        /// Probing method for the sweep
        #[arg(long, value_enum, default_value_t = DiscoveryMethod::Icmp)]
        method: DiscoveryMethod,
    },
    /// Scan ports on one or more hosts
    #[command(alias = "s")]
    Scan {
        target: String,
        /// Scan technique
        #[arg(long = "type", value_enum, default_value_t = ScanTypeArg::Default)]
        scan_type: ScanTypeArg,
        /// Port specification (e.g. "22,80,8000-8100"); nmap default when omitted
        #[arg(long, short)]
        ports: Option<String>,
    },
    /// Check whether the target looks firewalled
    #[command(alias = "f")]
    Firewall { target: String },
    /// List this machine's network interfaces
    #[command(alias = "i")]
    Interfaces,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DiscoveryMethod {
    /// ARP ping sweep (local segment only)
    Arp,
    /// ICMP echo sweep
    Icmp,
    /// TCP SYN discovery with OS detection
    Syn,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScanTypeArg {
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

impl From<ScanTypeArg> for ScanType {
    fn from(arg: ScanTypeArg) -> Self {
        match arg {
            ScanTypeArg::Default => ScanType::Default,
            ScanTypeArg::Null => ScanType::Null,
            ScanTypeArg::Fin => ScanType::Fin,
            ScanTypeArg::Xmas => ScanType::Xmas,
            ScanTypeArg::Syn => ScanType::Syn,
            ScanTypeArg::Connect => ScanType::Connect,
            ScanTypeArg::Ack => ScanType::Ack,
            ScanTypeArg::Window => ScanType::Window,
            ScanTypeArg::Maimon => ScanType::Maimon,
            ScanTypeArg::SctpInit => ScanType::SctpInit,
            ScanTypeArg::SctpCookieEcho => ScanType::SctpCookieEcho,
            ScanTypeArg::Udp => ScanType::Udp,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Options applied to every run this invocation performs.
    pub fn persistent_options(&self) -> Option<NmapOptions> {
        let mut options = NmapOptions::new();
        if let Some(exclude) = &self.exclude {
            options.add(NmapFlag::ExcludeHosts, exclude);
        }
        if let Some(timing) = self.timing {
            let flag = match timing {
                0 => NmapFlag::ParanoidTiming,
                1 => NmapFlag::SneakyTiming,
                2 => NmapFlag::PoliteTiming,
                3 => NmapFlag::NormalTiming,
                4 => NmapFlag::AggressiveTiming,
                _ => NmapFlag::InsaneTiming,
            };
            options.add_flag(flag);
        }
        (!options.is_empty()).then_some(options)
    }
}
