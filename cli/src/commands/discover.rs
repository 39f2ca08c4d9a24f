use brine_core::{NmapOptions, Scanner, Target};
use colored::*;

use crate::commands::DiscoveryMethod;
use crate::terminal::print;

pub fn discover(
    target: &str,
    method: DiscoveryMethod,
    persistent: Option<NmapOptions>,
) -> anyhow::Result<()> {
    let mut scanner = Scanner::new(Target::new(target));
    if let Some(options) = persistent {
        scanner = scanner.persistent_options(options);
    }

    print::header("host discovery");
    let hosts = match method {
        DiscoveryMethod::Arp => scanner.host_discovery_arp()?,
        DiscoveryMethod::Icmp => scanner.host_discovery_icmp()?,
        DiscoveryMethod::Syn => scanner.host_discovery()?,
    };

    if hosts.is_empty() {
        println!("{}", "no hosts found".dimmed());
        return Ok(());
    }

    for host in &hosts {
        match method {
            // SYN discovery carries OS detail worth showing.
            DiscoveryMethod::Syn => print::host_details(host),
            _ => print::host_line(host),
        }
    }
    println!("{}", format!("{} host(s) up", hosts.len()).bold());
    Ok(())
}
