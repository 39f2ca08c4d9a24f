use brine_core::{NmapOptions, Scanner, Target};

use crate::commands::ScanTypeArg;
use crate::terminal::print;

pub fn scan(
    target: &str,
    scan_type: ScanTypeArg,
    ports: Option<&str>,
    persistent: Option<NmapOptions>,
) -> anyhow::Result<()> {
    let mut scanner = Scanner::new(Target::new(target));
    if let Some(options) = persistent {
        scanner = scanner.persistent_options(options);
    }

    print::header("port scan");
    let result = match ports {
        Some(spec) => scanner.port_scan_spec(scan_type.into(), spec)?,
        None => scanner.port_scan_with(scan_type.into())?,
    };

    for host in &result.hosts {
        print::host_details(host);
        println!();
    }
    print::summary(&result);
    Ok(())
}
