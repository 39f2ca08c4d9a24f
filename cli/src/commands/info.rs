use colored::*;
use pnet::datalink;

use crate::terminal::print;

/// Local interface listing; no subprocess, purely the environment.
pub fn interfaces() -> anyhow::Result<()> {
    print::header("network interfaces");

    for intf in datalink::interfaces() {
        let state = if intf.is_up() {
            "up".green()
        } else {
            "down".red()
        };
        let mut line = format!("{} [{}]", intf.name.bold(), state);
        if let Some(mac) = intf.mac {
            line.push_str(&format!(" {mac}"));
        }
        for ip in &intf.ips {
            line.push_str(&format!(" {ip}"));
        }
        println!("{line}");
    }
    Ok(())
}
