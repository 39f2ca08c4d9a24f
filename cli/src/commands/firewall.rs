use brine_core::{NmapOptions, Scanner, Target};
use colored::*;

use crate::terminal::print;

pub fn firewall(target: &str, persistent: Option<NmapOptions>) -> anyhow::Result<()> {
    let mut scanner = Scanner::new(Target::new(target));
    if let Some(options) = persistent {
        scanner = scanner.persistent_options(options);
    }

    print::header("firewall check");
    if scanner.firewall_protected()? {
        println!("{} appears to be {}", target, "firewalled".yellow().bold());
    } else {
        println!("{} shows {}", target, "no firewall signs".green());
    }
    Ok(())
}
