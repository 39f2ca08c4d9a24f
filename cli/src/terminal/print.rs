use brine_core::{Host, ScanResult};
use colored::*;

pub fn header(title: &str) {
    println!("{}", format!("══ {title} ══").bright_black());
}

pub fn host_line(host: &Host) {
    let addr = host.address.to_string().bold().green();
    if host.hostnames.is_empty() {
        println!("{addr}");
    } else {
        println!("{addr} ({})", host.hostnames.join(", ").cyan());
    }
}

pub fn host_details(host: &Host) {
    host_line(host);

    for port in &host.ports {
        let state = if port.filtered {
            "filtered".yellow()
        } else {
            "open/closed".normal()
        };
        let mut line = format!("  {}/{} {}", port.number, port.protocol, state);
        if !port.service.name.is_empty() {
            line.push_str(&format!(" {}", port.service.name.cyan()));
            if !port.service.product.is_empty() {
                line.push_str(&format!(" ({} {})", port.service.product, port.service.version));
            }
        }
        println!("{line}");
    }

    for extra in &host.extra_ports {
        println!("  {} ports {}", extra.count, extra.state.dimmed());
    }

    for os in &host.os_matches {
        println!(
            "  os: {} ({}% | {} {})",
            os.name.bold(),
            os.certainty,
            os.family,
            os.generation
        );
    }
}

pub fn summary(result: &ScanResult) {
    println!(
        "{}",
        format!(
            "{} host(s) scanned: {} up, {} down",
            result.total, result.up, result.down
        )
        .bold()
    );
}
