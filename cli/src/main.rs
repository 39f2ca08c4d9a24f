mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, firewall, info, scan};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    logging::init();

    let persistent = cli.persistent_options();

    match cli.command {
        Commands::Discover { target, method } => discover::discover(&target, method, persistent),
        Commands::Scan {
            target,
            scan_type,
            ports,
        } => scan::scan(&target, scan_type, ports.as_deref(), persistent),
        Commands::Firewall { target } => firewall::firewall(&target, persistent),
        Commands::Interfaces => info::interfaces(),
    }
}
