//! # brine-core
//!
//! A wrapper library around the nmap executable. It builds command
//! lines from a typed option table, runs nmap as a blocking subprocess,
//! parses the XML report and exposes a handful of high-level scan
//! operations (host discovery, port scans, a firewall heuristic).
//!
//! All actual probing, fingerprinting and timing lives in nmap itself;
//! this crate is the orchestration and result-shaping layer only.
//!
//! ```no_run
//! use brine_core::{Scanner, ScanType, Target};
//!
//! # fn main() -> brine_core::Result<()> {
//! let scanner = Scanner::new(Target::new("192.168.1.0/24"));
//! for host in scanner.host_discovery_arp()? {
//!     println!("{}", host.address);
//! }
//! let result = scanner.port_scan_spec(ScanType::Syn, "1-1024")?;
//! println!("{} up, {} down", result.up, result.down);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod env;
pub mod error;
pub mod options;
pub mod report;
pub mod scan;
pub mod scanner;
pub mod target;

pub use context::NmapContext;
pub use env::{Environment, SystemEnvironment};
pub use error::{Error, Result};
pub use options::{NmapFlag, NmapOptions};
pub use scan::{ExtraPorts, Host, Os, Port, Protocol, ScanResult, Service};
pub use scanner::{ScanType, Scanner};
pub use target::Target;
