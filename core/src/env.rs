//! Injectable view of the operating environment.
//!
//! The scanner only needs three things from the outside world: whether a
//! network is reachable, where the nmap binary lives, and the local
//! interface list. Hiding them behind a trait keeps the orchestration
//! logic testable without a real network or a real PATH.

use std::env;
use std::path::PathBuf;

use pnet::datalink::{self, NetworkInterface};

/// Filename of the wrapped executable as searched for on PATH.
pub const NMAP_BINARY: &str = "nmap";

pub trait Environment {
    /// The caller's own network interfaces.
    fn interfaces(&self) -> Vec<NetworkInterface>;

    /// True when at least one non-loopback interface is up and addressed.
    fn network_available(&self) -> bool {
        self.interfaces()
            .iter()
            .any(|i| i.is_up() && !i.is_loopback() && !i.ips.is_empty())
    }

    /// Search for an executable by filename, returning the first hit.
    fn locate_executable(&self, filename: &str) -> Option<PathBuf>;
}

/// The real environment: pnet for interfaces, PATH for binary lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }

    fn locate_executable(&self, filename: &str) -> Option<PathBuf> {
        let path = env::var_os("PATH")?;
        env::split_paths(&path)
            .map(|dir| dir.join(filename))
            .find(|candidate| candidate.is_file())
    }
}
