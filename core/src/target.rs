//! # Scan target model
//!
//! The target of a run, already formatted the way nmap expects it on the
//! command line. This is a pure value object: no address syntax is
//! validated here, nmap itself is the sole validator. Subnets, CIDR
//! blocks, hostnames and ranges all pass through untouched.

use std::fmt;
use std::net::IpAddr;

/// The target expression handed to nmap, space-joined when it covers
/// more than one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    /// A raw target expression: hostname, CIDR block, nmap range syntax.
    pub fn new(target: impl Into<String>) -> Self {
        Target(target.into())
    }

    /// A list of raw target expressions, space-joined.
    pub fn from_strings<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Target(
            targets
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// A list of addresses, space-joined.
    pub fn from_addrs<I>(addrs: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        Target(
            addrs
                .into_iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IpAddr> for Target {
    fn from(addr: IpAddr) -> Self {
        Target(addr.to_string())
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Target::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn single_address() {
        let t = Target::from(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(t.to_string(), "10.0.0.1");
    }

    #[test]
    fn address_list_is_space_joined() {
        let addrs = ["10.0.0.1", "10.0.0.2"]
            .iter()
            .map(|s| s.parse::<IpAddr>().unwrap());
        assert_eq!(Target::from_addrs(addrs).to_string(), "10.0.0.1 10.0.0.2");
    }

    #[test]
    fn raw_expressions_pass_through_unvalidated() {
        assert_eq!(Target::new("10.0.0.0/24").to_string(), "10.0.0.0/24");
        assert_eq!(
            Target::from_strings(["scanme.example.org", "192.168.1.1-50"]).to_string(),
            "scanme.example.org 192.168.1.1-50"
        );
    }

    #[test]
    fn empty_target_is_detectable() {
        assert!(Target::new("").is_empty());
        assert!(!Target::new("localhost").is_empty());
    }
}
