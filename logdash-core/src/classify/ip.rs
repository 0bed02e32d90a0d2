use ipnet::IpNet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// RFC 1918 ranges plus IPv6 unique-local addresses.
static PRIVATE_NETWORKS: Lazy<Vec<IpNet>> = Lazy::new(|| {
    parse_networks(&["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16", "fc00::/7"])
});

/// Special-purpose ranges that are neither private nor globally routable.
static SPECIAL_NETWORKS: Lazy<Vec<IpNet>> = Lazy::new(|| {
    parse_networks(&[
        "0.0.0.0/8",
        "100.64.0.0/10",
        "169.254.0.0/16",
        "192.0.0.0/24",
        "192.0.2.0/24",
        "198.18.0.0/15",
        "198.51.100.0/24",
        "203.0.113.0/24",
        "224.0.0.0/4",
        "240.0.0.0/4",
        "::/128",
        "fe80::/10",
        "ff00::/8",
        "2001:db8::/32",
    ])
});

fn parse_networks(networks: &[&str]) -> Vec<IpNet> {
    networks
        .iter()
        .map(|s| s.parse::<IpNet>().expect("static network literal"))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpClass {
    Private,
    Public,
    Loopback,
    Other,
    Invalid,
}

impl IpClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IpClass::Private => "private",
            IpClass::Public => "public",
            IpClass::Loopback => "loopback",
            IpClass::Other => "other",
            IpClass::Invalid => "invalid",
        }
    }
}

/// Classifies the textual client address of a log line.
///
/// Loopback is checked before the private ranges, so `127.0.0.1` is
/// `Loopback` rather than `Private`. Anything that does not parse as an
/// address is `Invalid`.
pub fn classify_ip(raw: &str) -> IpClass {
    let Ok(addr) = raw.parse::<IpAddr>() else {
        return IpClass::Invalid;
    };

    if addr.is_loopback() {
        IpClass::Loopback
    } else if PRIVATE_NETWORKS.iter().any(|net| net.contains(&addr)) {
        IpClass::Private
    } else if SPECIAL_NETWORKS.iter().any(|net| net.contains(&addr)) {
        IpClass::Other
    } else {
        IpClass::Public
    }
}
