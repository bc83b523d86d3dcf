//! # Router Probe Models
//!
//! Value types produced by the router discovery probe: the discovered
//! gateway, the fingerprinted brand and the factory-default credential
//! pairs looked up for it.
//!
//! Everything here is an immutable snapshot of a single probe run. The
//! probe itself is stateless; callers own any caching of these values.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Serialize, Serializer};

/// Router vendors the fingerprinting step can recognize.
///
/// `Generic` is the sentinel used when no vendor keyword was found across
/// the whole scheme/port search space; it is a valid lookup key in the
/// credential table, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    TpLink,
    DLink,
    Netgear,
    Asus,
    Linksys,
    Huawei,
    Cisco,
    Belkin,
    Tenda,
    Xiaomi,
    Zte,
    Arris,
    Generic,
}

impl Brand {
    /// Canonical display spelling, as printed on the device label.
    pub fn name(&self) -> &'static str {
        match self {
            Brand::TpLink => "TP-Link",
            Brand::DLink => "D-Link",
            Brand::Netgear => "Netgear",
            Brand::Asus => "ASUS",
            Brand::Linksys => "Linksys",
            Brand::Huawei => "Huawei",
            Brand::Cisco => "Cisco",
            Brand::Belkin => "Belkin",
            Brand::Tenda => "Tenda",
            Brand::Xiaomi => "Xiaomi",
            Brand::Zte => "ZTE",
            Brand::Arris => "Arris",
            Brand::Generic => "Generic",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Brand::Generic)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Brand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single factory-default username/password pair.
///
/// Rows of the static credential table; an empty password is a meaningful
/// entry (many vendors ship with one), not a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credential {
    pub username: &'static str,
    pub password: &'static str,
}

impl Credential {
    pub const fn new(username: &'static str, password: &'static str) -> Self {
        Self { username, password }
    }
}

/// URL scheme tried against the router's admin interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// How the gateway address was obtained.
///
/// Lets callers and tests tell the primary path from the fallback without
/// re-running the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GatewaySource {
    /// Read from the platform's routing table.
    RoutingTable,
    /// A well-known candidate address accepted a TCP connection; this is a
    /// heuristic and can name any LAN host with an open admin port.
    CandidateProbe,
}

impl fmt::Display for GatewaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewaySource::RoutingTable => f.write_str("routing table"),
            GatewaySource::CandidateProbe => f.write_str("candidate probe"),
        }
    }
}

/// A gateway address plus the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveredGateway {
    pub ip: Ipv4Addr,
    pub source: GatewaySource,
}

/// The endpoint and keyword that pinned the brand down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandMatch {
    pub scheme: Scheme,
    pub port: u16,
    pub keyword: &'static str,
}

/// Outcome of the brand fingerprinting step.
///
/// `matched` is `None` exactly when the `Generic` fallback applied, i.e.
/// the whole search space was exhausted without a keyword hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandDetection {
    pub brand: Brand,
    pub matched: Option<BrandMatch>,
}

/// Everything the router probe learned in one run.
///
/// `defaults` is never empty: brands without a table entry fall back to the
/// generic list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterInfo {
    pub ip: Ipv4Addr,
    pub source: GatewaySource,
    pub brand: Brand,
    pub matched: Option<BrandMatch>,
    pub defaults: &'static [Credential],
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_display_uses_label_spelling() {
        assert_eq!(Brand::TpLink.to_string(), "TP-Link");
        assert_eq!(Brand::Asus.to_string(), "ASUS");
        assert_eq!(Brand::Zte.to_string(), "ZTE");
        assert_eq!(Brand::Generic.to_string(), "Generic");
    }

    #[test]
    fn only_the_sentinel_is_generic() {
        assert!(Brand::Generic.is_generic());
        assert!(!Brand::TpLink.is_generic());
        assert!(!Brand::Arris.is_generic());
    }

    #[test]
    fn scheme_renders_lowercase() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }
}
