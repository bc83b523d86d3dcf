//! # WiFi Models
//!
//! Value types shared by the scanner, the saved-credential reader and the
//! status check.

use serde::Serialize;

/// A nearby network as reported by one platform scan.
///
/// `signal` is normalized to 0..=100 before it gets here; the platform
/// layer owns the dBm conversion where the OS reports raw RSSI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiNetwork {
    pub ssid: String,
    /// Signal strength in percent, clamped to 0..=100.
    pub signal: u8,
    /// Security descriptor as the OS spells it (e.g. "WPA2", "--", "Open").
    pub security: String,
    /// Channel number where the platform reports one.
    pub channel: Option<String>,
}

impl WifiNetwork {
    /// Whether the network advertises no authentication.
    ///
    /// Linux prints "--" for open networks, Windows prints "Open", macOS
    /// leaves the security column blank.
    pub fn is_open(&self) -> bool {
        let sec = self.security.trim();
        sec.is_empty() || sec == "--" || sec.eq_ignore_ascii_case("open")
    }
}

/// One saved WiFi profile with its stored passphrase.
///
/// `password` is `None` for open networks and for profiles whose key the
/// OS refused to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedCredential {
    pub ssid: String,
    pub password: Option<String>,
}

/// Current connectivity snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkStatus {
    /// SSID of the currently associated network, if any.
    pub ssid: Option<String>,
    /// Whether a probe beyond the gateway succeeded.
    pub internet: bool,
}

/// Addressing summary for one network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSummary {
    pub name: String,
    pub addresses: Vec<String>,
    pub mac: Option<String>,
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

    fn network(security: &str) -> WifiNetwork {
        WifiNetwork {
            ssid: "lab".into(),
            signal: 70,
            security: security.into(),
            channel: None,
        }
    }

    #[test]
    fn open_markers_for_each_platform() {
        assert!(network("").is_open());
        assert!(network("--").is_open());
        assert!(network("Open").is_open());
        assert!(network("  open ").is_open());
    }

    #[test]
    fn secured_networks_are_not_open() {
        assert!(!network("WPA2").is_open());
        assert!(!network("WPA2 WPA3").is_open());
        assert!(!network("WEP").is_open());
    }
}
