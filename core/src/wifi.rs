//! # WiFi Scanning Service
//!
//! One platform scan pass plus the merge every platform needs: the same
//! SSID shows up once per access point, so duplicates collapse onto the
//! strongest signal, hidden networks drop out, and the list comes back
//! sorted strongest first.

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::WifiNetwork;

use crate::platform::PlatformNetworkProbe;

/// Scans and merges. Errors are the platform tool misbehaving, never an
/// empty neighborhood.
pub async fn scan_networks(
    platform: &dyn PlatformNetworkProbe,
) -> Result<Vec<WifiNetwork>, ProbeError> {
    let raw = platform.scan_wifi().await?;
    Ok(merge_scan(raw))
}

/// Collapses duplicate SSIDs onto the strongest sighting, drops unnamed
/// networks, sorts by signal descending. Ties keep the first sighting and
/// the first-seen order, the sort being stable.
pub fn merge_scan(raw: Vec<WifiNetwork>) -> Vec<WifiNetwork> {
    let mut merged: Vec<WifiNetwork> = Vec::new();

    for network in raw {
        if network.ssid.is_empty() {
            continue;
        }
        match merged.iter_mut().find(|seen| seen.ssid == network.ssid) {
            Some(seen) => {
                if network.signal > seen.signal {
                    *seen = network;
                }
            }
            None => merged.push(network),
        }
    }

    merged.sort_by(|a, b| b.signal.cmp(&a.signal));
    merged
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

    fn net(ssid: &str, signal: u8) -> WifiNetwork {
        WifiNetwork {
            ssid: ssid.to_string(),
            signal,
            security: "WPA2".to_string(),
            channel: None,
        }
    }

    #[test]
    fn duplicates_collapse_onto_strongest() {
        let merged = merge_scan(vec![net("Home", 40), net("Home", 80), net("Home", 60)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].signal, 80);
    }

    #[test]
    fn ties_keep_the_first_sighting() {
        let mut first = net("Home", 70);
        first.channel = Some("1".to_string());
        let mut second = net("Home", 70);
        second.channel = Some("11".to_string());

        let merged = merge_scan(vec![first, second]);
        assert_eq!(merged[0].channel.as_deref(), Some("1"));
    }

    #[test]
    fn unnamed_networks_drop_out() {
        let merged = merge_scan(vec![net("", 90), net("Visible", 10)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].ssid, "Visible");
    }

    #[test]
    fn sorted_strongest_first() {
        let merged = merge_scan(vec![net("a", 10), net("b", 90), net("c", 50)]);
        let order: Vec<&str> = merged.iter().map(|n| n.ssid.as_str()).collect();
        assert_eq!(order, ["b", "c", "a"]);
    }
}
