#![cfg(test)]
//! Scan and credential flows through the mock platform, asserting on the
//! service-level contracts rather than the parsers.

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};
use wispr_core::{passwords, wifi};

use crate::support::MockProbe;

fn net(ssid: &str, signal: u8) -> WifiNetwork {
    WifiNetwork {
        ssid: ssid.to_string(),
        signal,
        security: "WPA2".to_string(),
        channel: None,
    }
}

fn cred(ssid: &str, password: Option<&str>) -> SavedCredential {
    SavedCredential {
        ssid: ssid.to_string(),
        password: password.map(str::to_string),
    }
}

#[tokio::test]
async fn scan_collapses_access_points_and_sorts() {
    let platform = MockProbe {
        networks: vec![net("Home", 40), net("Cafe", 90), net("Home", 70)],
        ..Default::default()
    };

    let merged = wifi::scan_networks(&platform).await.unwrap();

    let view: Vec<(&str, u8)> = merged.iter().map(|n| (n.ssid.as_str(), n.signal)).collect();
    assert_eq!(view, [("Cafe", 90), ("Home", 70)]);
}

#[tokio::test]
async fn scan_surfaces_a_missing_platform_tool() {
    let platform = MockProbe {
        scan_fails: true,
        ..Default::default()
    };

    let err = wifi::scan_networks(&platform).await.unwrap_err();
    assert!(matches!(err, ProbeError::CommandMissing { name: "nmcli" }));
}

#[tokio::test]
async fn credentials_filter_composes_with_the_platform() {
    let platform = MockProbe {
        credentials: vec![
            cred("HomeNet", Some("hunter2")),
            cred("CoffeeShop", None),
            cred("home-guest", Some("")),
        ],
        ..Default::default()
    };

    let all = passwords::saved_credentials(&platform).await.unwrap();
    assert_eq!(all.len(), 3);

    let filtered = passwords::filter_by_ssid(all, "home");
    let names: Vec<&str> = filtered.iter().map(|c| c.ssid.as_str()).collect();
    assert_eq!(names, ["HomeNet", "home-guest"]);
}
