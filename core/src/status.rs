//! # Connectivity Status
//!
//! The quick "am I online" answer: current association plus one echo
//! beyond the gateway.

use std::time::Duration;

use wispr_common::model::wifi::LinkStatus;

use crate::platform::{PlatformNetworkProbe, run_raw};

/// One echo against 8.8.8.8 with a tight budget. Anything but a clean
/// exit, including ping itself being unavailable, reads as offline.
pub async fn check_internet() -> bool {
    #[cfg(target_os = "windows")]
    let args = ["-n", "1", "-w", "1000", "8.8.8.8"];
    #[cfg(not(target_os = "windows"))]
    let args = ["-c", "1", "-W", "1", "8.8.8.8"];

    match run_raw("ping", &args, Duration::from_secs(2)).await {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Association and reachability in one snapshot.
pub async fn link_status(platform: &dyn PlatformNetworkProbe) -> LinkStatus {
    LinkStatus {
        ssid: platform.current_ssid().await,
        internet: check_internet().await,
    }
}
