//! NetworkManager-backed probe for Linux hosts.

use std::net::Ipv4Addr;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};

use super::{PlatformNetworkProbe, parsing, run_command};

/// Where NetworkManager keeps its connection keyfiles. Reading them
/// normally requires root; unreadable files are skipped.
const KEYFILE_DIR: &str = "/etc/NetworkManager/system-connections";

/// How long a fresh scan gets to settle before the list is read.
const RESCAN_SETTLE: Duration = Duration::from_secs(2);

pub(super) struct LinuxProbe;

#[async_trait]
impl PlatformNetworkProbe for LinuxProbe {
    async fn default_gateway(&self) -> Option<Ipv4Addr> {
        let out = run_command("ip", &["route"], Duration::from_secs(5))
            .await
            .ok()?;
        parsing::gateway_from_ip_route(&out)
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError> {
        // The radio poke and the rescan are best-effort: both fail on
        // hosts where the radio is already on or the device is busy, and
        // the stale list is still worth returning.
        let _ = run_command("nmcli", &["radio", "wifi", "on"], Duration::from_secs(5)).await;
        let rescan = run_command(
            "nmcli",
            &["device", "wifi", "rescan"],
            Duration::from_secs(5),
        )
        .await;
        if rescan.is_ok() {
            tokio::time::sleep(RESCAN_SETTLE).await;
        }

        let out = run_command(
            "nmcli",
            &["-t", "-f", "SSID,SIGNAL,SECURITY,CHAN", "device", "wifi", "list"],
            Duration::from_secs(10),
        )
        .await?;
        Ok(parsing::networks_from_nmcli(&out))
    }

    async fn current_ssid(&self) -> Option<String> {
        let out = run_command(
            "nmcli",
            &["-t", "-f", "ACTIVE,SSID", "device", "wifi"],
            Duration::from_secs(5),
        )
        .await
        .ok()?;
        parsing::ssid_from_nmcli_active(&out)
    }

    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError> {
        let mut entries = match tokio::fs::read_dir(KEYFILE_DIR).await {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = KEYFILE_DIR, error = %err, "keyfile directory unreadable");
                return Ok(Vec::new());
            }
        };

        let mut paths = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            paths.push(entry.path());
        }
        paths.sort();

        let mut results = Vec::new();
        for path in paths {
            let Ok(content) = tokio::fs::read_to_string(&path).await else {
                debug!(path = %path.display(), "keyfile unreadable, skipping");
                continue;
            };
            if let Some(cred) = parsing::credential_from_keyfile(&content, &stem_of(&path)) {
                results.push(cred);
            }
        }
        Ok(results)
    }

    fn os_name(&self) -> &'static str {
        "Linux"
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
