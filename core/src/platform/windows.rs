//! `netsh`/`ipconfig`-backed probe for Windows hosts.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};

use super::{PlatformNetworkProbe, parsing, run_command};

pub(super) struct WindowsProbe;

#[async_trait]
impl PlatformNetworkProbe for WindowsProbe {
    async fn default_gateway(&self) -> Option<Ipv4Addr> {
        let out = run_command("ipconfig", &[], Duration::from_secs(5))
            .await
            .ok()?;
        parsing::gateway_from_ipconfig(&out)
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError> {
        // Best-effort: autoconfig is usually enabled already, and hosts
        // whose adapter is not called "Wi-Fi" just reject the poke.
        let _ = run_command(
            "netsh",
            &["wlan", "set", "autoconfig", "enabled=yes", "interface=Wi-Fi"],
            Duration::from_secs(5),
        )
        .await;

        let out = run_command(
            "netsh",
            &["wlan", "show", "networks", "mode=bssid"],
            Duration::from_secs(10),
        )
        .await?;
        Ok(parsing::networks_from_netsh(&out))
    }

    async fn current_ssid(&self) -> Option<String> {
        let out = run_command(
            "netsh",
            &["wlan", "show", "interfaces"],
            Duration::from_secs(5),
        )
        .await
        .ok()?;
        parsing::ssid_from_netsh_interfaces(&out)
    }

    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError> {
        let listing = run_command(
            "netsh",
            &["wlan", "show", "profiles"],
            Duration::from_secs(10),
        )
        .await?;

        let mut results = Vec::new();
        for profile in parsing::profiles_from_netsh(&listing) {
            // key=clear needs elevation; a profile that refuses to reveal
            // its key still counts, with the password left empty.
            let password = match run_command(
                "netsh",
                &["wlan", "show", "profile", &profile, "key=clear"],
                Duration::from_secs(5),
            )
            .await
            {
                Ok(detail) => parsing::key_material_from_profile(&detail),
                Err(err) => {
                    debug!(profile = %profile, error = %err, "profile detail unavailable");
                    None
                }
            };
            results.push(SavedCredential {
                ssid: profile,
                password,
            });
        }
        Ok(results)
    }

    fn os_name(&self) -> &'static str {
        "Windows"
    }
}
