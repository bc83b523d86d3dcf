//! `airport`/`netstat`/`security`-backed probe for macOS hosts.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};

use super::{PlatformNetworkProbe, parsing, run_command, run_command_merged};

/// The airport utility never made it onto PATH; this private-framework
/// location has been stable across macOS releases.
const AIRPORT: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

pub(super) struct MacProbe;

#[async_trait]
impl PlatformNetworkProbe for MacProbe {
    async fn default_gateway(&self) -> Option<Ipv4Addr> {
        let out = run_command("netstat", &["-rn"], Duration::from_secs(5))
            .await
            .ok()?;
        parsing::gateway_from_netstat(&out)
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError> {
        let out = run_command(AIRPORT, &["-s"], Duration::from_secs(10)).await?;
        Ok(parsing::networks_from_airport(&out))
    }

    async fn current_ssid(&self) -> Option<String> {
        let out = run_command(AIRPORT, &["-I"], Duration::from_secs(5))
            .await
            .ok()?;
        parsing::ssid_from_airport_info(&out)
    }

    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError> {
        // The keychain tool answers partly on stderr, so both streams are
        // parsed together.
        let dump = run_command_merged(
            "security",
            &["find-generic-password", "-t", "AirPort Network", "-g"],
            Duration::from_secs(10),
        )
        .await?;

        let mut results = Vec::new();
        for ssid in parsing::ssids_from_keychain(&dump) {
            let password = match run_command_merged(
                "security",
                &[
                    "find-generic-password",
                    "-t",
                    "AirPort Network",
                    "-s",
                    &ssid,
                    "-w",
                ],
                Duration::from_secs(5),
            )
            .await
            {
                Ok(out) => {
                    let pwd = out.trim().to_string();
                    (!pwd.is_empty()).then_some(pwd)
                }
                Err(err) => {
                    debug!(ssid = %ssid, error = %err, "keychain denied the passphrase");
                    None
                }
            };
            results.push(SavedCredential { ssid, password });
        }
        Ok(results)
    }

    fn os_name(&self) -> &'static str {
        "macOS"
    }
}
