//! # Saved Credential Service
//!
//! Surfaces what the OS already stores. Nothing here authenticates
//! anywhere; entries without a revealed key stay listed with the password
//! absent.

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::SavedCredential;

use crate::platform::PlatformNetworkProbe;

pub async fn saved_credentials(
    platform: &dyn PlatformNetworkProbe,
) -> Result<Vec<SavedCredential>, ProbeError> {
    platform.saved_credentials().await
}

/// Case-insensitive SSID substring filter. A blank needle keeps
/// everything, so an empty `--filter` behaves like no filter.
pub fn filter_by_ssid(credentials: Vec<SavedCredential>, needle: &str) -> Vec<SavedCredential> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return credentials;
    }
    credentials
        .into_iter()
        .filter(|cred| cred.ssid.to_lowercase().contains(&needle))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
