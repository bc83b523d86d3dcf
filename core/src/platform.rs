//! # Platform Capability Layer
//!
//! Every OS-specific concern lives behind [`PlatformNetworkProbe`]: reading
//! the routing table, scanning for networks, naming the associated SSID and
//! pulling saved credentials out of the OS store. The rest of the crate is
//! platform-neutral and talks to the trait only.
//!
//! Implementations shell out to the platform's own tools (`ip`/`nmcli`,
//! `netsh`, `netstat`/`airport`/`security`) under explicit timeouts and feed
//! the raw output through the pure parsers in [`parsing`], which keeps the
//! grammar of each tool unit-testable on any build host.

pub mod parsing;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use std::net::Ipv4Addr;
use std::process::Output;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};

/// Network capabilities of the host OS.
///
/// Selected once at startup via [`native`]; callers hold a
/// `Box<dyn PlatformNetworkProbe>` and never branch on the OS themselves.
#[async_trait]
pub trait PlatformNetworkProbe: Send + Sync {
    /// Next hop of the default route, if the routing table names one.
    ///
    /// Failures to run or parse the platform tool surface as `None`; the
    /// router probe has its own fallback for that case.
    async fn default_gateway(&self) -> Option<Ipv4Addr>;

    /// One scan pass over nearby networks, raw and unmerged.
    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError>;

    /// SSID of the currently associated network, if any.
    async fn current_ssid(&self) -> Option<String>;

    /// Saved SSID/passphrase pairs from the OS credential store.
    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError>;

    /// Platform label for display.
    fn os_name(&self) -> &'static str;
}

/// The probe implementation for the OS this binary was built for.
pub fn native() -> Box<dyn PlatformNetworkProbe> {
    #[cfg(target_os = "linux")]
    {
        Box::new(linux::LinuxProbe)
    }
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsProbe)
    }
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::MacProbe)
    }
    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        Box::new(UnsupportedProbe)
    }
}

/// Runs `name` with `args`, enforcing `limit` wall-clock time. A child
/// still running when the limit fires is killed, not detached.
///
/// Exit status is not inspected here; callers that care wrap this through
/// [`run_command`].
pub(crate) async fn run_raw(
    name: &'static str,
    args: &[&str],
    limit: Duration,
) -> Result<Output, ProbeError> {
    let pending = Command::new(name).args(args).kill_on_drop(true).output();
    match timeout(limit, pending).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(ProbeError::CommandMissing { name })
        }
        Ok(Err(err)) => Err(ProbeError::CommandFailed {
            name,
            status: "spawn failure".to_string(),
            detail: err.to_string(),
        }),
        Err(_elapsed) => Err(ProbeError::CommandTimeout {
            name,
            timeout: limit,
        }),
    }
}

/// [`run_raw`] plus a success check; yields stdout.
pub(crate) async fn run_command(
    name: &'static str,
    args: &[&str],
    limit: Duration,
) -> Result<String, ProbeError> {
    let output = run_raw(name, args, limit).await?;
    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            name,
            status: output.status.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// [`run_command`] variant that merges stderr into the result, for tools
/// like macOS `security` that print part of their answer there.
#[cfg(target_os = "macos")]
pub(crate) async fn run_command_merged(
    name: &'static str,
    args: &[&str],
    limit: Duration,
) -> Result<String, ProbeError> {
    let output = run_raw(name, args, limit).await?;
    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            name,
            status: output.status.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    let mut merged = String::from_utf8_lossy(&output.stdout).into_owned();
    merged.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(merged)
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
struct UnsupportedProbe;

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
#[async_trait]
impl PlatformNetworkProbe for UnsupportedProbe {
    async fn default_gateway(&self) -> Option<Ipv4Addr> {
        None
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError> {
        Err(ProbeError::Unsupported {
            operation: "wifi scanning",
            os: std::env::consts::OS,
        })
    }

    async fn current_ssid(&self) -> Option<String> {
        None
    }

    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError> {
        Err(ProbeError::Unsupported {
            operation: "saved credential lookup",
            os: std::env::consts::OS,
        })
    }

    fn os_name(&self) -> &'static str {
        "Unsupported"
    }
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

    #[tokio::test]
    async fn missing_tool_surfaces_as_command_missing() {
        let err = run_raw("wispr-nonexistent-helper", &[], Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProbeError::CommandMissing {
                name: "wispr-nonexistent-helper"
            }
        ));
    }

    /// The child must die with the limit, not finish in the background.
    /// The marker file would only appear if the shell outlived the kill.
    #[cfg(unix)]
    #[tokio::test]
    async fn timed_out_command_does_not_outlive_its_limit() {
        let marker = std::env::temp_dir().join(format!("wispr-cutoff-{}", std::process::id()));
        let _ = std::fs::remove_file(&marker);
        let script = format!("sleep 2 && touch '{}'", marker.display());

        let started = std::time::Instant::now();
        let err = run_raw("sh", &["-c", script.as_str()], Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::CommandTimeout { name: "sh", .. }));
        assert!(started.elapsed() < Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!marker.exists());
        let _ = std::fs::remove_file(&marker);
    }
}
