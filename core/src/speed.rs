//! # Speed Test
//!
//! Two engines in strict priority: the official Ookla CLI when it is
//! installed, otherwise a coarse timed download from a public test file.
//! Both report through the same [`SpeedTestResult`] shape with the engine
//! recorded, so callers can tell a measured upload from an estimated one.

use std::time::{Duration, Instant};

use chrono::Local;
use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use wispr_common::error::ProbeError;
use wispr_common::model::speed::{SpeedEngine, SpeedTestResult};

use crate::platform::run_raw;

/// Binary names the Ookla engine answers to, probed via `which`/`where`.
const OOKLA_NAMES: [&str; 2] = ["speedtest", "speedtest-cli"];

/// The fallback download source.
const FALLBACK_URL: &str = "http://speedtest.tele2.net/10MB.zip";

/// At most this much of the fallback file is read.
const FALLBACK_CAP: usize = 5 * 1024 * 1024;

const OOKLA_TIMEOUT: Duration = Duration::from_secs(60);
const FALLBACK_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the best available engine. Only when every engine fails does this
/// error; a missing Ookla binary just selects the fallback.
pub async fn run_speed_test() -> Result<SpeedTestResult, ProbeError> {
    if let Some(cli) = locate_ookla_cli().await {
        match run_ookla(&cli).await {
            Ok(result) => return Ok(result),
            Err(err) => debug!(cli = %cli, error = %err, "ookla engine failed, falling back"),
        }
    }

    http_fallback()
        .await
        .map_err(|err| {
            debug!(error = %err, "http fallback failed");
            ProbeError::SpeedTestUnavailable
        })
}

/// Path of the Ookla CLI if one is on PATH.
pub async fn locate_ookla_cli() -> Option<String> {
    #[cfg(target_os = "windows")]
    const LOCATOR: &str = "where";
    #[cfg(not(target_os = "windows"))]
    const LOCATOR: &str = "which";

    for name in OOKLA_NAMES {
        let Ok(output) = run_raw(LOCATOR, &[name], Duration::from_secs(5)).await else {
            continue;
        };
        if !output.status.success() {
            continue;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        if let Some(path) = stdout.lines().next().map(str::trim).filter(|p| !p.is_empty()) {
            return Some(path.to_string());
        }
    }
    None
}

#[derive(Debug, Default, Deserialize)]
struct OoklaReport {
    #[serde(default)]
    download: OoklaBandwidth,
    #[serde(default)]
    upload: OoklaBandwidth,
    #[serde(default)]
    ping: OoklaPing,
    #[serde(default)]
    server: OoklaServer,
    #[serde(default)]
    isp: String,
}

#[derive(Debug, Default, Deserialize)]
struct OoklaBandwidth {
    /// Bytes per second.
    #[serde(default)]
    bandwidth: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OoklaPing {
    #[serde(default)]
    latency: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OoklaServer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: String,
}

async fn run_ookla(cli: &str) -> anyhow::Result<SpeedTestResult> {
    let output = timeout(OOKLA_TIMEOUT, Command::new(cli).arg("--json").output()).await??;
    if !output.status.success() {
        anyhow::bail!("`{cli}` exited with {}", output.status);
    }

    let report: OoklaReport = serde_json::from_slice(&output.stdout)?;

    let server = match (report.server.name.as_str(), report.server.location.as_str()) {
        ("", "") => None,
        (name, location) => Some(format!("{name}, {location}")),
    };

    Ok(SpeedTestResult {
        download_mbps: to_mbps(report.download.bandwidth),
        upload_mbps: to_mbps(report.upload.bandwidth),
        ping_ms: Some(report.ping.latency),
        server,
        isp: (!report.isp.is_empty()).then_some(report.isp),
        engine: SpeedEngine::OoklaCli,
        timestamp: now_stamp(),
    })
}

/// Bytes per second to Mbps, two decimals.
fn to_mbps(bytes_per_sec: f64) -> f64 {
    round2(bytes_per_sec * 8.0 / 1_000_000.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn now_stamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Timed download of the public test file. Upload has no cheap equivalent,
/// so it is estimated at 40% of the measured download.
async fn http_fallback() -> anyhow::Result<SpeedTestResult> {
    let client = reqwest::Client::builder()
        .timeout(FALLBACK_TIMEOUT)
        .build()?;

    let started = Instant::now();
    let mut response = client.get(FALLBACK_URL).send().await?;

    let mut received: usize = 0;
    while received < FALLBACK_CAP {
        match response.chunk().await? {
            Some(chunk) => received += chunk.len(),
            None => break,
        }
    }
    let elapsed = started.elapsed().as_secs_f64();

    let download = if elapsed > 0.0 {
        round2(received as f64 / elapsed / (1024.0 * 1024.0))
    } else {
        0.0
    };

    Ok(SpeedTestResult {
        download_mbps: download,
        upload_mbps: round2(download * 0.4),
        ping_ms: measure_ping().await,
        server: Some("tele2 fallback".to_string()),
        isp: None,
        engine: SpeedEngine::HttpFallback,
        timestamp: now_stamp(),
    })
}

/// Four echoes to 8.8.8.8, averaged by ping itself. The summary is parsed
/// from whatever ping printed even on partial loss.
async fn measure_ping() -> Option<f64> {
    #[cfg(target_os = "windows")]
    let args = ["-n", "4", "8.8.8.8"];
    #[cfg(not(target_os = "windows"))]
    let args = ["-c", "4", "8.8.8.8"];

    let output = run_raw("ping", &args, Duration::from_secs(10)).await.ok()?;
    ping_average_ms(&String::from_utf8_lossy(&output.stdout))
}

/// Average round trip out of a ping summary, both dialects:
/// `Average = 23ms` on Windows, the second `/`-field of the
/// `min/avg/max` line elsewhere.
pub fn ping_average_ms(output: &str) -> Option<f64> {
    if let Some(rest) = output.split("Average = ").nth(1) {
        let digits: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        return digits.parse().ok();
    }

    output
        .lines()
        .filter(|line| line.contains("avg"))
        .filter_map(|line| line.split('=').nth(1))
        .filter_map(|summary| summary.trim().split('/').nth(1))
        .find_map(|avg| avg.trim().parse().ok())
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

    const PING_LINUX: &str = "\
4 packets transmitted, 4 received, 0% packet loss, time 3004ms\n\
rtt min/avg/max/mdev = 9.123/21.456/35.789/9.000 ms\n";

    const PING_MACOS: &str = "\
4 packets transmitted, 4 packets received, 0.0% packet loss\n\
round-trip min/avg/max/stddev = 9.123/21.456/35.789/9.000 ms\n";

    const PING_WINDOWS: &str = "\
Ping statistics for 8.8.8.8:\r\n\
    Packets: Sent = 4, Received = 4, Lost = 0 (0% loss),\r\n\
Approximate round trip times in milli-seconds:\r\n\
    Minimum = 9ms, Maximum = 35ms, Average = 21ms\r\n";

    #[test]
    fn ping_summary_unix_dialects() {
        assert_eq!(ping_average_ms(PING_LINUX), Some(21.456));
        assert_eq!(ping_average_ms(PING_MACOS), Some(21.456));
    }

    #[test]
    fn ping_summary_windows_dialect() {
        assert_eq!(ping_average_ms(PING_WINDOWS), Some(21.0));
    }

    #[test]
    fn ping_summary_absent_on_total_loss() {
        let lost = "4 packets transmitted, 0 received, 100% packet loss, time 3065ms\n";
        assert_eq!(ping_average_ms(lost), None);
    }

    #[test]
    fn ookla_report_bandwidth_conversion() {
        let raw = r#"{
            "download": {"bandwidth": 12500000},
            "upload": {"bandwidth": 2500000},
            "ping": {"latency": 14.25},
            "server": {"name": "Example ISP", "location": "Berlin"},
            "isp": "Example Carrier"
        }"#;
        let report: OoklaReport = serde_json::from_str(raw).unwrap();
        assert_eq!(to_mbps(report.download.bandwidth), 100.0);
        assert_eq!(to_mbps(report.upload.bandwidth), 20.0);
        assert_eq!(report.ping.latency, 14.25);
    }

    #[test]
    fn ookla_report_tolerates_missing_fields() {
        let report: OoklaReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.download.bandwidth, 0.0);
        assert!(report.isp.is_empty());
    }

    #[test]
    fn rounding_is_two_decimals() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.004), 0.0);
    }
}
