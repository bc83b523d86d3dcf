//! # Speed Test Models

use std::fmt;

use serde::{Serialize, Serializer};

/// Which measurement engine produced a [`SpeedTestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedEngine {
    /// The official `speedtest` CLI was found on PATH and ran to completion.
    OoklaCli,
    /// Timed HTTP download against a public test file, with upload estimated
    /// from it. Coarse, but needs nothing installed.
    HttpFallback,
}

impl SpeedEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedEngine::OoklaCli => "ookla-cli",
            SpeedEngine::HttpFallback => "http-fallback",
        }
    }
}

impl fmt::Display for SpeedEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedEngine::OoklaCli => f.write_str("Ookla speedtest CLI"),
            SpeedEngine::HttpFallback => f.write_str("HTTP fallback"),
        }
    }
}

impl Serialize for SpeedEngine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One completed throughput measurement.
///
/// Rates are in Mbps rounded to two decimals. `isp` is only known on the
/// Ookla path; the fallback names its test host in `server` and leaves
/// `isp` unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedTestResult {
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: Option<f64>,
    pub server: Option<String>,
    pub isp: Option<String>,
    pub engine: SpeedEngine,
    /// Wall-clock completion time, `%H:%M:%S`.
    pub timestamp: String,
}
