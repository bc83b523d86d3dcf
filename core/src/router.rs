//! # Router Discovery Probe
//!
//! Implements the "who is my router" use case in three steps:
//!
//! 1. find the gateway, preferring the routing table over the candidate
//!    sweep ([`gateway`]).
//! 2. fingerprint the brand from the admin page ([`brand`]).
//! 3. look up the factory-default credentials for it ([`creds`]).
//!
//! Every step is sequential and bounded; a full run against a silent
//! network costs at most the candidate sweep plus the fingerprint matrix,
//! roughly 15 x 1s + 8 x 3s. Nothing is cached between runs.

pub mod brand;
pub mod creds;
pub mod gateway;

use std::net::Ipv4Addr;
use std::time::Duration;

use tracing::debug;

use wispr_common::model::router::{BrandDetection, DiscoveredGateway, RouterInfo, Scheme};

use crate::platform::PlatformNetworkProbe;

/// Tunable knobs of one probe run.
///
/// The defaults are the documented production values; tests narrow the
/// candidate list and endpoints down to loopback fixtures.
#[derive(Debug, Clone)]
pub struct RouterProbe {
    /// Addresses tried, in order, when the routing table yields nothing.
    pub candidates: Vec<Ipv4Addr>,
    /// Ports attempted on each candidate, in order.
    pub candidate_ports: Vec<u16>,
    /// Per-connection budget during the candidate sweep.
    pub tcp_timeout: Duration,
    /// Scheme/port pairs the fingerprint walks, in order.
    pub endpoints: Vec<(Scheme, u16)>,
    /// Per-request budget during fingerprinting.
    pub http_timeout: Duration,
}

impl Default for RouterProbe {
    fn default() -> Self {
        Self {
            candidates: gateway::CANDIDATE_GATEWAYS.to_vec(),
            candidate_ports: gateway::CANDIDATE_PORTS.to_vec(),
            tcp_timeout: gateway::SWEEP_TIMEOUT,
            endpoints: brand::FINGERPRINT_ENDPOINTS.to_vec(),
            http_timeout: brand::FINGERPRINT_TIMEOUT,
        }
    }
}

impl RouterProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway address via routing table, falling back to the candidate
    /// sweep. `None` means no router was found by either path.
    pub async fn discover_gateway(
        &self,
        platform: &dyn PlatformNetworkProbe,
    ) -> anyhow::Result<Option<DiscoveredGateway>> {
        if let Some(ip) = platform.default_gateway().await {
            debug!(%ip, "gateway from routing table");
            return Ok(Some(DiscoveredGateway {
                ip,
                source: wispr_common::model::router::GatewaySource::RoutingTable,
            }));
        }

        debug!("routing table yielded nothing, sweeping candidates");
        Ok(gateway::sweep(&self.candidates, &self.candidate_ports, self.tcp_timeout).await)
    }

    /// Brand fingerprint for `ip`. Always yields a detection; exhausting
    /// the whole endpoint matrix without a keyword hit is the `Generic`
    /// outcome, not a failure.
    pub async fn detect_brand(&self, ip: Ipv4Addr) -> BrandDetection {
        brand::detect(ip, &self.endpoints, self.http_timeout).await
    }

    /// The full probe: gateway, brand, default credentials.
    ///
    /// `Ok(None)` means no router was detected; expected network conditions
    /// never surface as errors.
    pub async fn scan_router(
        &self,
        platform: &dyn PlatformNetworkProbe,
    ) -> anyhow::Result<Option<RouterInfo>> {
        let Some(found) = self.discover_gateway(platform).await? else {
            return Ok(None);
        };

        let detection = self.detect_brand(found.ip).await;
        Ok(Some(RouterInfo {
            ip: found.ip,
            source: found.source,
            brand: detection.brand,
            matched: detection.matched,
            defaults: creds::defaults_for(detection.brand),
        }))
    }
}
