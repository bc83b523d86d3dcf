//! Candidate sweep for the gateway address.
//!
//! The list covers the factory defaults of the common consumer brands; the
//! order puts the most widely used subnets first so typical homes resolve
//! on the first couple of connects. A candidate counts only when the TCP
//! handshake completes; nothing is sent on the socket.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use tracing::debug;

use wispr_common::model::router::{DiscoveredGateway, GatewaySource};

use crate::network::tcp::probe_port;

/// Well-known router addresses, tried strictly in this order.
pub const CANDIDATE_GATEWAYS: [Ipv4Addr; 15] = [
    Ipv4Addr::new(192, 168, 1, 1),
    Ipv4Addr::new(192, 168, 0, 1),
    Ipv4Addr::new(192, 168, 1, 254),
    Ipv4Addr::new(192, 168, 0, 254),
    Ipv4Addr::new(192, 168, 2, 1),
    Ipv4Addr::new(192, 168, 10, 1),
    Ipv4Addr::new(192, 168, 100, 1),
    Ipv4Addr::new(192, 168, 11, 1),
    Ipv4Addr::new(10, 0, 0, 1),
    Ipv4Addr::new(10, 0, 0, 2),
    Ipv4Addr::new(172, 16, 0, 1),
    Ipv4Addr::new(192, 168, 1, 2),
    Ipv4Addr::new(192, 168, 8, 1),
    Ipv4Addr::new(192, 168, 123, 254),
    Ipv4Addr::new(192, 168, 0, 100),
];

/// Admin ports attempted on each candidate.
pub const CANDIDATE_PORTS: [u16; 2] = [80, 8080];

/// Per-connection budget during the sweep.
pub const SWEEP_TIMEOUT: Duration = Duration::from_secs(1);

/// Walks `candidates` in order, each against `ports` in order; the first
/// completed handshake wins. This is a heuristic: any LAN host with an
/// admin port open can claim the spot.
pub async fn sweep(
    candidates: &[Ipv4Addr],
    ports: &[u16],
    timeout: Duration,
) -> Option<DiscoveredGateway> {
    for &candidate in candidates {
        for &port in ports {
            debug!(ip = %candidate, port, "probing candidate");
            if probe_port(IpAddr::V4(candidate), port, timeout).await {
                debug!(ip = %candidate, port, "candidate accepted");
                return Some(DiscoveredGateway {
                    ip: candidate,
                    source: GatewaySource::CandidateProbe,
                });
            }
        }
    }
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
