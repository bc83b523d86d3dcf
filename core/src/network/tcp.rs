use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempts a full TCP handshake against `addr:port` within `probe_timeout`.
///
/// Only a completed connection counts as open. A refused connection and an
/// elapsed timeout both report `false`; unreachable and closed look the
/// same to callers on purpose, since the sweep only cares about hosts that
/// actually answer.
pub async fn probe_port(addr: IpAddr, port: u16, probe_timeout: Duration) -> bool {
    let socket_addr: SocketAddr = SocketAddr::new(addr, port);

    matches!(
        timeout(probe_timeout, TcpStream::connect(socket_addr)).await,
        Ok(Ok(_))
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
