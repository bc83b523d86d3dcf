#![cfg(test)]
//! Shared fixtures: a scriptable platform probe and loopback servers
//! standing in for a router's admin page.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use wispr_common::error::ProbeError;
use wispr_common::model::wifi::{SavedCredential, WifiNetwork};
use wispr_core::platform::PlatformNetworkProbe;

/// A platform whose answers are scripted per test.
#[derive(Default)]
pub struct MockProbe {
    pub gateway: Option<Ipv4Addr>,
    pub networks: Vec<WifiNetwork>,
    pub ssid: Option<String>,
    pub credentials: Vec<SavedCredential>,
    pub scan_fails: bool,
}

#[async_trait]
impl PlatformNetworkProbe for MockProbe {
    async fn default_gateway(&self) -> Option<Ipv4Addr> {
        self.gateway
    }

    async fn scan_wifi(&self) -> Result<Vec<WifiNetwork>, ProbeError> {
        if self.scan_fails {
            return Err(ProbeError::CommandMissing { name: "nmcli" });
        }
        Ok(self.networks.clone())
    }

    async fn current_ssid(&self) -> Option<String> {
        self.ssid.clone()
    }

    async fn saved_credentials(&self) -> Result<Vec<SavedCredential>, ProbeError> {
        Ok(self.credentials.clone())
    }

    fn os_name(&self) -> &'static str {
        "Mock"
    }
}

/// Serves `body` as a minimal HTTP response for every connection until
/// the runtime shuts down.
pub async fn serve_body(body: &'static str) -> SocketAddr {
    let (addr, _) = serve_counted_body(body.to_string()).await;
    addr
}

/// [`serve_body`] for bodies assembled at runtime, also reporting how many
/// connections the fixture has answered.
pub async fn serve_counted_body(body: String) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            let body = body.clone();
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    (addr, hits)
}

/// A port that accepts handshakes but speaks no HTTP. The listener must
/// stay alive for the duration of the test.
pub async fn held_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// A loopback port guaranteed to refuse connections: bound once to claim
/// a free number, then released.
pub async fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
