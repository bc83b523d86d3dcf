#![cfg(test)]
//! End-to-end probe runs against loopback fixtures: the documented
//! outcomes (routing-table hit with a branded page, candidate fallback
//! with an anonymous page, no router at all) plus the body cap and
//! first-hit cutoff of the fingerprint walk.

use std::net::Ipv4Addr;
use std::sync::atomic::Ordering;
use std::time::Duration;

use wispr_common::model::router::{Brand, GatewaySource, Scheme};
use wispr_core::router::RouterProbe;

use crate::support::{self, MockProbe};

const LOCALHOST: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 1);

#[tokio::test]
async fn routing_table_gateway_with_branded_page() {
    let addr = support::serve_body("<html><body>Powered by TP-LINK</body></html>").await;
    let platform = MockProbe {
        gateway: Some(LOCALHOST),
        ..Default::default()
    };
    // No candidates at all: if the sweep ran anyway, this would yield None.
    let probe = RouterProbe {
        candidates: vec![],
        candidate_ports: vec![],
        endpoints: vec![(Scheme::Http, addr.port())],
        ..RouterProbe::default()
    };

    let info = probe
        .scan_router(&platform)
        .await
        .unwrap()
        .expect("router expected");

    assert_eq!(info.ip, LOCALHOST);
    assert_eq!(info.source, GatewaySource::RoutingTable);
    assert_eq!(info.brand, Brand::TpLink);

    let matched = info.matched.expect("fingerprint match expected");
    assert_eq!(matched.keyword, "tp-link");
    assert_eq!(matched.scheme, Scheme::Http);
    assert_eq!(matched.port, addr.port());

    let pairs: Vec<(&str, &str)> = info
        .defaults
        .iter()
        .map(|c| (c.username, c.password))
        .collect();
    assert_eq!(pairs, [("admin", "admin"), ("admin", ""), ("admin", "password")]);
}

#[tokio::test]
async fn candidate_fallback_with_anonymous_page() {
    let addr = support::serve_body("<html><title>admin console</title></html>").await;
    let platform = MockProbe::default();
    let probe = RouterProbe {
        candidates: vec![LOCALHOST],
        candidate_ports: vec![addr.port()],
        tcp_timeout: Duration::from_millis(500),
        endpoints: vec![(Scheme::Http, addr.port())],
        ..RouterProbe::default()
    };

    let info = probe
        .scan_router(&platform)
        .await
        .unwrap()
        .expect("router expected");

    assert_eq!(info.ip, LOCALHOST);
    assert_eq!(info.source, GatewaySource::CandidateProbe);
    assert_eq!(info.brand, Brand::Generic);
    assert!(info.matched.is_none());
    assert_eq!(info.defaults.len(), 7);
    assert!(info.defaults.iter().all(|c| !c.username.is_empty()));
}

#[tokio::test]
async fn silent_network_yields_no_router() {
    let port = support::refused_port().await;
    let platform = MockProbe::default();
    let probe = RouterProbe {
        candidates: vec![LOCALHOST],
        candidate_ports: vec![port],
        tcp_timeout: Duration::from_millis(500),
        ..RouterProbe::default()
    };

    let info = probe.scan_router(&platform).await.unwrap();
    assert!(info.is_none());
}

#[tokio::test]
async fn unreachable_admin_page_still_profiles_generic() {
    let (listener, addr) = support::held_listener().await;
    let dead = support::refused_port().await;
    let platform = MockProbe::default();
    let probe = RouterProbe {
        candidates: vec![LOCALHOST],
        candidate_ports: vec![addr.port()],
        tcp_timeout: Duration::from_millis(500),
        endpoints: vec![(Scheme::Http, dead), (Scheme::Https, dead)],
        http_timeout: Duration::from_secs(2),
        ..RouterProbe::default()
    };

    let info = probe
        .scan_router(&platform)
        .await
        .unwrap()
        .expect("reachable gateway expected");

    assert_eq!(info.brand, Brand::Generic);
    assert!(info.matched.is_none());
    drop(listener);
}

#[tokio::test]
async fn late_keyword_on_an_oversized_page_goes_unseen() {
    // The vendor name starts past the inspected prefix of the body.
    let mut page = "x".repeat(9 * 1024);
    page.push_str("netgear");
    let (addr, _) = support::serve_counted_body(page).await;

    let probe = RouterProbe {
        endpoints: vec![(Scheme::Http, addr.port())],
        ..RouterProbe::default()
    };

    let detection = probe.detect_brand(LOCALHOST).await;

    assert_eq!(detection.brand, Brand::Generic);
    assert!(detection.matched.is_none());
}

#[tokio::test]
async fn early_keyword_on_an_oversized_page_still_matches() {
    let mut page = String::from("<html><title>NETGEAR genie</title>");
    page.push_str(&"x".repeat(9 * 1024));
    let (addr, _) = support::serve_counted_body(page).await;

    let probe = RouterProbe {
        endpoints: vec![(Scheme::Http, addr.port())],
        ..RouterProbe::default()
    };

    let detection = probe.detect_brand(LOCALHOST).await;

    assert_eq!(detection.brand, Brand::Netgear);
    let matched = detection.matched.expect("keyword match expected");
    assert_eq!(matched.keyword, "netgear");
}

#[tokio::test]
async fn first_keyword_hit_stops_the_endpoint_walk() {
    let first = support::serve_body("<html>ASUS RT-AX88U login</html>").await;
    let (second, hits) = support::serve_counted_body("<html>tenda</html>".to_string()).await;

    let probe = RouterProbe {
        endpoints: vec![(Scheme::Http, first.port()), (Scheme::Http, second.port())],
        ..RouterProbe::default()
    };

    let detection = probe.detect_brand(LOCALHOST).await;

    assert_eq!(detection.brand, Brand::Asus);
    assert_eq!(detection.matched.map(|m| m.port), Some(first.port()));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// Binding a second loopback address is routine on Linux and nowhere else.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn sweep_prefers_earlier_candidates() {
    use tokio::net::TcpListener;

    let secondary = Ipv4Addr::new(127, 0, 0, 2);
    let first = TcpListener::bind((secondary, 0)).await.unwrap();
    let port = first.local_addr().unwrap().port();
    let second = TcpListener::bind((LOCALHOST, port)).await.unwrap();

    let probe = RouterProbe {
        candidates: vec![secondary, LOCALHOST],
        candidate_ports: vec![port],
        tcp_timeout: Duration::from_millis(500),
        ..RouterProbe::default()
    };

    let found = probe
        .discover_gateway(&MockProbe::default())
        .await
        .unwrap()
        .expect("both listeners accept");

    assert_eq!(found.ip, secondary);
    assert_eq!(found.source, GatewaySource::CandidateProbe);
    drop((first, second));
}
