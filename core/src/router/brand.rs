//! Brand fingerprinting over the router's admin pages.
//!
//! Routers rarely need authentication to serve their login page, and that
//! page almost always names the vendor somewhere in the first few KiB. One
//! GET per scheme/port pair, first keyword hit wins, and any network
//! failure just advances the matrix.

use std::net::Ipv4Addr;
use std::time::Duration;

use tracing::{debug, warn};

use wispr_common::model::router::{Brand, BrandDetection, BrandMatch, Scheme};

/// Scheme/port pairs walked in order. Scheme is the outer loop so plain
/// HTTP, which most admin pages still use, is exhausted first.
pub const FINGERPRINT_ENDPOINTS: [(Scheme, u16); 8] = [
    (Scheme::Http, 80),
    (Scheme::Http, 8080),
    (Scheme::Http, 443),
    (Scheme::Http, 8443),
    (Scheme::Https, 80),
    (Scheme::Https, 8080),
    (Scheme::Https, 443),
    (Scheme::Https, 8443),
];

/// Per-request budget.
pub const FINGERPRINT_TIMEOUT: Duration = Duration::from_secs(3);

/// How much of each body is inspected.
const BODY_CAP: usize = 8 * 1024;

/// What the requests identify as. Some firmwares serve a different page to
/// unknown agents.
const USER_AGENT: &str = "Mozilla/5.0";

/// Vendor keywords in match priority: hyphenated and underscored spellings
/// come before the collapsed ones so the most specific spelling is the one
/// reported.
const BRAND_KEYWORDS: [(&str, Brand); 15] = [
    ("tp-link", Brand::TpLink),
    ("tp_link", Brand::TpLink),
    ("tplink", Brand::TpLink),
    ("d-link", Brand::DLink),
    ("dlink", Brand::DLink),
    ("netgear", Brand::Netgear),
    ("asus", Brand::Asus),
    ("linksys", Brand::Linksys),
    ("huawei", Brand::Huawei),
    ("cisco", Brand::Cisco),
    ("belkin", Brand::Belkin),
    ("tenda", Brand::Tenda),
    ("xiaomi", Brand::Xiaomi),
    ("zte", Brand::Zte),
    ("arris", Brand::Arris),
];

/// First keyword of the table found anywhere in `body`, case-independent.
pub fn match_brand(body: &str) -> Option<(&'static str, Brand)> {
    let haystack = body.to_lowercase();
    BRAND_KEYWORDS
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .copied()
}

/// Walks `endpoints` against `ip` until a keyword hits. Exhaustion is the
/// `Generic` outcome with no match recorded.
pub async fn detect(
    ip: Ipv4Addr,
    endpoints: &[(Scheme, u16)],
    timeout: Duration,
) -> BrandDetection {
    // Router certificates are self-signed for addresses, never valid
    // hostnames; validation stays off for the whole matrix.
    let client = match reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "http client unavailable, skipping fingerprint");
            return BrandDetection {
                brand: Brand::Generic,
                matched: None,
            };
        }
    };

    for &(scheme, port) in endpoints {
        let url = format!("{scheme}://{ip}:{port}/");
        debug!(%url, "fingerprinting");

        let Some(body) = fetch_prefix(&client, &url).await else {
            continue;
        };

        if let Some((keyword, brand)) = match_brand(&body) {
            debug!(%url, keyword, %brand, "keyword hit");
            return BrandDetection {
                brand,
                matched: Some(BrandMatch {
                    scheme,
                    port,
                    keyword,
                }),
            };
        }
    }

    BrandDetection {
        brand: Brand::Generic,
        matched: None,
    }
}

/// First [`BODY_CAP`] bytes of the response body, or `None` on any network
/// failure. Refused, timed out, TLS mismatch: all expected against a
/// router, all advance the matrix.
async fn fetch_prefix(client: &reqwest::Client, url: &str) -> Option<String> {
    let mut response = client.get(url).send().await.ok()?;

    let mut body: Vec<u8> = Vec::new();
    while body.len() < BODY_CAP {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(_) => return None,
        }
    }
    body.truncate(BODY_CAP);

    Some(String::from_utf8_lossy(&body).into_owned())
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

    #[test]
    fn keyword_match_is_case_independent() {
        let body = "<html><title>Powered by TP-LINK</title></html>";
        assert_eq!(match_brand(body), Some(("tp-link", Brand::TpLink)));
    }

    #[test]
    fn table_order_beats_body_position() {
        // netgear appears first in the body but tplink ranks higher in
        // the table.
        let body = "netgear reseller page for tplink hardware";
        assert_eq!(match_brand(body), Some(("tplink", Brand::TpLink)));
    }

    #[test]
    fn specific_spelling_wins_over_collapsed() {
        let body = "d-link and dlink both appear";
        assert_eq!(match_brand(body), Some(("d-link", Brand::DLink)));
    }

    #[test]
    fn unknown_vendors_do_not_match() {
        assert_eq!(match_brand("<html>ZyXEL VMG8825</html>"), None);
        assert_eq!(match_brand(""), None);
    }

    #[test]
    fn endpoint_matrix_shape() {
        assert_eq!(FINGERPRINT_ENDPOINTS.len(), 8);
        assert!(
            FINGERPRINT_ENDPOINTS[..4]
                .iter()
                .all(|(scheme, _)| *scheme == Scheme::Http)
        );
        assert!(
            FINGERPRINT_ENDPOINTS[4..]
                .iter()
                .all(|(scheme, _)| *scheme == Scheme::Https)
        );
    }
}
