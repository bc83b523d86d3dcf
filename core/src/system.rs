//! # Local System Lookups
//!
//! Interface enumeration for the status view.

use pnet::datalink;

use wispr_common::model::wifi::InterfaceSummary;

/// Interfaces worth showing: up, not loopback, carrying at least one
/// address. Wired interfaces sort first.
pub fn interface_summaries() -> Vec<InterfaceSummary> {
    let mut interfaces: Vec<datalink::NetworkInterface> = datalink::interfaces()
        .into_iter()
        .filter(|i| i.is_up() && !i.is_loopback() && !i.ips.is_empty())
        .collect();

    interfaces.sort_by_key(|i| if i.name.starts_with('e') { 0 } else { 1 });

    interfaces
        .into_iter()
        .map(|i| InterfaceSummary {
            name: i.name,
            addresses: i.ips.iter().map(|net| net.to_string()).collect(),
            mac: i.mac.map(|mac| mac.to_string()),
        })
        .collect()
}
