use colored::*;
use tracing::info_span;

use crate::terminal::{colors, format, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, model::wifi::WifiNetwork, success};
use wispr_core::platform::PlatformNetworkProbe;
use wispr_core::wifi;

pub async fn scan(platform: &dyn PlatformNetworkProbe, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("scan", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "sweeping the airwaves...");

    let networks: Vec<WifiNetwork> = wifi::scan_networks(platform).await?;

    drop(guard);
    drop(span);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&networks)?);
        return Ok(());
    }

    scan_ends(&networks, cfg);
    Ok(())
}

fn scan_ends(networks: &[WifiNetwork], cfg: &Config) {
    if networks.is_empty() {
        print::header("ZERO NETWORKS IN RANGE", cfg);
        print::no_results();
        return;
    }

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Nearby Networks", cfg);
    print_networks(networks, cfg);
    print_summary(networks, cfg);
}

fn print_networks(networks: &[WifiNetwork], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, network) in networks.iter().enumerate() {
        print_network_tree(network, idx);
        if idx + 1 != networks.len() {
            wprint!();
        }
    }
}

fn print_network_tree(network: &WifiNetwork, idx: usize) {
    print::tree_head(idx, &network.ssid);
    print::as_tree_one_level(format::network_to_details(network));
}

fn print_summary(networks: &[WifiNetwork], cfg: &Config) {
    let count: ColoredString = format!("{} networks", networks.len()).bold().green();
    let strongest: ColoredString = networks
        .iter()
        .map(|network| network.signal)
        .max()
        .map(|signal| format!("{signal}%"))
        .unwrap_or_default()
        .bold()
        .yellow();
    let output: &ColoredString = &format!("Scan complete: {count} in range, best signal {strongest}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        _ => {
            wprint!();
            success!("{}", output);
        }
    }
}
