use colored::*;
use wispr_common::model::wifi::{InterfaceSummary, WifiNetwork};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

const METER_CELLS: usize = 20;
const METER_FULL_SCALE_MBPS: f64 = 200.0;

pub fn signal_to_colored(signal: u8) -> ColoredString {
    let color = if signal >= 70 {
        colors::SIGNAL_STRONG
    } else if signal >= 40 {
        colors::SIGNAL_OKAY
    } else {
        colors::SIGNAL_WEAK
    };
    format!("{signal}%").color(color).bold()
}

pub fn security_to_colored(network: &WifiNetwork) -> ColoredString {
    if network.is_open() {
        "Open".red().bold()
    } else {
        network.security.as_str().color(colors::TEXT_DEFAULT)
    }
}

pub fn network_to_details(network: &WifiNetwork) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Signal".to_string(), signal_to_colored(network.signal)),
        ("Security".to_string(), security_to_colored(network)),
    ];

    if let Some(channel) = network.channel.as_deref() {
        details.push(("Channel".to_string(), channel.color(colors::TEXT_DEFAULT)));
    }

    details
}

pub fn password_to_colored(password: Option<&str>) -> ColoredString {
    match password {
        Some(password) if !password.is_empty() => password.color(colors::SECRET),
        Some(_) => "(empty)".dimmed(),
        None => "(not stored)".dimmed(),
    }
}

pub fn interface_to_details(interface: &InterfaceSummary) -> Vec<Detail> {
    let mut details: Vec<Detail> = interface
        .addresses
        .iter()
        .map(|address| {
            let key = if address.contains(':') { "IPv6" } else { "IPv4" };
            (key.to_string(), address.as_str().color(colors::ADDRESS))
        })
        .collect();

    if let Some(mac) = interface.mac.as_deref() {
        details.push(("MAC".to_string(), mac.color(colors::SEPARATOR)));
    }

    details
}

/// A throughput bar against a 200 Mbps full scale.
pub fn meter_to_colored(mbps: f64) -> ColoredString {
    let ratio = (mbps / METER_FULL_SCALE_MBPS).clamp(0.0, 1.0);
    let filled = (ratio * METER_CELLS as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(METER_CELLS - filled));
    bar.color(speed_color(mbps))
}

/// What the measured download rate is actually good for.
pub fn quality_verdict(download_mbps: f64) -> &'static str {
    if download_mbps >= 100.0 {
        "Excellent – 4K streaming, gaming, large downloads"
    } else if download_mbps >= 50.0 {
        "Very Good – HD streaming, video calls"
    } else if download_mbps >= 25.0 {
        "Good – HD streaming, general browsing"
    } else if download_mbps >= 10.0 {
        "Fair – Basic streaming"
    } else {
        "Poor – Basic browsing only"
    }
}

pub fn verdict_to_colored(download_mbps: f64) -> ColoredString {
    quality_verdict(download_mbps)
        .color(speed_color(download_mbps))
        .bold()
}

fn speed_color(mbps: f64) -> Color {
    if mbps >= 50.0 {
        colors::SIGNAL_STRONG
    } else if mbps >= 10.0 {
        colors::SIGNAL_OKAY
    } else {
        colors::SIGNAL_WEAK
    }
}
