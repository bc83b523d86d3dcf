use colored::*;
use tracing::info_span;

use crate::terminal::{colors, format, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, success};
use wispr_common::model::router::DiscoveredGateway;
use wispr_common::model::wifi::{InterfaceSummary, LinkStatus};
use wispr_core::platform::PlatformNetworkProbe;
use wispr_core::router::RouterProbe;
use wispr_core::{status as connectivity, system};

pub async fn status(platform: &dyn PlatformNetworkProbe, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("status", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "taking the pulse...");

    let link: LinkStatus = connectivity::link_status(platform).await;

    spinner::update(&span, "locating the gateway...");
    let gateway: Option<DiscoveredGateway> =
        RouterProbe::default().discover_gateway(platform).await?;

    let interfaces: Vec<InterfaceSummary> = system::interface_summaries();

    drop(guard);
    drop(span);

    let hostname: String = sys_info::hostname().unwrap_or_else(|_| "unknown".to_string());
    let os: String = match (sys_info::os_type(), sys_info::os_release()) {
        (Ok(kind), Ok(release)) => format!("{kind} {release}"),
        (Ok(kind), Err(_)) => kind,
        _ => platform.os_name().to_string(),
    };

    if cfg.json {
        let doc = serde_json::json!({
            "ssid": link.ssid,
            "internet": link.internet,
            "gateway": gateway,
            "hostname": hostname,
            "os": os,
            "interfaces": interfaces,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Link Status", cfg);
    print_glance(&link, gateway, &hostname, &os);

    if cfg.quiet < 2 {
        print_interfaces(&interfaces);
    }

    print_summary(&link, cfg);
    Ok(())
}

fn print_glance(link: &LinkStatus, gateway: Option<DiscoveredGateway>, hostname: &str, os: &str) {
    print::GLOBAL_KEY_WIDTH.set(8);

    print::aligned_line("Hostname", hostname);
    print::aligned_line("OS", os);

    let ssid: ColoredString = match link.ssid.as_deref() {
        Some(ssid) => ssid.color(colors::SSID),
        None => "(not associated)".dimmed(),
    };
    print::aligned_line("SSID", ssid);

    let internet: ColoredString = if link.internet {
        "✔ online".green().bold()
    } else {
        "✘ offline".red().bold()
    };
    print::aligned_line("Internet", internet);

    let gateway: ColoredString = match gateway {
        Some(gateway) => format!(
            "{} via {}",
            gateway.ip.to_string().color(colors::ADDRESS),
            gateway.source
        )
        .normal(),
        None => "(none found)".dimmed(),
    };
    print::aligned_line("Gateway", gateway);
}

fn print_interfaces(interfaces: &[InterfaceSummary]) {
    if interfaces.is_empty() {
        return;
    }

    wprint!();
    print::print_status("interfaces");
    for (idx, interface) in interfaces.iter().enumerate() {
        print::tree_head(idx, &interface.name);
        print::as_tree_one_level(format::interface_to_details(interface));
        if idx + 1 != interfaces.len() {
            wprint!();
        }
    }
}

fn print_summary(link: &LinkStatus, cfg: &Config) {
    let state: ColoredString = if link.internet {
        "online".bold().green()
    } else {
        "offline".bold().red()
    };
    let output: &ColoredString =
        &format!("This device is {state}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
            print::end_of_program();
        }
        _ => {
            wprint!();
            success!("{}", output);
        }
    }
}
