use colored::*;
use tracing::{info_span, warn};

use crate::terminal::{colors, format, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, model::router::RouterInfo, success};
use wispr_core::platform::PlatformNetworkProbe;
use wispr_core::router::RouterProbe;

pub async fn router(
    platform: &dyn PlatformNetworkProbe,
    user: Option<String>,
    pass: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let probe = RouterProbe::default();

    let span = info_span!("router", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "locating the gateway...");

    let info: Option<RouterInfo> = probe.scan_router(platform).await?;

    drop(guard);
    drop(span);

    let login_url = login_url(info.as_ref(), user, pass);

    if cfg.json {
        let mut payload = serde_json::json!({ "router": info });
        if let Some(url) = &login_url {
            payload["login_url"] = serde_json::Value::String(url.clone());
        }
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let Some(info) = info else {
        print::header("NO ROUTER FOUND", cfg);
        print::no_results();
        return Ok(());
    };

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Router Profile", cfg);
    print_profile(&info, cfg);

    if let Some(url) = &login_url {
        print_login(url, cfg);
    }

    print_summary(&info, cfg);
    Ok(())
}

fn login_url(info: Option<&RouterInfo>, user: Option<String>, pass: Option<String>) -> Option<String> {
    let info = info?;
    if user.is_none() && pass.is_none() {
        return None;
    }

    let user = user.unwrap_or_default();
    let pass = pass.unwrap_or_default();
    Some(format!("http://{}:{}@{}/", user, pass, info.ip))
}

fn print_profile(info: &RouterInfo, cfg: &Config) {
    print::GLOBAL_KEY_WIDTH.set(7);

    let reachable: ColoredString = "✔ reachable".green().bold();
    print::aligned_line(
        "Address",
        format!("{} {}", info.ip.to_string().color(colors::ADDRESS), reachable),
    );
    print::aligned_line("Source", info.source.to_string());

    let brand_badge: ColoredString = match info.matched {
        Some(_) => "(auto-detected)".green(),
        None => "(generic fallback)".yellow(),
    };
    print::aligned_line(
        "Brand",
        format!("{} {}", info.brand.name().color(colors::ACCENT), brand_badge),
    );

    if let Some(matched) = &info.matched {
        print::aligned_line(
            "Spotted",
            format!(
                "\"{}\" at {}://{}:{}",
                matched.keyword, matched.scheme, info.ip, matched.port
            ),
        );
    }

    if cfg.quiet >= 2 {
        return;
    }

    wprint!();
    print::print_status("quick-launch pages");
    print::as_tree_one_level(vec![
        (
            "http".to_string(),
            format!("http://{}/", info.ip).color(colors::ADDRESS),
        ),
        (
            "alt".to_string(),
            format!("http://{}:8080/", info.ip).color(colors::ADDRESS),
        ),
        (
            "https".to_string(),
            format!("https://{}/", info.ip).color(colors::ADDRESS),
        ),
    ]);

    wprint!();
    print::print_status(format!("factory defaults for {}", info.brand.name()));
    let rows: Vec<format::Detail> = info
        .defaults
        .iter()
        .map(|credential| {
            (
                credential.username.to_string(),
                format::password_to_colored(Some(credential.password)),
            )
        })
        .collect();
    print::as_tree_one_level(rows);
}

fn print_login(url: &str, cfg: &Config) {
    if cfg.quiet < 2 {
        wprint!();
    }
    print::aligned_line("Login", url.to_string().color(colors::ADDRESS));
    warn!("routers may ignore credentials embedded in a URL");
}

fn print_summary(info: &RouterInfo, cfg: &Config) {
    let brand: ColoredString = info.brand.name().bold().green();
    let output: &ColoredString =
        &format!("Router profiled: {} at {}", brand, info.ip).color(colors::TEXT_DEFAULT);

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
