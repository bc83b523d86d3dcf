use colored::*;
use tracing::info_span;

use crate::terminal::{colors, format, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, model::speed::SpeedTestResult, success};
use wispr_core::speed;

pub async fn speedtest(cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("speedtest", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "measuring against the nearest server...");

    let result: SpeedTestResult = speed::run_speed_test().await?;

    drop(guard);
    drop(span);

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Throughput Report", cfg);
    if cfg.quiet < 2 {
        print_meters(&result);
        wprint!();
        print_origin(&result);
    }
    print_summary(&result, cfg);
    Ok(())
}

fn print_meters(result: &SpeedTestResult) {
    print::GLOBAL_KEY_WIDTH.set(6);

    print::aligned_line(
        "Down",
        format!(
            "{} {}",
            format::meter_to_colored(result.download_mbps),
            format!("{:.2} Mbps", result.download_mbps).bold()
        ),
    );
    print::aligned_line(
        "Up",
        format!(
            "{} {}",
            format::meter_to_colored(result.upload_mbps),
            format!("{:.2} Mbps", result.upload_mbps).bold()
        ),
    );

    let ping: String = match result.ping_ms {
        Some(ms) => format!("{ms:.1} ms"),
        None => "n/a".to_string(),
    };
    print::aligned_line("Ping", ping);
}

fn print_origin(result: &SpeedTestResult) {
    print::aligned_line("Engine", result.engine.to_string());
    if let Some(server) = result.server.as_deref() {
        print::aligned_line("Server", server);
    }
    if let Some(isp) = result.isp.as_deref() {
        print::aligned_line("ISP", isp);
    }
    print::aligned_line("Time", result.timestamp.clone());
}

fn print_summary(result: &SpeedTestResult, cfg: &Config) {
    let down: ColoredString = format!("{:.2} Mbps down", result.download_mbps).bold().green();
    let up: ColoredString = format!("{:.2} Mbps up", result.upload_mbps).bold().yellow();
    let output: &ColoredString =
        &format!("Speed test complete: {down}, {up}").color(colors::TEXT_DEFAULT);
    let verdict: String = format!("{}", format::verdict_to_colored(result.download_mbps));

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
            print::centerln(&verdict);
        }
        _ => {
            wprint!();
            success!("{}", output);
            wprint!(&verdict);
        }
    }
}
