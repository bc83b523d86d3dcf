use anyhow::bail;
use colored::*;
use tracing::info_span;

use crate::terminal::{colors, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, success};
use wispr_core::passwords;
use wispr_core::platform::PlatformNetworkProbe;
use wispr_core::qr::{self, QrSecurity};

pub async fn qr(
    platform: &dyn PlatformNetworkProbe,
    ssid: Option<String>,
    password: String,
    security: QrSecurity,
    saved: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let (ssid, password, security) = match saved {
        Some(wanted) => from_saved(platform, &wanted).await?,
        None => match ssid {
            Some(ssid) => (ssid, password, security),
            None => bail!("either --ssid or --saved is required"),
        },
    };

    let payload: String = qr::wifi_qr_payload(&ssid, &password, security);
    let art: String = qr::render_unicode(&payload)?;

    if cfg.json {
        let doc = serde_json::json!({
            "ssid": ssid,
            "security": security.as_str(),
            "payload": payload,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Scan To Join", cfg);
    for line in art.lines() {
        print::centerln(line);
    }

    if cfg.quiet < 2 {
        print::GLOBAL_KEY_WIDTH.set(8);
        print::aligned_line("Network", ssid.as_str().color(colors::SSID));
        print::aligned_line("Security", security.as_str());
    }

    print_summary(&ssid, cfg);
    Ok(())
}

/// Reuses a credential the OS already stores. Profiles without a
/// recoverable key only work for open networks.
async fn from_saved(
    platform: &dyn PlatformNetworkProbe,
    wanted: &str,
) -> anyhow::Result<(String, String, QrSecurity)> {
    let span = info_span!("qr", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "collecting stored profiles...");

    let credentials = passwords::saved_credentials(platform).await?;

    drop(guard);
    drop(span);

    let hit = credentials
        .into_iter()
        .find(|credential| credential.ssid.eq_ignore_ascii_case(wanted));

    let Some(credential) = hit else {
        bail!("no saved network called '{wanted}'");
    };

    match credential.password {
        Some(password) if !password.is_empty() => {
            Ok((credential.ssid, password, QrSecurity::Wpa2))
        }
        _ => Ok((credential.ssid, String::new(), QrSecurity::Nopass)),
    }
}

fn print_summary(ssid: &str, cfg: &Config) {
    let name: ColoredString = ssid.bold().green();
    let output: &ColoredString =
        &format!("Point a phone camera at the code to join {name}").color(colors::TEXT_DEFAULT);

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
