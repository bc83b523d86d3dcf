use colored::*;
use tracing::info_span;

use crate::terminal::{colors, format, print, spinner};
use crate::wprint;
use wispr_common::{config::Config, model::wifi::SavedCredential, success};
use wispr_core::passwords;
use wispr_core::platform::PlatformNetworkProbe;

pub async fn passwords(
    platform: &dyn PlatformNetworkProbe,
    filter: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let span = info_span!("passwords", indicatif.pb_show = true);
    let guard = span.enter();
    spinner::attach(&span, "collecting stored profiles...");

    let mut credentials: Vec<SavedCredential> = passwords::saved_credentials(platform).await?;

    drop(guard);
    drop(span);

    if let Some(needle) = filter.as_deref() {
        credentials = passwords::filter_by_ssid(credentials, needle);
    }

    if cfg.json {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
        return Ok(());
    }

    passwords_end(&credentials, cfg);
    Ok(())
}

fn passwords_end(credentials: &[SavedCredential], cfg: &Config) {
    if credentials.is_empty() {
        print::header("NO SAVED NETWORKS", cfg);
        print::no_results();
        return;
    }

    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Saved Networks", cfg);
    print_credentials(credentials, cfg);
    print_summary(credentials, cfg);
}

fn print_credentials(credentials: &[SavedCredential], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, credential) in credentials.iter().enumerate() {
        print::tree_head(idx, &credential.ssid);
        print::as_tree_one_level(vec![(
            "Password".to_string(),
            format::password_to_colored(credential.password.as_deref()),
        )]);
        if idx + 1 != credentials.len() {
            wprint!();
        }
    }
}

fn print_summary(credentials: &[SavedCredential], cfg: &Config) {
    let recovered: usize = credentials
        .iter()
        .filter(|credential| credential.password.is_some())
        .count();
    let count: ColoredString = format!("{} profiles", credentials.len()).bold().green();
    let revealed: ColoredString = format!("{recovered} with passwords").bold().yellow();
    let output: &ColoredString =
        &format!("Recovery complete: {count}, {revealed}").color(colors::TEXT_DEFAULT);

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
