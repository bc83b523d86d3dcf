pub mod passwords;
pub mod qr;
pub mod router;
pub mod scan;
pub mod speedtest;
pub mod status;

use clap::{Parser, Subcommand};
use wispr_core::qr::QrSecurity;


#[derive(Parser)]
#[command(name = "wispr")]
#[command(about = "A friendly WiFi companion for the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print machine-readable JSON on stdout instead of decorated output
    #[arg(long, global = true)]
    pub json: bool,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List nearby WiFi networks
    #[command(alias = "s")]
    Scan,
    /// Locate the router and fingerprint its vendor
    #[command(alias = "r")]
    Router {
        /// Username for the login bookmark URL
        #[arg(long)]
        user: Option<String>,
        /// Password for the login bookmark URL
        #[arg(long)]
        pass: Option<String>,
    },
    /// Show WiFi credentials saved on this device
    #[command(alias = "p")]
    Passwords {
        /// Only show networks whose SSID contains this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// Measure download, upload and ping
    #[command(alias = "st")]
    Speedtest,
    /// Render a scannable WiFi QR code
    #[command(alias = "q")]
    Qr {
        /// Network name to encode
        #[arg(long)]
        ssid: Option<String>,
        /// Network password to encode
        #[arg(long, default_value = "")]
        password: String,
        /// One of wpa2, wpa, wep, nopass
        #[arg(long, default_value = "wpa2")]
        security: QrSecurity,
        /// Encode a credential saved on this device instead
        #[arg(long, value_name = "SSID", conflicts_with = "ssid")]
        saved: Option<String>,
    },
    /// Show the current connection at a glance
    #[command(alias = "i")]
    Status,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
