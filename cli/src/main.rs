mod commands;
mod terminal;

use commands::{CommandLine, Commands, passwords, qr, router, scan, speedtest, status};
use wispr_common::config::Config;
use wispr_core::platform;

use crate::terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config {
        json: commands.json,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    logging::init(&cfg);
    print::banner(&cfg);

    let probe = platform::native();

    match commands.command {
        Commands::Scan => {
            print::header("scanning nearby networks", &cfg);
            scan::scan(probe.as_ref(), &cfg).await
        }
        Commands::Router { user, pass } => {
            print::header("probing the router", &cfg);
            router::router(probe.as_ref(), user, pass, &cfg).await
        }
        Commands::Passwords { filter } => {
            print::header("reading saved credentials", &cfg);
            passwords::passwords(probe.as_ref(), filter, &cfg).await
        }
        Commands::Speedtest => {
            print::header("measuring throughput", &cfg);
            speedtest::speedtest(&cfg).await
        }
        Commands::Qr {
            ssid,
            password,
            security,
            saved,
        } => {
            print::header("sharing a network", &cfg);
            qr::qr(probe.as_ref(), ssid, password, security, saved, &cfg).await
        }
        Commands::Status => {
            print::header("checking link status", &cfg);
            status::status(probe.as_ref(), &cfg).await
        }
    }
}
