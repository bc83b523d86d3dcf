//! # WiFi QR Sharing
//!
//! Builds the `WIFI:` payload phones understand and renders it as
//! half-block unicode for the terminal.

use std::fmt;
use std::str::FromStr;

use qrcode::QrCode;
use qrcode::render::unicode;

/// Security declared in the payload's `T:` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrSecurity {
    Wpa2,
    Wpa,
    Wep,
    /// Open network; the payload carries no passphrase.
    Nopass,
}

impl QrSecurity {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrSecurity::Wpa2 => "WPA2",
            QrSecurity::Wpa => "WPA",
            QrSecurity::Wep => "WEP",
            QrSecurity::Nopass => "nopass",
        }
    }
}

impl fmt::Display for QrSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrSecurity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wpa2" => Ok(QrSecurity::Wpa2),
            "wpa" => Ok(QrSecurity::Wpa),
            "wep" => Ok(QrSecurity::Wep),
            "nopass" | "open" | "none" => Ok(QrSecurity::Nopass),
            _ => Err(format!(
                "invalid security type: {s} (expected WPA2, WPA, WEP or nopass)"
            )),
        }
    }
}

/// `WIFI:T:<sec>;S:<ssid>;P:<pass>;;` with the payload metacharacters
/// escaped. `nopass` always emits an empty passphrase, whatever was
/// passed in.
pub fn wifi_qr_payload(ssid: &str, password: &str, security: QrSecurity) -> String {
    let password = match security {
        QrSecurity::Nopass => "",
        _ => password,
    };
    format!(
        "WIFI:T:{};S:{};P:{};;",
        security,
        escape_component(ssid),
        escape_component(password)
    )
}

/// Backslash-escapes the characters the payload grammar reserves.
fn escape_component(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Terminal rendering, two modules per character cell. Colors are
/// inverted so the code reads correctly on dark terminals.
pub fn render_unicode(payload: &str) -> anyhow::Result<String> {
    let code = QrCode::new(payload.as_bytes())?;
    let art = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();
    Ok(art)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
