//! # Platform Tool Output Parsers
//!
//! Pure functions over the text the platform tools emit. Grammar quirks of
//! each tool are documented on the parser that handles them; nothing here
//! spawns a process.

use std::net::Ipv4Addr;

use wispr_common::model::wifi::{SavedCredential, WifiNetwork};

/// `ipconfig` (Windows): lines carrying a "Default Gateway" label, first
/// value after the final colon that parses as IPv4. Dual-stack adapters put
/// the IPv6 gateway on the label line and the IPv4 one on an unlabeled
/// continuation line; those hosts fall through to the candidate sweep.
pub fn gateway_from_ipconfig(output: &str) -> Option<Ipv4Addr> {
    output
        .lines()
        .filter(|line| line.contains("Default Gateway"))
        .filter_map(|line| line.rsplit(':').next())
        .find_map(|value| value.trim().parse().ok())
}

/// `ip route` (Linux): the `default via <addr>` line.
pub fn gateway_from_ip_route(output: &str) -> Option<Ipv4Addr> {
    output
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("default via "))
        .filter_map(|rest| rest.split_whitespace().next())
        .find_map(|value| value.parse().ok())
}

/// `netstat -rn` (macOS): the first `default` row whose second column is an
/// IPv4 address. The IPv6 routing section repeats the `default` label with
/// link-local next hops; those fail the parse and are skipped.
pub fn gateway_from_netstat(output: &str) -> Option<Ipv4Addr> {
    output
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("default"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .find_map(|value| value.parse().ok())
}

/// `netsh wlan show networks mode=bssid` (Windows): indented blocks, one per
/// network, opened by an `SSID <n> : <name>` header. Signal and channel
/// belong to the BSSID sub-blocks; the strongest-per-SSID merge happens
/// later, so the last value seen in a block wins here.
pub fn networks_from_netsh(output: &str) -> Vec<WifiNetwork> {
    let mut networks: Vec<WifiNetwork> = Vec::new();
    let mut current: Option<WifiNetwork> = None;

    for line in output.lines() {
        let line = line.trim();

        if let Some(ssid) = netsh_ssid_header(line) {
            if let Some(done) = current.take() {
                networks.push(done);
            }
            current = Some(WifiNetwork {
                ssid: ssid.to_string(),
                signal: 0,
                security: "Unknown".to_string(),
                channel: None,
            });
            continue;
        }

        let Some(net) = current.as_mut() else {
            continue;
        };

        if line.starts_with("Authentication") {
            if let Some((_, value)) = line.split_once(':') {
                net.security = value.trim().to_string();
            }
        } else if line.starts_with("Signal") {
            if let Some((_, value)) = line.split_once(':') {
                if let Ok(pct) = value.trim().trim_end_matches('%').parse::<u8>() {
                    net.signal = pct.min(100);
                }
            }
        } else if line.starts_with("Channel") {
            if let Some((_, value)) = line.split_once(':') {
                let value = value.trim();
                if !value.is_empty() {
                    net.channel = Some(value.to_string());
                }
            }
        }
    }

    if let Some(done) = current.take() {
        networks.push(done);
    }
    networks
}

/// Matches `SSID <digits> : <name>` and nothing else; `BSSID` rows share the
/// suffix but not the prefix.
fn netsh_ssid_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("SSID")?.trim_start();
    let after_index = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_index.len() == rest.len() {
        return None;
    }
    Some(after_index.trim_start().strip_prefix(':')?.trim())
}

/// `nmcli -t -f SSID,SIGNAL,SECURITY,CHAN device wifi list` (Linux). Terse
/// mode separates fields with `:` and escapes literal colons and
/// backslashes, so SSIDs keep their exact spelling.
pub fn networks_from_nmcli(output: &str) -> Vec<WifiNetwork> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields = split_terse(line);
            if fields.len() < 4 {
                return None;
            }
            let ssid = if fields[0] == "--" { "" } else { &fields[0] };
            let signal = fields[1].parse::<u8>().unwrap_or(0).min(100);
            let channel = (!fields[3].is_empty()).then(|| fields[3].clone());
            Some(WifiNetwork {
                ssid: ssid.to_string(),
                signal,
                security: fields[2].clone(),
                channel,
            })
        })
        .collect()
}

/// Splits one nmcli terse line, honoring `\:` and `\\` escapes.
fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    field.push(escaped);
                }
            }
            ':' => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// `airport -s` (macOS): whitespace-aligned columns
/// `SSID BSSID RSSI CHANNEL HT CC SECURITY`. Rows are recognized by an RSSI
/// that parses as an integer, which also drops the header. The security
/// column sits after the country code and may span several tokens; a row
/// without one is open.
pub fn networks_from_airport(output: &str) -> Vec<WifiNetwork> {
    output
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return None;
            }
            let rssi: i64 = parts[2].parse().ok()?;
            let security = if parts.len() > 6 {
                parts[6..].join(" ")
            } else {
                "Open".to_string()
            };
            Some(WifiNetwork {
                ssid: parts[0].to_string(),
                signal: rssi_to_percent(rssi),
                security,
                channel: Some(parts[3].to_string()),
            })
        })
        .collect()
}

/// Maps raw RSSI (dBm) onto 0..=100, with -90 dBm as the floor and -30 dBm
/// as the ceiling.
pub fn rssi_to_percent(rssi: i64) -> u8 {
    ((rssi + 90) * 100 / 60).clamp(0, 100) as u8
}

/// `netsh wlan show interfaces` (Windows): the `SSID :` row. `BSSID` rows
/// must not match, hence the prefix check on the trimmed line.
pub fn ssid_from_netsh_interfaces(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("BSSID"))
        .filter_map(|line| line.strip_prefix("SSID")?.trim_start().strip_prefix(':'))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// `nmcli -t -f ACTIVE,SSID device wifi` (Linux): the row flagged `yes`.
pub fn ssid_from_nmcli_active(output: &str) -> Option<String> {
    output
        .lines()
        .map(split_terse)
        .filter(|fields| fields.len() >= 2 && fields[0].eq_ignore_ascii_case("yes"))
        .map(|fields| fields[1].clone())
        .find(|ssid| !ssid.is_empty())
}

/// `airport -I` (macOS): the `SSID:` row, skipping `BSSID:`.
pub fn ssid_from_airport_info(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("SSID:"))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// `netsh wlan show profiles` (Windows): profile names sit after the colon
/// on the `... Profile : <name>` rows.
pub fn profiles_from_netsh(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("Profile"))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// `netsh wlan show profile <name> key=clear` (Windows): the `Key Material`
/// row, absent for open networks and for runs without admin rights.
pub fn key_material_from_profile(output: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains("Key Material"))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, value)| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// One NetworkManager keyfile under `/etc/NetworkManager/system-connections`:
/// `ssid=` (or `id=` for older files) names the network, `psk=` carries the
/// passphrase when the network has one. Wired and VPN profiles share the
/// directory and yield `None`.
pub fn credential_from_keyfile(content: &str, fallback_name: &str) -> Option<SavedCredential> {
    let is_wifi = content
        .lines()
        .map(str::trim)
        .any(|line| line == "[wifi]" || line == "type=wifi");
    if !is_wifi {
        return None;
    }

    let field = |key: &str| {
        content
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix(key))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    };

    Some(SavedCredential {
        ssid: field("ssid=")
            .or_else(|| field("id="))
            .unwrap_or_else(|| fallback_name.to_string()),
        password: field("psk="),
    })
}

/// Keychain dump from `security find-generic-password -t "AirPort Network"`:
/// every `"svce"<blob>="<ssid>"` attribute names one stored network.
pub fn ssids_from_keychain(output: &str) -> Vec<String> {
    const MARKER: &str = "\"svce\"<blob>=\"";
    output
        .lines()
        .filter_map(|line| {
            let start = line.find(MARKER)? + MARKER.len();
            let rest = &line[start..];
            let end = rest.find('"')?;
            Some(rest[..end].to_string())
        })
        .filter(|ssid| !ssid.is_empty())
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const IPCONFIG: &str = "\
Windows IP Configuration\r\n\
\r\n\
Wireless LAN adapter Wi-Fi:\r\n\
\r\n\
   Connection-specific DNS Suffix  . : lan\r\n\
   IPv4 Address. . . . . . . . . . . : 192.168.1.42\r\n\
   Subnet Mask . . . . . . . . . . . : 255.255.255.0\r\n\
   Default Gateway . . . . . . . . . : 192.168.1.1\r\n";

    const IPCONFIG_DUAL_STACK: &str = "\
Ethernet adapter Ethernet:\r\n\
\r\n\
   Default Gateway . . . . . . . . . : fe80::1%12\r\n\
                                       192.168.0.1\r\n";

    const IP_ROUTE: &str = "\
default via 192.168.1.1 dev wlan0 proto dhcp metric 600\n\
192.168.1.0/24 dev wlan0 proto kernel scope link src 192.168.1.42 metric 600\n";

    const NETSTAT: &str = "\
Routing tables\n\
\n\
Internet:\n\
Destination        Gateway            Flags        Netif Expire\n\
default            10.0.0.1           UGScg          en0\n\
10.0.0/24          link#12            UCS            en0\n\
\n\
Internet6:\n\
Destination        Gateway            Flags        Netif Expire\n\
default            fe80::1%en0        UGcg           en0\n";

    const NETSH_NETWORKS: &str = "\
Interface name : Wi-Fi\r\n\
There are 2 networks currently visible.\r\n\
\r\n\
SSID 1 : HomeNet\r\n\
    Network type            : Infrastructure\r\n\
    Authentication          : WPA2-Personal\r\n\
    Encryption              : CCMP\r\n\
    BSSID 1                 : aa:bb:cc:dd:ee:01\r\n\
         Signal             : 87%\r\n\
         Radio type         : 802.11n\r\n\
         Channel            : 6\r\n\
\r\n\
SSID 2 : CoffeeShop\r\n\
    Network type            : Infrastructure\r\n\
    Authentication          : Open\r\n\
    Encryption              : None\r\n\
    BSSID 1                 : aa:bb:cc:dd:ee:02\r\n\
         Signal             : 52%\r\n\
         Channel            : 11\r\n";

    const NMCLI_LIST: &str = "\
HomeNet:87:WPA2:6\n\
Lab\\: Annex:64:WPA1 WPA2:11\n\
--:42:WPA2:1\n\
FreeWifi:31::36\n";

    const AIRPORT_SCAN: &str = "\
                            SSID BSSID             RSSI CHANNEL HT CC SECURITY (auth/unicast/group)\n\
                         HomeNet aa:bb:cc:dd:ee:01 -42  6       Y  US WPA2(PSK/AES/AES)\n\
                      CoffeeShop aa:bb:cc:dd:ee:02 -71  11      Y  US WPA(PSK/TKIP/TKIP) WPA2(PSK/AES/AES)\n\
                        FreeWifi aa:bb:cc:dd:ee:03 -88  36      Y  US\n";

    const NETSH_INTERFACES: &str = "\
There is 1 interface on the system:\r\n\
\r\n\
    Name                   : Wi-Fi\r\n\
    State                  : connected\r\n\
    SSID                   : HomeNet\r\n\
    BSSID                  : aa:bb:cc:dd:ee:01\r\n\
    Signal                 : 87%\r\n";

    const AIRPORT_INFO: &str = "\
     agrCtlRSSI: -42\n\
     agrExtRSSI: 0\n\
            SSID: HomeNet\n\
           BSSID: aa:bb:cc:dd:ee:01\n\
         channel: 6\n";

    const NETSH_PROFILES: &str = "\
Profiles on interface Wi-Fi:\r\n\
\r\n\
Group policy profiles (read only)\r\n\
---------------------------------\r\n\
    <None>\r\n\
\r\n\
User profiles\r\n\
-------------\r\n\
    All User Profile     : HomeNet\r\n\
    All User Profile     : CoffeeShop\r\n";

    const NETSH_PROFILE_DETAIL: &str = "\
Profile HomeNet on interface Wi-Fi:\r\n\
\r\n\
    Security settings\r\n\
    -----------------\r\n\
        Authentication         : WPA2-Personal\r\n\
        Cipher                 : CCMP\r\n\
        Security key           : Present\r\n\
        Key Material           : hunter2\r\n";

    const KEYFILE: &str = "\
[connection]\n\
id=Home Connection\n\
type=wifi\n\
\n\
[wifi]\n\
ssid=HomeNet\n\
\n\
[wifi-security]\n\
key-mgmt=wpa-psk\n\
psk=hunter2\n";

    const KEYCHAIN: &str = "\
keychain: \"/Library/Keychains/System.keychain\"\n\
class: \"genp\"\n\
attributes:\n\
    \"svce\"<blob>=\"HomeNet\"\n\
    \"svce\"<blob>=\"CoffeeShop\"\n";

    #[test]
    fn ipconfig_gateway() {
        assert_eq!(
            gateway_from_ipconfig(IPCONFIG),
            Some(Ipv4Addr::new(192, 168, 1, 1))
        );
    }

    #[test]
    fn ipconfig_skips_ipv6_gateway() {
        assert_eq!(gateway_from_ipconfig(IPCONFIG_DUAL_STACK), None);
    }

    #[test]
    fn ip_route_gateway() {
        assert_eq!(
            gateway_from_ip_route(IP_ROUTE),
            Some(Ipv4Addr::new(192, 168, 1, 1))
        );
    }

    #[test]
    fn netstat_gateway_skips_ipv6_section() {
        assert_eq!(
            gateway_from_netstat(NETSTAT),
            Some(Ipv4Addr::new(10, 0, 0, 1))
        );
    }

    #[test]
    fn no_gateway_in_empty_output() {
        assert_eq!(gateway_from_ip_route(""), None);
        assert_eq!(gateway_from_netstat("Routing tables\n"), None);
    }

    #[test]
    fn netsh_blocks_become_networks() {
        let nets = networks_from_netsh(NETSH_NETWORKS);
        assert_eq!(nets.len(), 2);
        assert_eq!(nets[0].ssid, "HomeNet");
        assert_eq!(nets[0].signal, 87);
        assert_eq!(nets[0].security, "WPA2-Personal");
        assert_eq!(nets[0].channel.as_deref(), Some("6"));
        assert_eq!(nets[1].ssid, "CoffeeShop");
        assert!(nets[1].is_open());
    }

    #[test]
    fn netsh_header_ignores_bssid_rows() {
        assert_eq!(netsh_ssid_header("SSID 3 : Lab"), Some("Lab"));
        assert_eq!(netsh_ssid_header("BSSID 1 : aa:bb:cc:dd:ee:01"), None);
        assert_eq!(netsh_ssid_header("SSID : Lab"), None);
    }

    #[test]
    fn nmcli_terse_rows() {
        let nets = networks_from_nmcli(NMCLI_LIST);
        assert_eq!(nets.len(), 4);
        assert_eq!(nets[0].ssid, "HomeNet");
        assert_eq!(nets[0].signal, 87);
        assert_eq!(nets[1].ssid, "Lab: Annex");
        assert_eq!(nets[1].security, "WPA1 WPA2");
        assert_eq!(nets[2].ssid, "");
        assert!(nets[3].is_open());
        assert_eq!(nets[3].channel.as_deref(), Some("36"));
    }

    #[test]
    fn airport_rows_convert_rssi() {
        let nets = networks_from_airport(AIRPORT_SCAN);
        assert_eq!(nets.len(), 3);
        assert_eq!(nets[0].ssid, "HomeNet");
        assert_eq!(nets[0].signal, 80);
        assert_eq!(nets[0].security, "WPA2(PSK/AES/AES)");
        assert_eq!(nets[1].security, "WPA(PSK/TKIP/TKIP) WPA2(PSK/AES/AES)");
        assert_eq!(nets[2].signal, 3);
        assert_eq!(nets[2].security, "Open");
    }

    #[test]
    fn rssi_percent_clamps_both_ends() {
        assert_eq!(rssi_to_percent(-30), 100);
        assert_eq!(rssi_to_percent(-10), 100);
        assert_eq!(rssi_to_percent(-60), 50);
        assert_eq!(rssi_to_percent(-90), 0);
        assert_eq!(rssi_to_percent(-110), 0);
    }

    #[test]
    fn current_ssid_per_platform() {
        assert_eq!(
            ssid_from_netsh_interfaces(NETSH_INTERFACES).as_deref(),
            Some("HomeNet")
        );
        assert_eq!(
            ssid_from_nmcli_active("no:CoffeeShop\nyes:HomeNet\n").as_deref(),
            Some("HomeNet")
        );
        assert_eq!(
            ssid_from_airport_info(AIRPORT_INFO).as_deref(),
            Some("HomeNet")
        );
    }

    #[test]
    fn current_ssid_absent_when_disconnected() {
        assert_eq!(ssid_from_netsh_interfaces("    State : disconnected\r\n"), None);
        assert_eq!(ssid_from_nmcli_active("no:HomeNet\nno:CoffeeShop\n"), None);
        assert_eq!(ssid_from_airport_info("     AirPort: Off\n"), None);
    }

    #[test]
    fn profile_names_from_listing() {
        assert_eq!(profiles_from_netsh(NETSH_PROFILES), ["HomeNet", "CoffeeShop"]);
    }

    #[test]
    fn key_material_when_present() {
        assert_eq!(
            key_material_from_profile(NETSH_PROFILE_DETAIL).as_deref(),
            Some("hunter2")
        );
        assert_eq!(key_material_from_profile("    Security key : Absent\r\n"), None);
    }

    #[test]
    fn keyfile_ssid_and_psk() {
        let cred = credential_from_keyfile(KEYFILE, "fallback").unwrap();
        assert_eq!(cred.ssid, "HomeNet");
        assert_eq!(cred.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn keyfile_without_psk_falls_back_to_file_name() {
        let cred = credential_from_keyfile("[connection]\ntype=wifi\n", "guest-net").unwrap();
        assert_eq!(cred.ssid, "guest-net");
        assert_eq!(cred.password, None);
    }

    #[test]
    fn wired_keyfile_is_not_a_network() {
        let wired = "[connection]\nid=Office LAN\ntype=ethernet\n";
        assert_eq!(credential_from_keyfile(wired, "office"), None);
    }

    #[test]
    fn keychain_service_names() {
        assert_eq!(ssids_from_keychain(KEYCHAIN), ["HomeNet", "CoffeeShop"]);
    }
}
