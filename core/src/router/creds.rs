//! Factory-default credential table.
//!
//! Reference data compiled from vendor manuals; read-only and total over
//! [`Brand`], with the `Generic` list covering anything unrecognized. Order
//! within a list is the order worth trying them in.

use wispr_common::model::router::{Brand, Credential};

const TP_LINK: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "password"),
];

const D_LINK: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "1234"),
];

const NETGEAR: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", "password"),
    Credential::new("admin", "1234"),
];

const ASUS: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "1234"),
];

const LINKSYS: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "password"),
];

const HUAWEI: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", "HuaWei123"),
    Credential::new("admin", ""),
];

const CISCO: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", "cisco"),
    Credential::new("admin", ""),
];

const BELKIN: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "1234"),
];

const TENDA: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "password"),
];

const XIAOMI: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "xiaomi"),
];

const ZTE: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "1234"),
];

const ARRIS: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", "password"),
    Credential::new("admin", ""),
];

const GENERIC: &[Credential] = &[
    Credential::new("admin", "admin"),
    Credential::new("admin", ""),
    Credential::new("admin", "password"),
    Credential::new("admin", "1234"),
    Credential::new("root", "root"),
    Credential::new("root", ""),
    Credential::new("user", "user"),
];

/// Defaults for `brand`, never empty.
pub fn defaults_for(brand: Brand) -> &'static [Credential] {
    match brand {
        Brand::TpLink => TP_LINK,
        Brand::DLink => D_LINK,
        Brand::Netgear => NETGEAR,
        Brand::Asus => ASUS,
        Brand::Linksys => LINKSYS,
        Brand::Huawei => HUAWEI,
        Brand::Cisco => CISCO,
        Brand::Belkin => BELKIN,
        Brand::Tenda => TENDA,
        Brand::Xiaomi => XIAOMI,
        Brand::Zte => ZTE,
        Brand::Arris => ARRIS,
        Brand::Generic => GENERIC,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
