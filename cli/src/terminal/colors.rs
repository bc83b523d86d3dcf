use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SSID: Color = Color::BrightCyan;
pub const ADDRESS: Color = Color::BrightBlue;
pub const SECRET: Color = Color::BrightMagenta;

pub const SIGNAL_STRONG: Color = Color::BrightGreen;
pub const SIGNAL_OKAY: Color = Color::BrightYellow;
pub const SIGNAL_WEAK: Color = Color::BrightRed;
