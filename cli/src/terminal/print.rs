//! Decorated output for the 64-column terminal layout.
//!
//! Every line routes through [`print`], which emits it as a raw event the
//! log formatter forwards untouched. The only layout state is a thread
//! local carrying the key column width of the aligned block currently
//! being printed.

use std::{cell::Cell, fmt::Display};

use crate::terminal::{banner, colors};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;
use wispr_common::config::Config;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! wprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Values printable through [`aligned_line`]: plain text picks up the
/// default color, already-colored text keeps its own.
pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: "wispr::print", raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.json || cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ WISPR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let room: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    let rule = |n: usize| "═".repeat(n).bright_black();

    print(&format!(
        "{}{}{}",
        rule(room / 2),
        title.bright_green().bold(),
        rule(room - room / 2)
    ));
    banner::print();
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.json || cfg.quiet > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg).to_uppercase();
    let room: usize = TOTAL_WIDTH.saturating_sub(title.chars().count());

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(room / 2),
        title.bright_green(),
        "─".repeat(room - room / 2)
    )
    .bright_black();

    print(&line.to_string());
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
}

/// One `key....: value` row, dotted out to the width in
/// [`GLOBAL_KEY_WIDTH`].
pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: usize = (GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len());
    let leader: ColoredString = format!("{}:", ".".repeat(dots)).color(colors::SEPARATOR);
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), leader, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!(
        "{} {}",
        prefix,
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    let open: ColoredString = "[".color(colors::SEPARATOR);
    let close: ColoredString = "]".color(colors::SEPARATOR);
    print(&format!(
        "{}{}{} {}",
        open,
        idx.to_string().color(colors::ACCENT),
        close,
        name.color(colors::PRIMARY)
    ));
}

/// Branch rows under a [`tree_head`], keys dotted out to the longest key
/// in the block.
pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if last { "└─" } else { "├─" }.bright_black();
        let dots: usize = (key_width + 1).saturating_sub(key.chars().count());
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.as_str().color(colors::TEXT_DEFAULT),
            ".".repeat(dots).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    print(&format!("{}{}", " ".repeat(pad), msg));
}

const NO_RESULTS_0: &str = r#"
             _____   __  __   ____    _____  __   __
            | ____| |  \/  | |  _ \  |_   _| \ \ / /
            |  _|   | |\/| | | |_) |   | |    \ V /
            | |___  | |  | | |  __/    | |     | |
            |_____| |_|  |_| |_|       |_|     |_|
"#;

pub fn no_results() {
    print(&NO_RESULTS_0.red().bold().to_string());
}

pub fn end_of_program() {
    fat_separator();
}
