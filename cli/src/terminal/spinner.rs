use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Dress the span's progress bar in the house style and give it a
/// first message. The span must carry `indicatif.pb_show`.
pub fn attach(span: &Span, msg: &str) {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(TICK_STRINGS);

    span.pb_set_style(&style);
    span.pb_set_message(msg);
}

pub fn update(span: &Span, msg: &str) {
    span.pb_set_message(msg);
}
