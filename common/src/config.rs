/// Runtime flags shared by every subcommand.
///
/// Built once from the command line in `main` and passed down by reference;
/// commands never mutate it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Prints results as JSON on stdout instead of the decorated view.
    ///
    /// Decorated output still goes to stderr, so piping stdout stays clean.
    pub json: bool,
    /// Quiet level: 1 drops banners and headers, 2 additionally drops
    /// per-item detail and keeps only the summary line.
    pub quiet: u8,
    /// Skips the startup banner even at quiet level 0.
    pub no_banner: bool,
}
