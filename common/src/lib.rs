//! Shared building blocks for the wispr workspace.
//!
//! This crate holds the data models, the run configuration and the typed
//! error conditions used across the probing core and the CLI. Nothing in
//! here performs IO.

pub mod config;
pub mod error;
pub mod model;

#[doc(hidden)]
pub use tracing;

/// An INFO event the terminal formatter renders with the `[+]` symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}
