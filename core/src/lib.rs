//! # wispr-core
//!
//! Probing logic behind the `wispr` CLI: router discovery and
//! fingerprinting, WiFi scanning, saved-credential reading, connectivity
//! checks, speed measurement and QR payload generation.
//!
//! OS-specific command invocation and parsing live behind the
//! [`platform::PlatformNetworkProbe`] trait; everything above it is
//! platform-neutral and unit-testable.

pub mod network;
pub mod passwords;
pub mod platform;
pub mod qr;
pub mod router;
pub mod speed;
pub mod status;
pub mod system;
pub mod wifi;
