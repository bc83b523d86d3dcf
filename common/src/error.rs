use std::time::Duration;

use thiserror::Error;

/// Typed failure conditions raised by the probing layer.
///
/// Expected network conditions (refused connections, probe timeouts, TLS
/// failures against a router) are not errors anywhere in this workspace:
/// the probes swallow those and move on to their documented fallbacks.
/// `ProbeError` covers the remaining conditions a caller may want to branch
/// on, such as a platform tool being absent or misbehaving.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The platform tool ran but exited unsuccessfully.
    #[error("`{name}` exited with {status}: {detail}")]
    CommandFailed {
        name: &'static str,
        status: String,
        detail: String,
    },

    /// The platform tool did not finish within its allotted time.
    #[error("`{name}` did not finish within {timeout:?}")]
    CommandTimeout {
        name: &'static str,
        timeout: Duration,
    },

    /// The platform tool could not be launched at all.
    #[error("`{name}` is not available on this system")]
    CommandMissing { name: &'static str },

    /// The capability has no implementation for the running platform.
    #[error("{operation} is not supported on {os}")]
    Unsupported {
        operation: &'static str,
        os: &'static str,
    },

    /// Every speed test engine failed or was unavailable.
    #[error("all speed test engines failed")]
    SpeedTestUnavailable,
}
