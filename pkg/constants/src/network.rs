//! Network-related constants.

/// Default cluster API address (HTTP).
pub const DEFAULT_API_ADDR: &str = "http://127.0.0.1:6443";

/// Timeout for a single list call against the cluster API, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
