//! Filesystem path constants.

/// Directory under the user's home holding the report config.
pub const CONFIG_DIR: &str = ".k3rs";

/// Filename of the report config inside `CONFIG_DIR`.
pub const CONFIG_FILENAME: &str = "report.yaml";

/// Fallback config path when no home directory can be resolved.
pub const FALLBACK_CONFIG_PATH: &str = "/etc/k3rs/report.yaml";
