//! Resource unit divisors.

/// Millicores in one whole core.
pub const MILLIS_PER_CORE: u64 = 1000;

/// Bytes in one gibibyte (1024³).
pub const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Label printed next to whole compute units.
pub const CORE_UNIT_LABEL: &str = "core";

/// Label printed next to gibibytes.
pub const GIB_UNIT_LABEL: &str = "Gi";
