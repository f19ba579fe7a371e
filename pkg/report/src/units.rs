//! Unit normalization from API units to presentation units.
//!
//! Both conversions truncate and neither is idempotent: feeding an already
//! converted value back in shrinks it again. Callers get at them through the
//! `normalize()` methods, which read the raw accumulator and build a separate
//! normalized view.

use pkg_constants::units::{BYTES_PER_GIB, CORE_UNIT_LABEL, GIB_UNIT_LABEL, MILLIS_PER_CORE};
use serde::Serialize;

/// Millicores to whole cores, truncating.
pub fn to_whole_compute_units(millis: u64) -> u64 {
    millis / MILLIS_PER_CORE
}

/// Bytes to gibibytes (1024³), truncating.
pub fn to_gibibytes(bytes: u64) -> u64 {
    bytes / BYTES_PER_GIB
}

/// Presentation unit of a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Cores,
    Gibibytes,
    /// Dimensionless limit/request ratio.
    Ratio,
}

impl Unit {
    /// Convert a raw quantity into this unit.
    pub(crate) fn convert(self, raw: u64) -> u64 {
        match self {
            Unit::Cores => to_whole_compute_units(raw),
            Unit::Gibibytes => to_gibibytes(raw),
            Unit::Ratio => raw,
        }
    }

    /// Suffix printed after the value; empty for ratios.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Cores => CORE_UNIT_LABEL,
            Unit::Gibibytes => GIB_UNIT_LABEL,
            Unit::Ratio => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_cores_truncate() {
        assert_eq!(to_whole_compute_units(2500), 2);
        assert_eq!(to_whole_compute_units(2999), 2);
        assert_eq!(to_whole_compute_units(999), 0);
        assert_eq!(to_whole_compute_units(5000), 5);
    }

    #[test]
    fn gibibytes_use_binary_units() {
        assert_eq!(to_gibibytes(3 * 1024 * 1024 * 1024), 3);
        assert_eq!(to_gibibytes(4 * 1024 * 1024 * 1024 - 1), 3);
        // 2 GB decimal is still under 2 GiB
        assert_eq!(to_gibibytes(2_000_000_000), 1);
    }

    #[test]
    fn conversion_is_not_idempotent() {
        let once = to_whole_compute_units(2500);
        assert_eq!(once, 2);
        assert_eq!(to_whole_compute_units(once), 0);

        let gib = to_gibibytes(3 * 1024 * 1024 * 1024);
        assert_eq!(to_gibibytes(gib), 0);
    }

    #[test]
    fn ratios_pass_through() {
        assert_eq!(Unit::Ratio.convert(4), 4);
        assert_eq!(Unit::Cores.convert(1500), 1);
        assert_eq!(Unit::Gibibytes.label(), "Gi");
        assert_eq!(Unit::Cores.label(), "core");
    }
}
