//! Human-scale report views.
//!
//! Each view is built from a raw accumulator by its `normalize()` method and
//! has no conversion of its own: a normalized value cannot be scaled twice.

use serde::Serialize;

use crate::dimension::{Dimension, PerDimension, PerResource, Resource};
use crate::observation::MaxObservation;
use crate::quota::QuotaReport;
use crate::units::Unit;
use crate::workload::WorkloadReport;

/// A value already converted into its presentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scaled {
    pub value: u64,
    pub unit: Unit,
}

impl Scaled {
    fn from_raw(raw: u64, unit: Unit) -> Self {
        Self {
            value: unit.convert(raw),
            unit,
        }
    }
}

impl std::fmt::Display for Scaled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            Unit::Ratio => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit.label()),
        }
    }
}

/// A maximum with its owning pod, in presentation units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedObservation {
    pub value: Scaled,
    pub pod_name: String,
    pub namespace: String,
}

impl NormalizedObservation {
    fn from_raw(raw: &MaxObservation, unit: Unit) -> Self {
        Self {
            value: Scaled::from_raw(raw.value, unit),
            pod_name: raw.pod_name.clone(),
            namespace: raw.namespace.clone(),
        }
    }

    /// Whether a pod holds this maximum. False when every value seen was zero.
    pub fn has_owner(&self) -> bool {
        !self.pod_name.is_empty()
    }
}

/// One dimension of a workload report: its sum and its maximum.
#[derive(Debug, Clone, Copy)]
pub struct DimensionRow<'a> {
    pub dimension: Dimension,
    pub sum: Scaled,
    pub max: &'a NormalizedObservation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedWorkloadReport {
    pub sums: PerDimension<Scaled>,
    pub maxima: PerDimension<NormalizedObservation>,
    pub ratios: PerResource<NormalizedObservation>,
    pub pods: usize,
    pub containers: usize,
}

impl NormalizedWorkloadReport {
    pub(crate) fn from_raw(raw: &WorkloadReport) -> Self {
        Self {
            sums: raw.sums.map(|d, v| Scaled::from_raw(*v, d.resource().unit())),
            maxima: raw
                .maxima
                .map(|d, obs| NormalizedObservation::from_raw(obs, d.resource().unit())),
            ratios: raw
                .ratios
                .map(|_, obs| NormalizedObservation::from_raw(obs, Unit::Ratio)),
            pods: raw.pods,
            containers: raw.containers,
        }
    }

    /// Sum and maximum per dimension, in report order.
    pub fn rows(&self) -> impl Iterator<Item = DimensionRow<'_>> {
        Dimension::ALL.into_iter().map(move |dimension| DimensionRow {
            dimension,
            sum: self.sums[dimension],
            max: &self.maxima[dimension],
        })
    }

    /// Limit/request ratio maxima, CPU first.
    pub fn ratio_rows(&self) -> impl Iterator<Item = (Resource, &NormalizedObservation)> {
        self.ratios.iter()
    }
}

/// Allocated and used quota totals for one dimension.
#[derive(Debug, Clone, Copy)]
pub struct QuotaRow {
    pub dimension: Dimension,
    pub allocated: Scaled,
    pub used: Scaled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedQuotaReport {
    pub allocated: PerDimension<Scaled>,
    pub used: PerDimension<Scaled>,
    pub quotas: usize,
    pub top_consumers: NormalizedWorkloadReport,
}

impl NormalizedQuotaReport {
    pub(crate) fn from_raw(raw: &QuotaReport) -> Self {
        let scale = |d: Dimension, v: &u64| Scaled::from_raw(*v, d.resource().unit());
        Self {
            allocated: raw.allocated.map(scale),
            used: raw.used.map(scale),
            quotas: raw.quotas,
            top_consumers: NormalizedWorkloadReport::from_raw(&raw.top_consumers),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = QuotaRow> + '_ {
        Dimension::ALL.into_iter().map(move |dimension| QuotaRow {
            dimension,
            allocated: self.allocated[dimension],
            used: self.used[dimension],
        })
    }
}

/// Node-scoped report ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedNodeReport {
    pub node_name: String,
    #[serde(flatten)]
    pub workloads: NormalizedWorkloadReport,
}

impl NormalizedNodeReport {
    pub(crate) fn new(node_name: &str, workloads: NormalizedWorkloadReport) -> Self {
        Self {
            node_name: node_name.to_string(),
            workloads,
        }
    }
}
