use pkg_types::pod::{Pod, ResourceRequirements};
use serde::Serialize;
use tracing::debug;

use crate::dimension::{Dimension, PerDimension, PerResource, Resource};
use crate::error::{RecordKind, ReportError, Result};
use crate::normalize::NormalizedWorkloadReport;
use crate::observation::MaxObservation;

/// Raw accumulator over the containers of a set of pods, in API units
/// (millicores, bytes).
///
/// Sums run over containers, not pods. Maxima carry the owning pod. Ratio
/// maxima only see containers with a non-zero request for that resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadReport {
    pub sums: PerDimension<u64>,
    pub maxima: PerDimension<MaxObservation>,
    /// Largest floor(limit / request) per resource.
    pub ratios: PerResource<MaxObservation>,
    pub pods: usize,
    pub containers: usize,
}

impl WorkloadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every container of `pod` into the report. A pod without
    /// containers counts as seen but changes no sum or maximum.
    pub fn fold_pod(&mut self, pod: &Pod) -> Result<()> {
        self.pods += 1;
        for container in &pod.spec.containers {
            self.fold_container(pod, &container.resources)?;
        }
        Ok(())
    }

    fn fold_container(&mut self, owner: &Pod, resources: &ResourceRequirements) -> Result<()> {
        let quantities = PerDimension::from_requirements(resources);
        self.sums
            .checked_accumulate(&quantities)
            .map_err(|dimension| ReportError::QuantityOverflow { dimension })?;
        self.containers += 1;
        for d in Dimension::ALL {
            self.maxima[d].observe(quantities[d], owner);
        }

        for resource in Resource::ALL {
            if let Some(ratio) = limit_request_ratio(&quantities, resource) {
                self.ratios[resource].observe(ratio, owner);
            }
        }
        Ok(())
    }

    /// Derive the human-scale view. The accumulator itself is left untouched.
    pub fn normalize(&self) -> NormalizedWorkloadReport {
        NormalizedWorkloadReport::from_raw(self)
    }
}

/// floor(limit / request) for `resource`, or `None` when nothing was requested.
fn limit_request_ratio(quantities: &PerDimension<u64>, resource: Resource) -> Option<u64> {
    let (request, limit) = match resource {
        Resource::Cpu => (quantities.cpu_request, quantities.cpu_limit),
        Resource::Memory => (quantities.memory_request, quantities.memory_limit),
    };
    if request == 0 {
        return None;
    }
    Some(limit / request)
}

/// Aggregate `pods` in order into a fresh report.
///
/// An empty listing is an error: a selector that matched nothing should be
/// surfaced, not printed as zeros. `scope` names the selection in that error.
pub fn aggregate_workloads(pods: &[Pod], scope: &str) -> Result<WorkloadReport> {
    if pods.is_empty() {
        return Err(ReportError::empty(RecordKind::Workloads, scope));
    }

    let mut report = WorkloadReport::new();
    for pod in pods {
        report.fold_pod(pod)?;
    }

    debug!(
        "Aggregated {} pods / {} containers for {}",
        report.pods, report.containers, scope
    );
    Ok(report)
}
