use pkg_types::pod::Pod;
use pkg_types::quota::ResourceQuota;
use serde::Serialize;
use tracing::debug;

use crate::dimension::PerDimension;
use crate::error::{RecordKind, ReportError, Result};
use crate::normalize::NormalizedQuotaReport;
use crate::workload::{WorkloadReport, aggregate_workloads};

/// Scope label used in errors and logs for fleet-wide reports.
pub const CLUSTER_SCOPE: &str = "cluster";

/// Raw accumulator over resource quotas: allocated (hard) and used sums per
/// dimension, plus the fleet-wide largest consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuotaReport {
    pub allocated: PerDimension<u64>,
    pub used: PerDimension<u64>,
    pub quotas: usize,
    pub top_consumers: WorkloadReport,
}

impl QuotaReport {
    /// Add one quota's hard and used amounts. Absent dimensions count as zero.
    pub fn fold_quota(&mut self, quota: &ResourceQuota) -> Result<()> {
        let overflow = |dimension| ReportError::QuantityOverflow { dimension };
        let mut allocated = self.allocated;
        allocated
            .checked_accumulate(&PerDimension::from_quota(&quota.hard))
            .map_err(overflow)?;
        self.used
            .checked_accumulate(&PerDimension::from_quota(&quota.used))
            .map_err(overflow)?;
        self.allocated = allocated;
        self.quotas += 1;
        Ok(())
    }

    /// Derive the human-scale view. The accumulator itself is left untouched.
    pub fn normalize(&self) -> NormalizedQuotaReport {
        NormalizedQuotaReport::from_raw(self)
    }
}

/// Sum `quotas` and attach the largest consumers among `workloads`.
///
/// No quotas at all is an error, checked before the pods are looked at:
/// quota objects missing from the queried scope is a configuration mismatch.
/// An empty `workloads` slice is an error as well.
pub fn aggregate_quotas(quotas: &[ResourceQuota], workloads: &[Pod]) -> Result<QuotaReport> {
    if quotas.is_empty() {
        return Err(ReportError::empty(RecordKind::Quotas, CLUSTER_SCOPE));
    }

    let mut report = QuotaReport::default();
    for quota in quotas {
        report.fold_quota(quota)?;
    }
    debug!("Summed {} resource quotas", report.quotas);

    report.top_consumers = aggregate_workloads(workloads, CLUSTER_SCOPE)?;
    Ok(report)
}
