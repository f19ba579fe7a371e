//! Resource usage reports over pods and resource quotas.
//!
//! Raw records flow one way: a [`ClusterSource`] lists pods and quotas, the
//! aggregators fold them into raw accumulators ([`WorkloadReport`],
//! [`QuotaReport`]) and `normalize()` derives the human-scale views handed to
//! renderers. Normalized views are separate types, so unit conversion happens
//! exactly once per report.

pub mod builder;
pub mod dimension;
pub mod error;
pub mod normalize;
pub mod observation;
pub mod quota;
pub mod source;
pub mod units;
pub mod workload;

#[cfg(test)]
mod fixtures;

pub use builder::{
    NodeReport, NormalizedReports, ReportConfig, Reports, build_cluster_report, build_node_report,
    build_reports,
};
pub use dimension::{Dimension, PerDimension, PerResource, Resource};
pub use error::{RecordKind, ReportError};
pub use normalize::{
    NormalizedNodeReport, NormalizedObservation, NormalizedQuotaReport, NormalizedWorkloadReport,
    Scaled,
};
pub use observation::MaxObservation;
pub use quota::{QuotaReport, aggregate_quotas};
pub use source::{ClusterSource, PodSelector};
pub use units::{Unit, to_gibibytes, to_whole_compute_units};
pub use workload::{WorkloadReport, aggregate_workloads};
