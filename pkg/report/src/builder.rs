//! Report entry points: list records from a [`ClusterSource`] and aggregate.

use pkg_types::pod::{Pod, PodPhase};
use pkg_types::validate::validate_node_name;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{RecordKind, ReportError, Result};
use crate::normalize::{NormalizedNodeReport, NormalizedQuotaReport};
use crate::quota::{CLUSTER_SCOPE, QuotaReport, aggregate_quotas};
use crate::source::{ClusterSource, PodSelector};
use crate::workload::{WorkloadReport, aggregate_workloads};

/// Which reports to build. Constructed once at startup and passed in;
/// nothing in the core reads process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    pub node_name: Option<String>,
    pub cluster_report: bool,
}

impl ReportConfig {
    pub fn new(node_name: Option<String>, cluster_report: bool) -> Self {
        Self {
            node_name: node_name.filter(|n| !n.is_empty()),
            cluster_report,
        }
    }

    /// True when no report was selected.
    pub fn is_empty(&self) -> bool {
        self.node_name.is_none() && !self.cluster_report
    }
}

/// Raw node-scoped report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
    pub node_name: String,
    pub workloads: WorkloadReport,
}

impl NodeReport {
    pub fn normalize(&self) -> NormalizedNodeReport {
        NormalizedNodeReport::new(&self.node_name, self.workloads.normalize())
    }
}

/// Everything one invocation produced, in raw units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reports {
    pub node: Option<NodeReport>,
    pub cluster: Option<QuotaReport>,
}

impl Reports {
    pub fn normalize(&self) -> NormalizedReports {
        NormalizedReports {
            node: self.node.as_ref().map(NodeReport::normalize),
            cluster: self.cluster.as_ref().map(QuotaReport::normalize),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedReports {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NormalizedNodeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<NormalizedQuotaReport>,
}

/// Build every report `config` asks for, node first. The first error aborts.
pub async fn build_reports(source: &dyn ClusterSource, config: &ReportConfig) -> Result<Reports> {
    let mut reports = Reports::default();
    if let Some(node_name) = &config.node_name {
        reports.node = Some(build_node_report(source, node_name).await?);
    }
    if config.cluster_report {
        reports.cluster = Some(build_cluster_report(source).await?);
    }
    Ok(reports)
}

/// Aggregate the Running and Pending pods bound to `node_name`.
/// Running pods are folded before Pending ones.
pub async fn build_node_report(source: &dyn ClusterSource, node_name: &str) -> Result<NodeReport> {
    validate_node_name(node_name).map_err(|e| ReportError::InvalidNodeName(e.to_string()))?;
    info!("Building node report for {}", node_name);

    let mut pods = list_pods(
        source,
        &PodSelector::on_node_in_phase(node_name, PodPhase::Running),
    )
    .await?;
    let pending = list_pods(
        source,
        &PodSelector::on_node_in_phase(node_name, PodPhase::Pending),
    )
    .await?;
    pods.extend(pending);

    let scope = format!("node {}", node_name);
    let workloads = aggregate_workloads(&pods, &scope)?;
    info!(
        "Node {}: {} pods, {} containers",
        node_name, workloads.pods, workloads.containers
    );

    Ok(NodeReport {
        node_name: node_name.to_string(),
        workloads,
    })
}

/// Sum every resource quota in the cluster and find the largest consumers
/// among all pods.
pub async fn build_cluster_report(source: &dyn ClusterSource) -> Result<QuotaReport> {
    info!("Building cluster quota report");

    let quotas = source
        .list_quotas()
        .await
        .map_err(ReportError::unavailable)?;
    debug!("Listed {} resource quotas", quotas.len());
    if quotas.is_empty() {
        return Err(ReportError::empty(RecordKind::Quotas, CLUSTER_SCOPE));
    }

    let pods = list_pods(source, &PodSelector::all()).await?;
    let report = aggregate_quotas(&quotas, &pods)?;
    info!(
        "Cluster: {} quotas, {} pods, {} containers",
        report.quotas, report.top_consumers.pods, report.top_consumers.containers
    );
    Ok(report)
}

/// List pods and drop any the source returned outside `selector`.
async fn list_pods(source: &dyn ClusterSource, selector: &PodSelector) -> Result<Vec<Pod>> {
    let listed = source
        .list_pods(selector)
        .await
        .map_err(ReportError::unavailable)?;
    let total = listed.len();

    let pods: Vec<Pod> = listed.into_iter().filter(|p| selector.matches(p)).collect();
    if pods.len() != total {
        warn!(
            "Source returned {} pods outside selector {}, ignoring them",
            total - pods.len(),
            selector
        );
    }
    debug!("Listed {} pods for {}", pods.len(), selector);
    Ok(pods)
}
