use async_trait::async_trait;
use pkg_constants::api::{FIELD_NODE_NAME, FIELD_POD_PHASE};
use pkg_types::pod::{Pod, PodPhase};
use pkg_types::quota::ResourceQuota;

/// Which pods to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodSelector {
    pub node_name: Option<String>,
    pub phase: Option<PodPhase>,
}

impl PodSelector {
    /// All pods in all namespaces.
    pub fn all() -> Self {
        Self::default()
    }

    /// Pods bound to `node` in `phase`.
    pub fn on_node_in_phase(node: &str, phase: PodPhase) -> Self {
        Self {
            node_name: Some(node.to_string()),
            phase: Some(phase),
        }
    }

    /// Render as a Kubernetes field selector, e.g.
    /// `spec.nodeName=worker-1,status.phase=Running`. Empty for [`PodSelector::all`].
    pub fn field_selector(&self) -> String {
        let mut terms = Vec::new();
        if let Some(node) = &self.node_name {
            terms.push(format!("{}={}", FIELD_NODE_NAME, node));
        }
        if let Some(phase) = &self.phase {
            terms.push(format!("{}={}", FIELD_POD_PHASE, phase));
        }
        terms.join(",")
    }

    pub fn matches(&self, pod: &Pod) -> bool {
        if let Some(node) = &self.node_name {
            if pod.node_name() != Some(node.as_str()) {
                return false;
            }
        }
        if let Some(phase) = self.phase {
            if pod.phase != phase {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for PodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let selector = self.field_selector();
        if selector.is_empty() {
            write!(f, "<all pods>")
        } else {
            write!(f, "{}", selector)
        }
    }
}

/// Where pods and quotas come from. Each call returns a fully materialized
/// listing or fails as a whole.
#[async_trait]
pub trait ClusterSource: Send + Sync {
    /// List pods matching `selector`, across all namespaces.
    async fn list_pods(&self, selector: &PodSelector) -> anyhow::Result<Vec<Pod>>;

    /// List resource quotas across all namespaces.
    async fn list_quotas(&self) -> anyhow::Result<Vec<ResourceQuota>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_pod;

    #[test]
    fn field_selector_rendering() {
        let sel = PodSelector::on_node_in_phase("worker-1", PodPhase::Pending);
        assert_eq!(
            sel.field_selector(),
            "spec.nodeName=worker-1,status.phase=Pending"
        );
        assert_eq!(PodSelector::all().field_selector(), "");
        assert_eq!(PodSelector::all().to_string(), "<all pods>");
    }

    #[test]
    fn matches_node_and_phase() {
        let mut pod = make_pod("web", "shop", &[]);
        let running_here = PodSelector::on_node_in_phase("worker-1", PodPhase::Running);
        assert!(running_here.matches(&pod));
        assert!(PodSelector::all().matches(&pod));

        pod.phase = PodPhase::Succeeded;
        assert!(!running_here.matches(&pod));

        pod.phase = PodPhase::Running;
        pod.spec.node_name = Some("worker-2".to_string());
        assert!(!running_here.matches(&pod));

        pod.spec.node_name = None;
        assert!(!running_here.matches(&pod));
        assert!(PodSelector::all().matches(&pod));
    }
}
