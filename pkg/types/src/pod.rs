use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Resource requirements ---

/// One set of resource amounts in the fine-grained units the API speaks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ResourceList {
    /// CPU in millicores (1000 = 1 core)
    #[serde(default)]
    pub cpu_millis: u64,
    /// Memory in bytes
    #[serde(default)]
    pub memory_bytes: u64,
}

impl ResourceList {
    pub fn new(cpu_millis: u64, memory_bytes: u64) -> Self {
        Self {
            cpu_millis,
            memory_bytes,
        }
    }
}

/// Requests and limits declared by a container. Missing sections read as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ResourceRequirements {
    #[serde(default)]
    pub requests: ResourceList,
    #[serde(default)]
    pub limits: ResourceList,
}

// --- Container spec ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub resources: ResourceRequirements,
}

// --- Pod phase ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PodPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl std::fmt::Display for PodPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PodPhase::Pending => write!(f, "Pending"),
            PodPhase::Running => write!(f, "Running"),
            PodPhase::Succeeded => write!(f, "Succeeded"),
            PodPhase::Failed => write!(f, "Failed"),
            PodPhase::Unknown => write!(f, "Unknown"),
        }
    }
}

// --- Pod spec ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    /// The node this pod is bound to (set by the scheduler)
    #[serde(default)]
    pub node_name: Option<String>,
}

// --- Pod ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub spec: PodSpec,
    #[serde(default)]
    pub phase: PodPhase,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Pod {
    /// Name of the node this pod is bound to, if scheduled.
    pub fn node_name(&self) -> Option<&str> {
        self.spec.node_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resources_read_as_zero() {
        let json = r#"{
            "name": "web-0",
            "namespace": "shop",
            "spec": { "containers": [ { "name": "app", "image": "nginx:latest" } ] },
            "phase": "Running"
        }"#;
        let pod: Pod = serde_json::from_str(json).unwrap();
        assert_eq!(pod.phase, PodPhase::Running);
        assert_eq!(pod.spec.containers.len(), 1);
        assert_eq!(
            pod.spec.containers[0].resources,
            ResourceRequirements::default()
        );
        assert!(pod.node_name().is_none());
    }

    #[test]
    fn partial_limits_keep_declared_fields() {
        let json = r#"{
            "name": "app",
            "resources": { "limits": { "cpu_millis": 2000 } }
        }"#;
        let container: ContainerSpec = serde_json::from_str(json).unwrap();
        assert_eq!(container.resources.limits.cpu_millis, 2000);
        assert_eq!(container.resources.limits.memory_bytes, 0);
        assert_eq!(container.resources.requests, ResourceList::default());
    }

    #[test]
    fn phase_display_matches_api_spelling() {
        assert_eq!(PodPhase::Running.to_string(), "Running");
        assert_eq!(PodPhase::Pending.to_string(), "Pending");
    }
}
