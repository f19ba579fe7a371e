use serde::{Deserialize, Serialize};

/// Resource quota for a namespace: declared ceilings plus current usage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceQuota {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub hard: QuotaResources,
    #[serde(default)]
    pub used: QuotaResources,
}

/// Per-dimension quota amounts, keyed on the wire the way Kubernetes keys
/// `spec.hard` / `status.used`. Any dimension may be absent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuotaResources {
    /// CPU requests in millicores
    #[serde(default, rename = "requests.cpu")]
    pub requests_cpu_millis: Option<u64>,
    /// CPU limits in millicores
    #[serde(default, rename = "limits.cpu")]
    pub limits_cpu_millis: Option<u64>,
    /// Memory requests in bytes
    #[serde(default, rename = "requests.memory")]
    pub requests_memory_bytes: Option<u64>,
    /// Memory limits in bytes
    #[serde(default, rename = "limits.memory")]
    pub limits_memory_bytes: Option<u64>,
}
