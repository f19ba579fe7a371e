//! Cluster API paths and selector keys.

/// Cluster-wide pod listing endpoint (all namespaces).
pub const PODS_PATH: &str = "/api/v1/pods";

/// Cluster-wide resource quota listing endpoint (all namespaces).
pub const RESOURCE_QUOTAS_PATH: &str = "/api/v1/resourcequotas";

/// Query parameter carrying the field selector.
pub const FIELD_SELECTOR_PARAM: &str = "fieldSelector";

/// Field selector key for the node a pod is bound to.
pub const FIELD_NODE_NAME: &str = "spec.nodeName";

/// Field selector key for the pod phase.
pub const FIELD_POD_PHASE: &str = "status.phase";
