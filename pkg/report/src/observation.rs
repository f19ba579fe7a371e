use pkg_types::pod::Pod;
use serde::Serialize;

/// Largest value seen so far for one dimension, plus the pod that produced it.
///
/// Starts at zero with empty owner fields. Replacement is strict (`>`), so
/// among equal values the first pod folded in keeps ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaxObservation {
    pub value: u64,
    pub pod_name: String,
    pub namespace: String,
}

impl MaxObservation {
    /// Record `value` from `owner` if it beats the current maximum.
    /// Returns whether the observation changed.
    pub fn observe(&mut self, value: u64, owner: &Pod) -> bool {
        if value <= self.value {
            return false;
        }
        self.value = value;
        self.pod_name.clone_from(&owner.name);
        self.namespace.clone_from(&owner.namespace);
        true
    }
}
