use thiserror::Error;

use crate::dimension::Dimension;

/// Which record listing came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Workloads,
    Quotas,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Workloads => write!(f, "pods"),
            RecordKind::Quotas => write!(f, "resource quotas"),
        }
    }
}

/// Errors that abort a report. No variant leaves a partial report behind.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Listing pods or quotas failed (network, auth, API error). Not retried.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A listing required for a meaningful report matched nothing.
    #[error("no {kind} found for {scope}")]
    EmptyResultSet { kind: RecordKind, scope: String },

    /// A running sum no longer fits in a 64-bit quantity.
    #[error("{dimension} total overflows a 64-bit quantity")]
    QuantityOverflow { dimension: Dimension },

    /// The node name can never match a node.
    #[error("invalid node name: {0}")]
    InvalidNodeName(String),
}

impl ReportError {
    pub fn unavailable(err: anyhow::Error) -> Self {
        ReportError::DataSourceUnavailable(err.into())
    }

    pub fn empty(kind: RecordKind, scope: impl Into<String>) -> Self {
        ReportError::EmptyResultSet {
            kind,
            scope: scope.into(),
        }
    }

    /// True for the empty-listing conditions. The CLI exits with a distinct
    /// status for these.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, ReportError::EmptyResultSet { .. })
    }
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_scope() {
        let err = ReportError::empty(RecordKind::Quotas, "cluster");
        assert_eq!(err.to_string(), "no resource quotas found for cluster");
        assert!(err.is_empty_result());

        let err = ReportError::empty(RecordKind::Workloads, "node worker-1");
        assert_eq!(err.to_string(), "no pods found for node worker-1");
    }

    #[test]
    fn unavailable_keeps_source_message() {
        let err = ReportError::unavailable(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "data source unavailable: connection refused");
        assert!(!err.is_empty_result());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn overflow_names_the_dimension() {
        let err = ReportError::QuantityOverflow {
            dimension: Dimension::MemoryLimit,
        };
        assert_eq!(err.to_string(), "Memory limit total overflows a 64-bit quantity");
        assert!(!err.is_empty_result());
    }
}
